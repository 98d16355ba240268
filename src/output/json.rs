// JSON lines sink: one object per update, for piping into other tools.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::traits::OutputSink;
use crate::window::WordCount;

#[derive(Debug, Serialize)]
struct Update<'a> {
    update: u64,
    emitted_at: DateTime<Utc>,
    words: &'a [WordCount],
}

pub struct JsonSink<W: Write> {
    out: W,
    updates: u64,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, updates: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for JsonSink<W> {
    fn emit(&mut self, cloud: &[WordCount]) -> io::Result<()> {
        self.updates += 1;
        let update = Update {
            update: self.updates,
            emitted_at: Utc::now(),
            words: cloud,
        };
        serde_json::to_writer(&mut self.out, &update)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_object_per_line() {
        let mut sink = JsonSink::new(Vec::new());
        sink.emit(&[WordCount::new("whale", 3)]).unwrap();
        sink.emit(&[]).unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["update"], 1);
        assert_eq!(lines[0]["words"][0]["word"], "whale");
        assert_eq!(lines[0]["words"][0]["count"], 3);
        assert!(lines[0]["emitted_at"].is_string());
        assert_eq!(lines[1]["update"], 2);
        assert_eq!(lines[1]["words"].as_array().unwrap().len(), 0);
    }
}
