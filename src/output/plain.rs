// Plain text sink: `word: count` pairs separated by spaces, one line per update.

use std::io::{self, Write};

use super::traits::OutputSink;
use crate::window::WordCount;

pub struct PlainSink<W: Write> {
    out: W,
}

impl<W: Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render one update as a single line (without the trailing newline).
pub fn format_cloud(cloud: &[WordCount]) -> String {
    cloud
        .iter()
        .map(WordCount::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<W: Write> OutputSink for PlainSink<W> {
    fn emit(&mut self, cloud: &[WordCount]) -> io::Result<()> {
        writeln!(self.out, "{}", format_cloud(cloud))?;
        self.out.flush()
    }
}
