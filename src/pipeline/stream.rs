// Pipeline driver: read lines, feed words into the window, and hand a
// snapshot to the sink whenever the update schedule fires.
//
// Lines are read as raw bytes and decoded lossily. Bytes that are not valid
// UTF-8 become U+FFFD, which is not a word character, so mis-encoded text
// only costs the words it touches.

use std::borrow::Cow;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use super::schedule::UpdateSchedule;
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::output::OutputSink;
use crate::text::split_words;
use crate::window::SlidingWindow;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the input
    pub lines: u64,
    /// Lines that contained invalid UTF-8
    pub lossy_lines: u64,
    /// Words that made it into the window
    pub accepted: u64,
    /// Updates handed to the sink
    pub updates: u64,
}

/// Tracker and schedule wired together for one run.
///
/// Length and ignore rules live in the tracker, so words go straight from
/// the splitter into `SlidingWindow::insert`.
#[derive(Debug, Clone)]
pub struct Pipeline {
    window: SlidingWindow,
    schedule: UpdateSchedule,
}

impl Pipeline {
    pub fn new(config: &RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            window: SlidingWindow::new(&config.window)?,
            schedule: UpdateSchedule::new(config.update_frequency)?,
        })
    }

    /// Feed one line; emits to `sink` for every update that falls due.
    ///
    /// Returns the number of words accepted and updates emitted.
    pub fn feed_line<S>(&mut self, line: &str, sink: &mut S) -> Result<(u64, u64)>
    where
        S: OutputSink + ?Sized,
    {
        let mut accepted = 0;
        let mut updates = 0;

        for word in split_words(line) {
            if !self.window.insert(word) {
                continue;
            }
            accepted += 1;

            if self.schedule.record(self.window.is_full()) {
                let cloud = self.window.snapshot();
                debug!(words = cloud.len(), "Emitting update");
                sink.emit(&cloud).map_err(Error::Output)?;
                updates += 1;
            }
        }

        Ok((accepted, updates))
    }

    /// Drive the pipeline until the reader is exhausted.
    pub async fn run<R, S>(&mut self, mut reader: R, sink: &mut S) -> Result<RunSummary>
    where
        R: AsyncBufRead + Unpin,
        S: OutputSink + ?Sized,
    {
        let mut buf = Vec::new();
        let mut summary = RunSummary::default();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(Error::Input)?;
            if read == 0 {
                break;
            }
            summary.lines += 1;

            let raw = strip_line_ending(&buf);
            let line = String::from_utf8_lossy(raw);
            if matches!(line, Cow::Owned(_)) {
                summary.lossy_lines += 1;
                debug!(line = summary.lines, "Line is not valid UTF-8, decoding lossily");
            }

            let (accepted, updates) = self.feed_line(&line, sink)?;
            summary.accepted += accepted;
            summary.updates += updates;
        }

        info!(
            lines = summary.lines,
            lossy_lines = summary.lossy_lines,
            accepted = summary.accepted,
            updates = summary.updates,
            window_full = self.window.is_full(),
            "Input exhausted"
        );

        Ok(summary)
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
