// Terminal bar chart for word cloud updates.
//
// Each word gets a bar scaled against the most frequent word in the update.
// Bars are colored by their share of the top count so the heavy hitters
// stand out when the chart scrolls by.

use std::io::{self, Write};

use colored::Colorize;

use super::traits::OutputSink;
use super::truncate_label;
use crate::window::WordCount;

/// Width of a full-length bar, in characters.
const BAR_WIDTH: usize = 30;
/// Longer words are cut so bars stay aligned.
const LABEL_WIDTH: usize = 20;

pub struct ChartSink<W: Write> {
    out: W,
    updates: u64,
}

impl<W: Write> ChartSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, updates: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Number of filled cells for `count` relative to `max`.
pub fn bar_len(count: usize, max: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let filled = (count as f64 / max as f64 * BAR_WIDTH as f64).round() as usize;
    filled.clamp(1, BAR_WIDTH)
}

fn colorize_bar(bar: String, share: f64) -> colored::ColoredString {
    if share >= 0.75 {
        bar.bright_green()
    } else if share >= 0.40 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}

impl<W: Write> OutputSink for ChartSink<W> {
    fn emit(&mut self, cloud: &[WordCount]) -> io::Result<()> {
        self.updates += 1;
        writeln!(
            self.out,
            "{}",
            format!("=== Word cloud (update {}) ===", self.updates).bold()
        )?;

        if cloud.is_empty() {
            writeln!(self.out, "  {}", "(no words meet the minimum frequency)".dimmed())?;
        }

        let max = cloud.iter().map(|wc| wc.count).max().unwrap_or(0);
        for (i, wc) in cloud.iter().enumerate() {
            let filled = bar_len(wc.count, max);
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(BAR_WIDTH - filled));
            let share = wc.count as f64 / max as f64;

            writeln!(
                self.out,
                "  {:>2}. {:<width$} {} {}",
                i + 1,
                truncate_label(&wc.word, LABEL_WIDTH),
                colorize_bar(bar, share),
                wc.count,
                width = LABEL_WIDTH + 3,
            )?;
        }

        writeln!(self.out)?;
        self.out.flush()
    }
}
