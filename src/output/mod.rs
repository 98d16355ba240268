// Output sinks: what happens to each word cloud update.
//
// The pipeline hands every update to an `OutputSink`. Sinks write to any
// `io::Write`, so the binary passes stdout and tests pass a `Vec<u8>`.

pub mod chart;
pub mod json;
pub mod plain;
pub mod traits;

use std::io::Write;

pub use chart::ChartSink;
pub use json::JsonSink;
pub use plain::PlainSink;
pub use traits::OutputSink;

/// Which sink renders updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `word: count` pairs on one line per update
    #[default]
    Plain,
    /// Colored horizontal bar chart
    Chart,
    /// One JSON object per line
    Json,
}

/// Build the sink for `format` writing to `out`.
pub fn make_sink<W: Write + 'static>(format: OutputFormat, out: W) -> Box<dyn OutputSink> {
    match format {
        OutputFormat::Plain => Box::new(PlainSink::new(out)),
        OutputFormat::Chart => Box::new(ChartSink::new(out)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
    }
}

/// Shorten a word label to `max_chars` characters, marking the cut with "...".
///
/// Cuts on a character boundary, so multi-byte words are safe.
pub fn truncate_label(word: &str, max_chars: usize) -> String {
    match word.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &word[..cut]),
        None => word.to_string(),
    }
}
