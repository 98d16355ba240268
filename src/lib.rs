// Wordcloud: sliding-window word frequencies over streaming text.
//
// This is the library root. Text is split and filtered in `text`, counted
// in `window`, and driven from line input to output sinks by `pipeline`.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod text;
pub mod window;

pub use error::{ConfigError, Error};
pub use window::{SlidingWindow, WordCount};
