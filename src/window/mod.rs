// Sliding-window word frequencies.
//
// The tracker keeps the most recent accepted words in arrival order along
// with a count per distinct word, and answers top-K queries over them.

pub mod tracker;

pub use tracker::{SlidingWindow, WordCount};
