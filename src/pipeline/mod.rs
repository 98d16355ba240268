// Streaming pipeline: lines in, word cloud updates out.

pub mod schedule;
pub mod stream;

pub use schedule::UpdateSchedule;
pub use stream::{Pipeline, RunSummary};
