// Output sink trait.
//
// Anything that can show a word cloud implements this; the pipeline calls
// `emit` exactly once per update.

use std::io;

use crate::window::WordCount;

/// Receives word cloud updates, most frequent word first.
pub trait OutputSink {
    /// Render one update. Errors are I/O failures of the underlying writer.
    fn emit(&mut self, cloud: &[WordCount]) -> io::Result<()>;
}

/// Collects updates in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub updates: Vec<Vec<WordCount>>,
}

impl OutputSink for MemorySink {
    fn emit(&mut self, cloud: &[WordCount]) -> io::Result<()> {
        self.updates.push(cloud.to_vec());
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn emit(&mut self, cloud: &[WordCount]) -> io::Result<()> {
        (**self).emit(cloud)
    }
}
