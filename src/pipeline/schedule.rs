// Update cadence.
//
// Nothing is emitted until the window is full. From then on an update fires
// every `every` accepted words, starting with the word that fills the window
// when `every` is 1.

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSchedule {
    every: usize,
    since_last: usize,
}

impl UpdateSchedule {
    pub fn new(every: usize) -> Result<Self, ConfigError> {
        if every == 0 {
            return Err(ConfigError::ZeroUpdateFrequency);
        }
        Ok(Self {
            every,
            since_last: 0,
        })
    }

    /// Record one accepted word; returns true when an update is due.
    pub fn record(&mut self, window_full: bool) -> bool {
        if !window_full {
            return false;
        }
        self.since_last += 1;
        if self.since_last >= self.every {
            self.since_last = 0;
            true
        } else {
            false
        }
    }
}
