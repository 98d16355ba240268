use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::input::{ignore_list, LineSource};
use crate::output::OutputFormat;

pub const DEFAULT_CLOUD_SIZE: usize = 10;
pub const DEFAULT_MIN_LENGTH: usize = 6;
pub const DEFAULT_WINDOW_SIZE: usize = 1000;
pub const DEFAULT_MIN_FREQUENCY: usize = 3;
pub const DEFAULT_UPDATE_FREQUENCY: usize = 10;

/// Fixed settings for one sliding-window tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    /// Most entries a snapshot returns
    pub cloud_size: usize,
    /// Shortest word (in characters) that is counted
    pub min_length: usize,
    /// How many accepted words the window holds
    pub window_size: usize,
    /// Words that are never counted, lowercased
    pub ignore: HashSet<String>,
    /// Fewest occurrences a word needs to appear in a snapshot
    pub min_frequency: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            cloud_size: DEFAULT_CLOUD_SIZE,
            min_length: DEFAULT_MIN_LENGTH,
            window_size: DEFAULT_WINDOW_SIZE,
            ignore: HashSet::new(),
            min_frequency: DEFAULT_MIN_FREQUENCY,
        }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cloud_size == 0 {
            return Err(ConfigError::ZeroCloudSize);
        }
        if self.window_size == 0 {
            return Err(ConfigError::ZeroWindowSize);
        }
        if self.min_frequency == 0 {
            return Err(ConfigError::ZeroMinFrequency);
        }
        Ok(())
    }
}

/// Everything a single run needs, resolved from flags and environment.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub window: WindowConfig,
    /// Accepted words between updates once the window is full
    pub update_frequency: usize,
    pub input: LineSource,
    pub output: OutputFormat,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.validate()?;
        if self.update_frequency == 0 {
            return Err(ConfigError::ZeroUpdateFrequency);
        }
        Ok(())
    }
}

/// Build the ignore set from an optional ignore-list file and the built-in
/// English stop words.
///
/// An unreadable ignore list is logged and treated as empty.
pub fn build_ignore_set(ignore_list: Option<&Path>, stop_words: bool) -> HashSet<String> {
    let mut ignore = HashSet::new();

    if let Some(path) = ignore_list {
        match ignore_list::read(path) {
            Ok(words) => {
                debug!(path = %path.display(), words = words.len(), "Loaded ignore list");
                ignore.extend(words);
            }
            Err(e) => warn!(error = %e, "Ignore list unavailable, continuing without it"),
        }
    }

    if stop_words {
        ignore.extend(crate::text::english_stop_words());
    }

    ignore
}
