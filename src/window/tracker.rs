// SlidingWindow: a bounded FIFO of words plus a live count per word.
//
// Insertion appends to the FIFO and bumps the word's count. Once the FIFO
// holds more than `window_size` words the oldest one is dropped and its count
// decremented; a count that reaches zero removes the word from the map. The
// map therefore always describes exactly what is in the FIFO.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::WindowConfig;
use crate::error::ConfigError;
use crate::text::TokenFilter;

/// One entry of a snapshot: a word and how often it occurs in the window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// Word frequencies over the most recent `window_size` accepted words.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    cloud_size: usize,
    window_size: usize,
    min_frequency: usize,
    filter: TokenFilter,
    /// Accepted words, oldest at the front
    window: VecDeque<String>,
    /// Occurrences of each word currently in `window`; never holds zero
    counts: HashMap<String, usize>,
}

impl SlidingWindow {
    /// Build a tracker, refusing configurations with a zero cloud size,
    /// window size or minimum frequency.
    pub fn new(config: &WindowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cloud_size: config.cloud_size,
            window_size: config.window_size,
            min_frequency: config.min_frequency,
            filter: TokenFilter::from_config(config),
            window: VecDeque::new(),
            counts: HashMap::new(),
        })
    }

    /// Add a word to the window, evicting the oldest word when over capacity.
    ///
    /// Words the length/ignore rules reject are dropped without touching any
    /// state; the return value says whether the word was counted. The word is
    /// stored as given; only the ignore-set check folds case.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        let token = token.into();
        if !self.filter.accepts(&token) {
            return false;
        }

        *self.counts.entry(token.clone()).or_insert(0) += 1;
        self.window.push_back(token);

        if self.window.len() > self.window_size {
            if let Some(oldest) = self.window.pop_front() {
                self.release(&oldest);
            }
        }
        true
    }

    fn release(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(word);
                trace!(word, "Word left the window");
            }
        }
    }

    /// True once the window holds `window_size` words.
    pub fn is_full(&self) -> bool {
        self.window.len() >= self.window_size
    }

    /// The `k` most frequent words with at least `min_frequency` occurrences.
    ///
    /// Ordered by count descending; equal counts are ordered by word,
    /// ascending, so the result is deterministic.
    pub fn top_k(&self, k: usize, min_frequency: usize) -> Vec<WordCount> {
        let mut ranked: Vec<(&str, usize)> = self
            .counts
            .iter()
            .filter(|(_, count)| **count >= min_frequency)
            .map(|(word, &count)| (word.as_str(), count))
            .collect();

        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(k);

        ranked
            .into_iter()
            .map(|(word, count)| WordCount::new(word, count))
            .collect()
    }

    /// `top_k` with the configured cloud size and minimum frequency.
    pub fn snapshot(&self) -> Vec<WordCount> {
        self.top_k(self.cloud_size, self.min_frequency)
    }

    /// Occurrences of `word` in the window (0 when absent).
    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Words currently in the window, oldest first.
    pub fn window(&self) -> impl Iterator<Item = &str> {
        self.window.iter().map(String::as_str)
    }

    /// Number of words in the window.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Number of distinct words in the window.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn cloud_size(&self) -> usize {
        self.cloud_size
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn min_frequency(&self) -> usize {
        self.min_frequency
    }
}
