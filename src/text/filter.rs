// Token acceptance rules: minimum length and the ignore set.

use std::collections::HashSet;

use super::tokenize::split_words;
use crate::config::WindowConfig;

/// Decides which words are counted.
///
/// Length is measured in characters, not bytes. Ignore-set entries are
/// expected lowercased; membership is tested on the lowercased token, so a
/// caller that skips case folding gets the same answer as `tokens`.
#[derive(Debug, Clone, Default)]
pub struct TokenFilter {
    min_length: usize,
    ignore: HashSet<String>,
}

impl TokenFilter {
    pub fn new(min_length: usize, ignore: HashSet<String>) -> Self {
        Self { min_length, ignore }
    }

    pub fn from_config(config: &WindowConfig) -> Self {
        Self::new(config.min_length, config.ignore.clone())
    }

    /// Whether a token passes the length and ignore rules.
    pub fn accepts(&self, token: &str) -> bool {
        !token.is_empty() && token.chars().count() >= self.min_length && !self.is_ignored(token)
    }

    fn is_ignored(&self, token: &str) -> bool {
        if token.chars().any(char::is_uppercase) {
            self.ignore.contains(&token.to_lowercase())
        } else {
            self.ignore.contains(token)
        }
    }

    /// Accepted, lowercased tokens of a line.
    pub fn tokens<'a>(&'a self, line: &'a str) -> impl Iterator<Item = String> + 'a {
        split_words(line).filter(move |w| self.accepts(w))
    }
}
