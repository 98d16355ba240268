// Word splitting.
//
// A word is a maximal run of Unicode letters, digits and apostrophes.
// Everything else is a separator. Words come out lowercased.

/// True for characters that can appear inside a word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

/// Split a line into lowercased words, lazily.
///
/// Runs of separators never produce empty words.
pub fn split_words(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}
