// Text handling: splitting lines into words and deciding which words count.
//
// Case folding happens here and nowhere else, so the window tracker never
// needs to know anything about text.

pub mod filter;
pub mod tokenize;

pub use filter::TokenFilter;
pub use tokenize::split_words;

/// English stop words from the `stop-words` crate, lowercased.
pub fn english_stop_words() -> Vec<String> {
    stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect()
}
