// Part-of-speech tagging — tokenizer and the tagger trait seam.

pub mod lexicon;
pub mod traits;

use std::sync::LazyLock;

use regex_lite::Regex;

/// Word tokens (with internal apostrophes), digit runs, and single symbols.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)*|[0-9]+|[^\sA-Za-z0-9]")
        .expect("valid token pattern")
});

/// Split text into surface tokens, preserving order.
///
/// Punctuation comes out as its own single-character token so the tagger can
/// assign it a symbol tag (which downstream processing then drops).
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
