//! Text processing utilities.
//!
//! Provides the word and sentence splitting used by [`crate::analysis`].
//! Both splitters work on the raw input: nothing is normalized before
//! splitting, so counts reflect the text exactly as it was supplied.

use regex::Regex;
use std::sync::LazyLock;

/// Every `.`, `!` and `?` ends a sentence candidate on its own.
static SENTENCE_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]").expect("valid regex"));

/// Whitespace for word splitting and blank checks.
///
/// Unicode `White_Space` plus the ASCII information separators
/// U+001C..=U+001F, which also delimit fields in plain-text exports.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trim [`is_separator`] characters from both ends.
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_separator)
}

/// Split text into lower-cased words.
///
/// Words are maximal runs of non-separator characters (see
/// [`is_separator`]). Punctuation stays attached, so `"end."` and `"end"`
/// are different words.
pub fn split_words(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Split text into sentences.
///
/// Each `.`, `!` or `?` is a standalone delimiter. Candidates are trimmed
/// and empty ones dropped, so runs like `"..."` or `"?!"` never yield
/// phantom sentences.
#[tracing::instrument(level = "trace", skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_TERMINATOR
        .split(text)
        .map(trim)
        .filter(|s| !s.is_empty())
        .collect()
}
