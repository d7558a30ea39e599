//! Text analysis.
//!
//! [`analyze`] turns raw text into an [`AnalysisReport`] of six counts. It is
//! a total, pure function: any string (including the empty string) yields a
//! report, and the same input always yields the same report.
//!
//! Whether blank input deserves a report at all is a caller decision;
//! [`has_content`] is the check the session, CLI, and MCP server share.

pub mod repeated;
pub mod reports;

pub use reports::{AnalysisReport, RepeatBuckets};

use crate::text;

/// Analyze a block of text.
///
/// # Example
///
/// ```
/// use textlens_core::analysis::analyze;
///
/// let report = analyze("cat dog cat dog cat");
/// assert_eq!(report.word_count, 5);
/// assert_eq!(report.single_repeat_count, 1); // "dog"
/// assert_eq!(report.double_repeat_count, 1); // "cat"
/// ```
#[tracing::instrument(skip(input), fields(text_len = input.len()))]
pub fn analyze(input: &str) -> AnalysisReport {
    let words = text::split_words(input);
    let sentences = text::split_sentences(input);
    let repeats = repeated::count_repeats(&words);

    let report = AnalysisReport {
        character_count: input.chars().count(),
        word_count: words.len(),
        sentence_count: sentences.len(),
        single_repeat_count: repeats.twice,
        double_repeat_count: repeats.three_times,
        triple_repeat_count: repeats.four_times,
    };

    tracing::debug!(
        characters = report.character_count,
        words = report.word_count,
        sentences = report.sentence_count,
        "analysis complete"
    );
    report
}

/// Returns `true` when `input` has anything besides whitespace.
///
/// Callers skip analysis for blank submissions.
pub fn has_content(input: &str) -> bool {
    !text::trim(input).is_empty()
}
