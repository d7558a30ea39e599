//! Report structs for text analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Counts produced by [`analyze`](super::analyze).
///
/// A report is a plain value: it is built once per analysis request and
/// never updated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Characters in the input exactly as given, whitespace included.
    pub character_count: usize,
    /// Whitespace-delimited tokens.
    pub word_count: usize,
    /// Non-empty segments between `.`, `!` and `?`.
    pub sentence_count: usize,
    /// Distinct words (case-insensitive) that occur exactly twice.
    pub single_repeat_count: usize,
    /// Distinct words that occur exactly three times.
    pub double_repeat_count: usize,
    /// Distinct words that occur exactly four times.
    pub triple_repeat_count: usize,
}

/// Repeat buckets computed by [`repeated::count_repeats`](super::repeated::count_repeats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepeatBuckets {
    /// Words with frequency 2.
    pub twice: usize,
    /// Words with frequency 3.
    pub three_times: usize,
    /// Words with frequency 4.
    pub four_times: usize,
}
