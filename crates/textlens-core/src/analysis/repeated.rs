//! Repeated word detection.

use std::collections::HashMap;

use super::reports::RepeatBuckets;

/// Count how often each word occurs.
///
/// Words are expected to be case-folded already (see
/// [`text::split_words`](crate::text::split_words)).
pub fn word_frequencies(words: &[String]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(words.len());
    for word in words {
        *counts.entry(word.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Bucket distinct words by exact frequency.
///
/// Only frequencies 2, 3 and 4 are tracked. A word seen once, or five or
/// more times, lands in no bucket.
#[tracing::instrument(level = "trace", skip_all, fields(words = words.len()))]
pub fn count_repeats(words: &[String]) -> RepeatBuckets {
    let mut buckets = RepeatBuckets::default();

    for count in word_frequencies(words).into_values() {
        match count {
            2 => buckets.twice += 1,
            3 => buckets.three_times += 1,
            4 => buckets.four_times += 1,
            _ => {}
        }
    }

    buckets
}
