//! "Did you mean" suggestions for rejected option values.
//!
//! Scores are the better of Jaro-Winkler and normalized Levenshtein similarity
//! on lowercased labels.

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::projector::LocalizedCategory;

/// Minimum similarity for a label to be suggested.
const MIN_SUGGESTION_SCORE: f64 = 0.75;

/// Closest label in `category` to `value`, if any is close enough.
pub fn suggest_option(category: &LocalizedCategory, value: &str) -> Option<String> {
    let query = value.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    category
        .options()
        .iter()
        .map(|option| {
            let label = option.label.to_lowercase();
            let score = jaro_winkler(&query, &label).max(normalized_levenshtein(&query, &label));
            (score, &option.label)
        })
        .filter(|(score, _)| *score >= MIN_SUGGESTION_SCORE)
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, label)| label.clone())
}
