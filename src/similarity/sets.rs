// Set-overlap similarity: Jaccard index, exhaustive match index, and the
// whole-token Jaccard metric over whitespace-split strings.
//
// Token-set comparison treats word order as irrelevant — "main st 12" and
// "12 main st" score 1.0. That is the right trade for names and addresses,
// where field formatting varies but vocabulary doesn't.

use std::collections::HashSet;
use std::hash::Hash;

use tracing::warn;

/// Jaccard index of two sets: |A ∩ B| / |A ∪ B|.
///
/// Returns 0.0 when either set is empty — no evidence, not an error.
pub fn jaccard_index<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / (a.len() + b.len() - intersection) as f64
}

/// Ratio of the smaller set's size to the union size: min(|A|, |B|) / |A ∪ B|.
///
/// Equals the Jaccard index exactly when the smaller set is contained in the
/// larger one, which is what the address comparator uses it to detect.
/// Returns 0.0 when either set is empty.
pub fn exhaustive_match_index<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let union = a.union(b).count();
    a.len().min(b.len()) as f64 / union as f64
}

/// Split a string on whitespace into its set of unique tokens.
pub fn token_set(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

/// Jaccard index over the unique whitespace tokens of two strings.
///
/// Returns `None` when either input is empty or a single space character —
/// a no-result, logged and surfaced to the caller instead of a score.
/// Whitespace-only inputs longer than one character pass the check, tokenize
/// to the empty set, and score 0.0 through the Jaccard empty-set rule.
pub fn token_set_similarity(a: &str, b: &str) -> Option<f64> {
    if a.is_empty() || b.is_empty() || a == " " || b == " " {
        warn!(
            len_a = a.len(),
            len_b = b.len(),
            "token_set_similarity called with an empty or blank string"
        );
        return None;
    }
    Some(jaccard_index(&token_set(a), &token_set(b)))
}
