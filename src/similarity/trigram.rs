// Trigram similarity: Jaccard over 3-character windows within each token.
//
// Windows never cross token boundaries, so "main st" contributes {mai, ain}
// and nothing bridging the space. Complements whole-token Jaccard: a
// one-letter typo still shares most of its trigrams, where the token-level
// metric would score the pair 0.

use std::collections::HashSet;

use super::sets::jaccard_index;

/// All 3-character windows of every whitespace token, as a set of strings.
///
/// Windows slide over `char`s, so multi-byte input is safe. Tokens shorter
/// than three characters contribute no trigrams.
pub fn trigram_set(text: &str) -> HashSet<String> {
    let mut trigrams = HashSet::new();
    for token in text.split_whitespace() {
        let chars: Vec<char> = token.chars().collect();
        for window in chars.windows(3) {
            trigrams.insert(window.iter().collect());
        }
    }
    trigrams
}

/// Jaccard index of the trigram sets of two strings, in [0, 1].
pub fn trigram_name_similarity(a: &str, b: &str) -> f64 {
    jaccard_index(&trigram_set(a), &trigram_set(b))
}
