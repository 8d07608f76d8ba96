// Cosine similarity over term-frequency vectors.
//
// Each string becomes a sparse vector of whitespace-token counts. The
// "magnitude" helper returns the SUM of squared counts, not its square root;
// the final division by sqrt(mag_a * mag_b) is algebraically the same as
// dividing by the product of the two Euclidean norms, so the result is
// ordinary cosine similarity. Keep the convention as-is: downstream scores
// are bit-compared across implementations.

use std::collections::HashMap;

/// Count whitespace-token occurrences in a string.
pub fn term_frequency(text: &str) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Dot product of two sparse count vectors.
///
/// Only terms present in both maps contribute; a term missing from one side
/// has implicit frequency 0, so restricting to the key intersection is the
/// full dot product.
pub fn dot_product(a: &HashMap<&str, u32>, b: &HashMap<&str, u32>) -> f64 {
    a.iter()
        .filter_map(|(term, &count_a)| b.get(term).map(|&count_b| count_a as f64 * count_b as f64))
        .sum()
}

/// Sum of squared term counts (squared Euclidean norm).
pub fn vector_magnitude(vector: &HashMap<&str, u32>) -> f64 {
    vector.values().map(|&count| (count as f64).powi(2)).sum()
}

/// Cosine similarity of the term-frequency vectors of two strings, in [0, 1].
///
/// When either input tokenizes to nothing the vector has zero magnitude and
/// the result is defined as 0.0 — no NaN, no division-by-zero panic.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    let tf_a = term_frequency(a);
    let tf_b = term_frequency(b);
    let magnitude_a = vector_magnitude(&tf_a);
    let magnitude_b = vector_magnitude(&tf_b);
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }
    dot_product(&tf_a, &tf_b) / (magnitude_a * magnitude_b).sqrt()
}
