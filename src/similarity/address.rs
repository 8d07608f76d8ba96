// Address-number comparison: a categorical verdict on the numeric tokens of
// two address strings.
//
// Digit runs are extracted context-free — "12B" and "12" both yield "12",
// so unit letters adjacent to digits are not distinguished. Known
// limitation, kept for score parity with existing pipelines.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::sets::{exhaustive_match_index, jaccard_index};

/// Outcome of comparing the numeric tokens of two address strings.
///
/// The snake_case serde labels are a wire contract; downstream pipelines
/// persist them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressNumberMatch {
    /// Both sides carry the same set of numbers.
    ExactMatch,
    /// One side's numbers are a strict subset of the other's.
    PartialMatch,
    /// The numbers contradict each other.
    Mismatch,
    /// One or both sides contain no digits at all.
    NoNumbersFound,
}

impl AddressNumberMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressNumberMatch::ExactMatch => "exact_match",
            AddressNumberMatch::PartialMatch => "partial_match",
            AddressNumberMatch::Mismatch => "mismatch",
            AddressNumberMatch::NoNumbersFound => "no_numbers_found",
        }
    }
}

impl std::fmt::Display for AddressNumberMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn digit_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[0-9]+").expect("digit-run pattern is valid"))
}

/// Maximal digit runs of a string, in extraction order.
pub fn numeric_tokens(text: &str) -> Vec<&str> {
    digit_run_pattern()
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Compare the numeric tokens of two address strings.
///
/// Extraction order is irrelevant: the digit runs are compared as sets.
/// Partial overlap only counts as a `PartialMatch` when one side's set is a
/// strict subset of the other's; equal-size sets that differ anywhere are
/// contradictory numbers, not a subset relation, and score `Mismatch`.
pub fn address_number_similarity(a: &str, b: &str) -> AddressNumberMatch {
    let numbers_a: HashSet<&str> = numeric_tokens(a).into_iter().collect();
    let numbers_b: HashSet<&str> = numeric_tokens(b).into_iter().collect();

    if numbers_a.is_empty() || numbers_b.is_empty() {
        return AddressNumberMatch::NoNumbersFound;
    }

    let score = jaccard_index(&numbers_a, &numbers_b);
    if score == 1.0 {
        return AddressNumberMatch::ExactMatch;
    }
    if score == 0.0 {
        return AddressNumberMatch::Mismatch;
    }

    // Partial overlap. Equal-cardinality sets can't be in a subset relation,
    // and the exhaustive match index equals the Jaccard index exactly when
    // the smaller set is contained in the larger.
    if numbers_a.len() == numbers_b.len() {
        AddressNumberMatch::Mismatch
    } else if exhaustive_match_index(&numbers_a, &numbers_b) == score {
        AddressNumberMatch::PartialMatch
    } else {
        AddressNumberMatch::Mismatch
    }
}
