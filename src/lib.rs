// Flint: string-pair similarity features for record matching.
//
// This is the library root. Every exported function is pure and stateless —
// callers hand in two strings (or two sets) and get back a score. Pairing
// candidates, bulk scoring, and persisting results all belong to the
// downstream matching pipeline, not here.

pub mod similarity;

pub use similarity::{
    address_number_similarity, cosine_similarity, exhaustive_match_index, jaccard_index,
    levenshtein_distance, token_set_similarity, trigram_name_similarity, AddressNumberMatch,
};
