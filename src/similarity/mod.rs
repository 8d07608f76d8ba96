// Similarity metrics over pairs of short strings (names, addresses).
//
// Five independent metrics plus a categorical address-number comparator.
// They share only the low-level set helpers; there is no coupling between
// the metrics themselves, so a scoring pipeline can call any subset.

pub mod address;
pub mod cosine;
pub mod levenshtein;
pub mod sets;
pub mod trigram;

pub use address::{address_number_similarity, AddressNumberMatch};
pub use cosine::cosine_similarity;
pub use levenshtein::levenshtein_distance;
pub use sets::{exhaustive_match_index, jaccard_index, token_set_similarity};
pub use trigram::trigram_name_similarity;
