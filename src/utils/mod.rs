//! Utility modules

pub mod fuzzy;

pub use fuzzy::{best_score, token_score, tokenize, WORST_SCORE};
