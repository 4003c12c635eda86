//! Core processing modules
//!
//! Contains the job title normaliser.

pub mod title_normaliser;

pub use title_normaliser::{TitleMatch, TitleNormaliser, UNKNOWN_TITLE};
