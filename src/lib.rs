//! TitleNorm Library
//!
//! Fuzzy normalization of free-text job titles onto a canonical vocabulary.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::NormaliserConfig;
pub use crate::core::{TitleMatch, TitleNormaliser, UNKNOWN_TITLE};
pub use crate::error::{NormError, NormResult};
