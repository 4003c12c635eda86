//! Fuzzy matching utilities for job titles
//!
//! Word-level Levenshtein scoring: titles are split into tokens and every
//! token pair is compared with an edit distance normalized by the longer
//! token's length. Lower scores are better, `0.0` is an exact token match.

use lazy_static::lazy_static;
use regex::Regex;
use strsim::levenshtein;

lazy_static! {
    // Whitespace runs collapse into one split point, each '-' and '.' is its own.
    static ref TOKEN_SEPARATOR: Regex =
        Regex::new(r"[ \t\n\x0B\x0C\r]+|-|\.").expect("token separator pattern is valid");
}

/// Worst possible score between two tokens
pub const WORST_SCORE: f64 = 1.0;

/// Split a title into tokens on whitespace, hyphens and periods.
///
/// Leading and doubled separators leave empty tokens in place. Trailing empty
/// tokens are dropped, and text without any separator comes back as a single
/// token (so `""` yields `[""]`).
pub fn tokenize(text: &str) -> Vec<&str> {
    if !TOKEN_SEPARATOR.is_match(text) {
        return vec![text];
    }

    let mut tokens: Vec<&str> = TOKEN_SEPARATOR.split(text).collect();
    while tokens.last().is_some_and(|t| t.is_empty()) {
        tokens.pop();
    }
    tokens
}

/// Normalized edit distance between two tokens, in `[0, 1]`.
///
/// Two empty tokens score [`WORST_SCORE`]: there is nothing to compare.
pub fn token_score(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return WORST_SCORE;
    }
    levenshtein(a, b) as f64 / max_len as f64
}

/// Best (lowest) token score across the cross product of both titles' tokens.
///
/// Both inputs are expected to be lowercased already.
pub fn best_score(title: &str, label: &str) -> f64 {
    let title_tokens = tokenize(title);
    let label_tokens = tokenize(label);

    let mut best = WORST_SCORE;
    for title_token in &title_tokens {
        for label_token in &label_tokens {
            best = best.min(token_score(title_token, label_token));
        }
    }
    best
}
