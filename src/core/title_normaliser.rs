//! Job Title Normalization
//!
//! Maps free-text job titles onto a fixed canonical vocabulary, falling back
//! to [`UNKNOWN_TITLE`] when nothing is close enough.

use crate::config::NormaliserConfig;
use crate::error::{NormError, NormResult};
use crate::utils::fuzzy::{best_score, WORST_SCORE};
use serde::Serialize;
use tracing::debug;

/// Result returned when no canonical label matches
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Best candidate label for a title, before the threshold is applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleMatch<'a> {
    pub label: &'a str,
    pub score: f64,
}

/// A canonical label with its lowercased form cached for scoring
#[derive(Debug, Clone)]
struct CanonicalLabel {
    label: String,
    lower: String,
}

/// Normalizes job titles against an immutable vocabulary.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct TitleNormaliser {
    labels: Vec<CanonicalLabel>,
    threshold: f64,
}

impl Default for TitleNormaliser {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleNormaliser {
    /// Create a normaliser with the default vocabulary and threshold
    pub fn new() -> Self {
        Self::from_valid_config(NormaliserConfig::default())
    }

    /// Create a normaliser from a config, rejecting invalid thresholds
    pub fn with_config(config: NormaliserConfig) -> NormResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: NormaliserConfig) -> Self {
        let labels = config
            .vocabulary
            .into_iter()
            .map(|label| CanonicalLabel {
                lower: label.to_lowercase(),
                label,
            })
            .collect();

        Self {
            labels,
            threshold: config.threshold,
        }
    }

    /// Canonical labels in priority order
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.label.as_str())
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Normalize a job title that may be absent.
    ///
    /// `None` is a caller error and yields [`NormError::InvalidArgument`].
    /// Every present string resolves to a canonical label or [`UNKNOWN_TITLE`].
    pub fn normalize(&self, title: Option<&str>) -> NormResult<&str> {
        let title = title.ok_or_else(NormError::null_title)?;
        Ok(self.normalize_str(title))
    }

    /// Normalize a job title
    pub fn normalize_str(&self, title: &str) -> &str {
        if title.is_empty() {
            return UNKNOWN_TITLE;
        }

        match self.best_match(title) {
            Some(m) if m.score < self.threshold => {
                debug!("'{}' -> '{}' (score {:.3})", title, m.label, m.score);
                m.label
            }
            Some(m) => {
                debug!(
                    "'{}' closest to '{}' (score {:.3}) but not below {}",
                    title, m.label, m.score, self.threshold
                );
                UNKNOWN_TITLE
            }
            None => {
                debug!("'{}' has no candidate label", title);
                UNKNOWN_TITLE
            }
        }
    }

    /// Normalize each title, preserving order
    pub fn normalize_all<'t, I>(&self, titles: I) -> Vec<&str>
    where
        I: IntoIterator<Item = &'t str>,
    {
        titles.into_iter().map(|t| self.normalize_str(t)).collect()
    }

    /// Closest label and its score, ignoring the threshold.
    ///
    /// Labels are scanned in vocabulary order and only a strictly lower score
    /// replaces the current candidate, so earlier labels win ties. A label
    /// scoring [`WORST_SCORE`] is never a candidate.
    pub fn best_match(&self, title: &str) -> Option<TitleMatch<'_>> {
        let title_lower = title.to_lowercase();

        let mut best: Option<TitleMatch<'_>> = None;
        let mut min_score = WORST_SCORE;
        for label in &self.labels {
            let score = best_score(&title_lower, &label.lower);
            if score < min_score {
                min_score = score;
                best = Some(TitleMatch {
                    label: &label.label,
                    score,
                });
            }
        }
        best
    }
}
