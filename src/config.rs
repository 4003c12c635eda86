use crate::error::{NormError, NormResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Labels a title is normalized towards when no config overrides them
pub const DEFAULT_VOCABULARY: [&str; 4] = [
    "Architect",
    "Software engineer",
    "Quantity surveyor",
    "Accountant",
];

/// Highest normalized edit distance that still counts as a match (exclusive)
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Normaliser configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormaliserConfig {
    /// Canonical labels, in tie-break priority order
    pub vocabulary: Vec<String>,
    /// Matches must score strictly below this
    pub threshold: f64,
}

impl Default for NormaliserConfig {
    fn default() -> Self {
        Self {
            vocabulary: DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl NormaliserConfig {
    /// Check the threshold is a usable score bound
    pub fn validate(&self) -> NormResult<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(NormError::Config(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Load and validate config from an explicit path
    pub fn load_from(path: &Path) -> NormResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from the default path, or fall back to defaults
    pub fn load() -> Self {
        let path = config_path();

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!(
                    "Config file {} is invalid, using defaults: {}",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> NormResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("titlenorm")
        .join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NormaliserConfig::default();
        assert_eq!(config.vocabulary.len(), 4);
        assert_eq!(config.vocabulary[0], "Architect");
        assert_eq!(config.threshold, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = NormaliserConfig {
            vocabulary: vec!["Pilot".to_string()],
            threshold: 0.35,
        };
        let json = serde_json::to_string(&config).expect("Failed to serialize");
        let restored: NormaliserConfig = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(config, restored);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: NormaliserConfig =
            serde_json::from_str(r#"{"threshold": 0.3}"#).expect("Failed to deserialize");
        assert_eq!(config.vocabulary, NormaliserConfig::default().vocabulary);
        assert_eq!(config.threshold, 0.3);
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        for threshold in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let config = NormaliserConfig {
                threshold,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(NormError::Config(_))));
        }
    }

    #[test]
    fn test_validate_accepts_bounds() {
        for threshold in [0.0, 1.0] {
            let config = NormaliserConfig {
                threshold,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested/config.json");
        let config = NormaliserConfig {
            vocabulary: vec!["Nurse".to_string(), "Doctor".to_string()],
            threshold: 0.25,
        };

        config.save_to(&path).expect("Failed to save");
        let loaded = NormaliserConfig::load_from(&path).expect("Failed to load");
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_from_rejects_invalid_threshold() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"threshold": 2.0}"#).expect("Failed to write");

        assert!(matches!(
            NormaliserConfig::load_from(&path),
            Err(NormError::Config(_))
        ));
    }

    #[test]
    fn test_config_corrupt_json_handling() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not valid json").expect("Failed to write");

        assert!(matches!(
            NormaliserConfig::load_from(&path),
            Err(NormError::Json(_))
        ));
    }
}
