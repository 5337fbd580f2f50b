//! Configuration for the answer pipeline

use crate::error::QaError;
use girasol_index::Locale;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Beyond this `f64` carries no further decimal digits
pub const MAX_DISPLAY_PRECISION: usize = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scores at or below this are reported as low confidence
    pub low_confidence_threshold: f64,

    /// Decimals shown when printing weights and scores
    pub display_precision: usize,

    /// Tokens shorter than this (in characters) are discarded
    pub min_token_len: usize,

    /// Alphabet and stemming language
    pub locale: Locale,
}

impl Config {
    pub fn new() -> Self {
        Self {
            low_confidence_threshold: 0.01,
            display_precision: 3,
            min_token_len: 2,
            locale: Locale::Spanish,
        }
    }

    /// Read a JSON config file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QaError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QaError> {
        if !(0.0..=1.0).contains(&self.low_confidence_threshold) {
            return Err(QaError::Config(format!(
                "low_confidence_threshold must be within [0, 1], got {}",
                self.low_confidence_threshold
            )));
        }
        if self.display_precision > MAX_DISPLAY_PRECISION {
            return Err(QaError::Config(format!(
                "display_precision must be at most {}, got {}",
                MAX_DISPLAY_PRECISION, self.display_precision
            )));
        }
        if self.min_token_len == 0 {
            return Err(QaError::Config(
                "min_token_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
