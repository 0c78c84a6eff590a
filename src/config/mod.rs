use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::tuning::constants::{fifth_deviation, is_diatonic_fifth, DEFAULT_FIFTH};
use crate::types::letter::NoteLetter;

/// Tuning configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuningConfig {
    /// Note that keeps its 12EDO pitch
    #[serde(default)]
    pub reference: NoteLetter,

    /// Size of the tempered fifth in cents
    #[serde(default = "default_fifth")]
    pub fifth: f64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            reference: NoteLetter::default(),
            fifth: default_fifth(),
        }
    }
}

impl TuningConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML file without validating it
    /// Callers that apply overrides validate afterwards
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: TuningConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        log::debug!("Loaded tuning config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.fifth.is_finite() {
            return Err(anyhow!("Fifth size must be a finite number of cents"));
        }
        if self.fifth <= 0.0 || self.fifth >= 1200.0 {
            return Err(anyhow!("Fifth size must be between 0 and 1200 cents"));
        }

        if !is_diatonic_fifth(self.fifth) {
            log::warn!(
                "Fifth of {:.3} cents is outside the diatonic range",
                self.fifth
            );
        }

        Ok(())
    }

    /// Deviation of the configured fifth from the 12EDO fifth
    pub fn fifth_deviation(&self) -> f64 {
        fifth_deviation(self.fifth)
    }
}

fn default_fifth() -> f64 {
    DEFAULT_FIFTH
}
