//! Engine Tuning Configuration
//!
//! Probability adjustments applied when a field image is supplied. The values
//! are tuning constants with no deeper model behind them; they are kept here
//! so they can be overridden from a JSON file instead of being hard-coded in
//! the selector.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RESELECT_CHANCE: f64 = 0.30;
pub const DEFAULT_IMAGE_BOOST: f64 = 0.10;
pub const DEFAULT_RESELECT_BOOST: f64 = 0.15;
pub const DEFAULT_PROBABILITY_CAP: f64 = 0.95;

/// Tuning parameters for image-aware condition selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chance that an image re-selects a non-primary catalog condition
    pub reselect_chance: f64,
    /// Probability added to the primary condition when an image is present
    pub image_boost: f64,
    /// Probability added to a re-selected condition
    pub reselect_boost: f64,
    /// Upper bound for any image-adjusted probability
    pub probability_cap: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reselect_chance: DEFAULT_RESELECT_CHANCE,
            image_boost: DEFAULT_IMAGE_BOOST,
            reselect_boost: DEFAULT_RESELECT_BOOST,
            probability_cap: DEFAULT_PROBABILITY_CAP,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config file: {:?}", path))?;

        let config: EngineConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse engine config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// Every parameter is a probability or a probability delta
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("reselect_chance", self.reselect_chance),
            ("image_boost", self.image_boost),
            ("reselect_boost", self.reselect_boost),
            ("probability_cap", self.probability_cap),
        ];

        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                anyhow::bail!("Engine config '{}' must be within [0, 1], got {}", name, value);
            }
        }

        Ok(())
    }
}
