//! Health score: inverse of the selected condition's probability, on 0-100.

use serde::{Deserialize, Serialize};

/// `round((1 - probability) * 100)`, clamped to [0, 100]
pub fn health_score(probability: f64) -> u8 {
    ((1.0 - probability) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Display band for a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    Good,
    Fair,
    Poor,
}

impl HealthBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 80 => HealthBand::Good,
            s if s >= 60 => HealthBand::Fair,
            _ => HealthBand::Poor,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Good => "Good",
            HealthBand::Fair => "Fair",
            HealthBand::Poor => "Poor",
        }
    }
}
