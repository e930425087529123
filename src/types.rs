use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::scoring::HealthBand;

/// Severity tier of a condition; drives which recommendation block is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    None,
    Low,
    Medium,
    High,
}

impl SeverityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::None => "None",
            SeverityTier::Low => "Low",
            SeverityTier::Medium => "Medium",
            SeverityTier::High => "High",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "None" => Ok(SeverityTier::None),
            "Low" => Ok(SeverityTier::Low),
            "Medium" => Ok(SeverityTier::Medium),
            "High" => Ok(SeverityTier::High),
            other => Err(AnalysisError::InvalidSeverity(other.to_string())),
        }
    }
}

/// A named plant health finding with its severity and probability.
///
/// Records come from the static catalog, or are copies of catalog records with
/// an adjusted probability (image-based selection).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConditionRecord {
    pub name: &'static str,
    pub severity: SeverityTier,
    /// Always within [0, 1]
    pub probability: f64,
}

impl ConditionRecord {
    /// Copy of this record carrying a different probability
    pub fn with_probability(&self, probability: f64) -> Self {
        Self {
            probability,
            ..*self
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.name == HEALTHY_CROP
    }
}

/// Name of the healthy-crop sentinel condition
pub const HEALTHY_CROP: &str = "Healthy Crop";

/// Returned when a crop has no catalog entry
pub const HEALTHY_SENTINEL: ConditionRecord = ConditionRecord {
    name: HEALTHY_CROP,
    severity: SeverityTier::None,
    probability: 0.05,
};

/// Caller-supplied analysis request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub crop_type: String,
    /// Free text, not interpreted by the engine
    pub location: String,
    #[serde(default)]
    pub image_signal: bool,
}

impl AnalysisInput {
    pub fn new(crop_type: impl Into<String>, location: impl Into<String>, image_signal: bool) -> Self {
        Self {
            crop_type: crop_type.into(),
            location: location.into(),
            image_signal,
        }
    }

    /// Reject blank crop type or location before the engine runs
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.crop_type.trim().is_empty() {
            return Err(AnalysisError::MissingRequiredInput { field: "cropType" });
        }
        if self.location.trim().is_empty() {
            return Err(AnalysisError::MissingRequiredInput { field: "location" });
        }
        Ok(())
    }
}

/// Illustrative notes attached when a field image was supplied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysisNote {
    pub observations: Vec<String>,
    pub accuracy_boost: String,
}

/// Complete analysis record returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub crop_type: String,
    pub location: String,
    pub disease: String,
    pub health_score: u8,
    pub severity: SeverityTier,
    pub probability: f64,
    pub symptoms: Vec<String>,
    pub recommendations: Vec<String>,
    /// First three catalog entries for the crop, unadjusted
    pub detected_conditions: Vec<ConditionRecord>,
    pub has_image: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<ImageAnalysisNote>,
    pub accuracy_note: String,
    /// RFC 3339 UTC instant
    pub timestamp: String,
}

impl AnalysisResult {
    pub fn health_band(&self) -> HealthBand {
        HealthBand::from_score(self.health_score)
    }
}
