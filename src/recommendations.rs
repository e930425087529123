//! Recommendation Synthesis
//!
//! Output is fully determined by (healthy?, severity, image signal):
//! - healthy crop: maintenance block, nothing else
//! - otherwise: severity block (+1 image line), two universal lines, and a
//!   closing re-upload line when an image was supplied

use crate::error::AnalysisError;
use crate::types::{SeverityTier, HEALTHY_CROP};

static HEALTHY_BLOCK: &[&str] = &[
    "Continue current farming practices",
    "Monitor crop regularly for early signs",
    "Maintain optimal irrigation and nutrition",
    "Follow preventive measures",
];
const HEALTHY_IMAGE_LINE: &str = "Image analysis shows no visible disease markers - keep uploading periodic field images";

static HIGH_BLOCK: &[&str] = &[
    "Immediate treatment required",
    "Apply recommended fungicide/pesticide within 24-48 hours",
    "Isolate affected areas if possible",
    "Consult agricultural extension officer",
];
const HIGH_IMAGE_LINE: &str = "Image analysis confirms high severity - urgent action needed";

static MEDIUM_BLOCK: &[&str] = &[
    "Treatment recommended within 3-5 days",
    "Apply preventive fungicide",
    "Monitor crop closely for spread",
    "Adjust irrigation to avoid excess moisture",
];
const MEDIUM_IMAGE_LINE: &str = "Early detection from image allows for timely intervention";

static LOW_BLOCK: &[&str] = &[
    "Preventive measures recommended",
    "Monitor for disease progression",
    "Maintain good field hygiene",
    "Consider organic treatment options",
];
const LOW_IMAGE_LINE: &str = "Image shows early stage - easier to manage";

static UNIVERSAL_LINES: &[&str] = &[
    "Follow integrated pest management practices",
    "Maintain proper crop spacing and ventilation",
];
const REUPLOAD_LINE: &str = "Re-upload image after treatment to monitor progress";

/// Ordered action list for a condition.
///
/// Returns `InvalidSeverity` for a diseased condition with severity `None`:
/// only the healthy sentinel carries that tier, so seeing it here means the
/// selection step produced an out-of-domain record.
pub fn generate_recommendations(
    condition: &str,
    severity: SeverityTier,
    image_signal: bool,
) -> Result<Vec<String>, AnalysisError> {
    if condition == HEALTHY_CROP {
        let mut recs = owned_lines(HEALTHY_BLOCK);
        if image_signal {
            recs.push(HEALTHY_IMAGE_LINE.to_string());
        }
        return Ok(recs);
    }

    let (block, image_line) = match severity {
        SeverityTier::High => (HIGH_BLOCK, HIGH_IMAGE_LINE),
        SeverityTier::Medium => (MEDIUM_BLOCK, MEDIUM_IMAGE_LINE),
        SeverityTier::Low => (LOW_BLOCK, LOW_IMAGE_LINE),
        SeverityTier::None => {
            return Err(AnalysisError::InvalidSeverity(format!(
                "severity None for condition '{}'",
                condition
            )))
        }
    };

    let mut recs = owned_lines(block);
    if image_signal {
        recs.push(image_line.to_string());
    }

    recs.extend(UNIVERSAL_LINES.iter().map(|s| s.to_string()));

    if image_signal {
        recs.push(REUPLOAD_LINE.to_string());
    }

    Ok(recs)
}

fn owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_without_image() {
        let recs = generate_recommendations("Leaf Blight", SeverityTier::High, false).unwrap();
        assert_eq!(recs.len(), 6);
        assert_eq!(recs[0], "Immediate treatment required");
        assert_eq!(recs[3], "Consult agricultural extension officer");
        assert_eq!(recs[4], "Follow integrated pest management practices");
        assert_eq!(recs[5], "Maintain proper crop spacing and ventilation");
    }

    #[test]
    fn test_high_with_image() {
        let recs = generate_recommendations("Leaf Blight", SeverityTier::High, true).unwrap();
        assert_eq!(recs.len(), 8);
        assert_eq!(recs[4], HIGH_IMAGE_LINE);
        assert_eq!(recs[5], "Follow integrated pest management practices");
        assert_eq!(recs[7], REUPLOAD_LINE);
    }

    #[test]
    fn test_medium_and_low_blocks() {
        let medium = generate_recommendations("Rust", SeverityTier::Medium, false).unwrap();
        assert_eq!(medium[0], "Treatment recommended within 3-5 days");
        assert_eq!(medium.len(), 6);

        let low = generate_recommendations("Smut", SeverityTier::Low, true).unwrap();
        assert_eq!(low[0], "Preventive measures recommended");
        assert_eq!(low[4], LOW_IMAGE_LINE);
        assert_eq!(low.len(), 8);
    }

    #[test]
    fn test_healthy_short_circuits() {
        // Severity is ignored for the healthy sentinel
        let recs = generate_recommendations(HEALTHY_CROP, SeverityTier::None, false).unwrap();
        assert_eq!(recs, HEALTHY_BLOCK);

        let recs = generate_recommendations(HEALTHY_CROP, SeverityTier::None, true).unwrap();
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[4], HEALTHY_IMAGE_LINE);
        assert!(!recs.iter().any(|r| r == REUPLOAD_LINE));
    }

    #[test]
    fn test_none_severity_for_disease_fails() {
        let err = generate_recommendations("Rust", SeverityTier::None, false).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidSeverity(_)));
    }

    #[test]
    fn test_deterministic() {
        let a = generate_recommendations("Blast", SeverityTier::High, true).unwrap();
        let b = generate_recommendations("Blast", SeverityTier::High, true).unwrap();
        assert_eq!(a, b);
    }
}
