use chrono::{DateTime, SecondsFormat, Utc};

use crate::types::{AnalysisInput, AnalysisResult, ConditionRecord, ImageAnalysisNote};

/// Number of catalog entries shown as detected conditions
pub const MAX_DETECTED_CONDITIONS: usize = 3;

pub const ACCURACY_NOTE_WITH_IMAGE: &str =
    "Analysis combines crop, location and field image data for enhanced detection accuracy";
pub const ACCURACY_NOTE_WITHOUT_IMAGE: &str =
    "Analysis based on crop type and location only - upload a field image for higher accuracy";

static IMAGE_OBSERVATIONS: &[&str] = &[
    "Leaf surface texture analyzed",
    "Color distribution mapped across visible foliage",
    "Lesion and spot patterns compared with reference markers",
];
const IMAGE_ACCURACY_BOOST: &str = "Field image improved detection confidence by approximately 15%";

/// Fixed illustrative note attached to image-backed analyses
pub fn image_analysis_note() -> ImageAnalysisNote {
    ImageAnalysisNote {
        observations: IMAGE_OBSERVATIONS.iter().map(|s| s.to_string()).collect(),
        accuracy_boost: IMAGE_ACCURACY_BOOST.to_string(),
    }
}

/// Compose the final analysis record.
///
/// `all_candidates` is the crop's unadjusted catalog list; the first three are
/// reported as detected conditions regardless of which one was selected.
pub fn assemble(
    input: &AnalysisInput,
    condition: &ConditionRecord,
    health_score: u8,
    symptoms: Vec<String>,
    recommendations: Vec<String>,
    all_candidates: &[ConditionRecord],
    timestamp: DateTime<Utc>,
) -> AnalysisResult {
    let has_image = input.image_signal;
    let accuracy_note = if has_image {
        ACCURACY_NOTE_WITH_IMAGE
    } else {
        ACCURACY_NOTE_WITHOUT_IMAGE
    };

    AnalysisResult {
        crop_type: input.crop_type.clone(),
        location: input.location.clone(),
        disease: condition.name.to_string(),
        health_score,
        severity: condition.severity,
        probability: condition.probability,
        symptoms,
        recommendations,
        detected_conditions: all_candidates
            .iter()
            .take(MAX_DETECTED_CONDITIONS)
            .copied()
            .collect(),
        has_image,
        image_analysis: has_image.then(image_analysis_note),
        accuracy_note: accuracy_note.to_string(),
        timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::catalog::DiseaseCatalog;
    use crate::types::HEALTHY_SENTINEL;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_detected_conditions_are_unadjusted_catalog_prefix() {
        let candidates = DiseaseCatalog::global().lookup("Rice");
        let selected = candidates[2].with_probability(0.45);
        let input = AnalysisInput::new("Rice", "Karnataka, India", true);

        let result = assemble(&input, &selected, 55, vec![], vec![], candidates, fixed_time());

        assert_eq!(result.disease, "Brown Spot");
        assert_eq!(result.detected_conditions, candidates.to_vec());
        assert_eq!(result.detected_conditions[2].probability, 0.30);
    }

    #[test]
    fn test_image_note_only_with_image() {
        let input = AnalysisInput::new("Mango", "Goa", false);
        let result = assemble(&input, &HEALTHY_SENTINEL, 95, vec![], vec![], &[], fixed_time());
        assert!(result.image_analysis.is_none());
        assert_eq!(result.accuracy_note, ACCURACY_NOTE_WITHOUT_IMAGE);
        assert!(result.detected_conditions.is_empty());

        let input = AnalysisInput::new("Mango", "Goa", true);
        let result = assemble(&input, &HEALTHY_SENTINEL, 95, vec![], vec![], &[], fixed_time());
        let note = result.image_analysis.expect("image note present");
        assert_eq!(note.observations.len(), 3);
        assert_eq!(result.accuracy_note, ACCURACY_NOTE_WITH_IMAGE);
    }

    #[test]
    fn test_timestamp_format() {
        let input = AnalysisInput::new("Wheat", "Punjab, India", false);
        let result = assemble(&input, &HEALTHY_SENTINEL, 95, vec![], vec![], &[], fixed_time());
        assert_eq!(result.timestamp, "2025-03-14T09:30:00.000Z");
    }

    #[test]
    fn test_absent_image_note_is_not_serialized() {
        let input = AnalysisInput::new("Wheat", "Punjab, India", false);
        let result = assemble(&input, &HEALTHY_SENTINEL, 95, vec![], vec![], &[], fixed_time());
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("imageAnalysis").is_none());
        assert_eq!(json["hasImage"], false);
        assert_eq!(json["healthScore"], 95);
        assert_eq!(json["severity"], "None");
    }
}
