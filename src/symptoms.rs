//! Symptom text for a condition.
//!
//! Display order is list order.

use crate::types::HEALTHY_CROP;

static GENERIC_SYMPTOMS: &[&str] = &[
    "Monitoring recommended",
    "Regular field inspection",
    "Maintain optimal conditions",
];

static IMAGE_CORROBORATION: &[&str] = &[
    "Image analysis confirmed visual disease markers",
    "Pattern recognition matched known disease characteristics",
];

/// Canonical symptom phrases for known condition names
fn base_symptoms(condition: &str) -> Option<&'static [&'static str]> {
    let symptoms: &'static [&'static str] = match condition {
        "Rust" => &["Yellow-orange pustules on leaves", "Premature leaf drop", "Reduced grain quality"],
        "Powdery Mildew" => &["White powdery spots on leaves", "Leaf curling", "Stunted growth"],
        "Leaf Blight" => &["Brown lesions on leaves", "Leaf yellowing", "Reduced photosynthesis"],
        "Blast" => &["Diamond-shaped lesions", "Node rot", "Panicle sterility"],
        "Sheath Blight" => &["Lesions on leaf sheaths", "Plant lodging", "Yield reduction"],
        "Brown Spot" => &["Brown circular spots", "Leaf necrosis", "Grain discoloration"],
        "Boll Rot" => &["Discolored bolls", "Premature opening", "Fiber quality loss"],
        "Leaf Curl Virus" => &["Leaf curling", "Stunted growth", "Reduced boll formation"],
        "Early Blight" => &["Concentric rings on leaves", "Leaf defoliation", "Fruit rot"],
        "Late Blight" => &["Water-soaked lesions", "Rapid plant death", "Complete crop loss"],
        "Bacterial Spot" => &["Small dark spots", "Leaf drop", "Fruit blemishes"],
        HEALTHY_CROP => &["No visible symptoms", "Normal growth pattern", "Optimal leaf color"],
        _ => return None,
    };
    Some(symptoms)
}

/// Symptoms for `condition`, extended with image corroboration when a field
/// image was supplied for a diseased crop.
pub fn generate_symptoms(condition: &str, image_signal: bool) -> Vec<String> {
    let base = base_symptoms(condition).unwrap_or(GENERIC_SYMPTOMS);

    let mut symptoms: Vec<String> = base.iter().map(|s| s.to_string()).collect();

    if image_signal && condition != HEALTHY_CROP {
        symptoms.extend(IMAGE_CORROBORATION.iter().map(|s| s.to_string()));
    }

    symptoms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_condition() {
        let symptoms = generate_symptoms("Rust", false);
        assert_eq!(
            symptoms,
            vec!["Yellow-orange pustules on leaves", "Premature leaf drop", "Reduced grain quality"]
        );
    }

    #[test]
    fn test_unknown_condition_falls_back() {
        // In the catalog but without a dedicated symptom entry
        let symptoms = generate_symptoms("Northern Corn Leaf Blight", false);
        assert_eq!(symptoms, GENERIC_SYMPTOMS);
    }

    #[test]
    fn test_image_appends_corroboration_in_order() {
        let symptoms = generate_symptoms("Blast", true);
        assert_eq!(symptoms.len(), 5);
        assert_eq!(symptoms[0], "Diamond-shaped lesions");
        assert_eq!(symptoms[3], "Image analysis confirmed visual disease markers");
        assert_eq!(symptoms[4], "Pattern recognition matched known disease characteristics");

        // Generic fallback also gets corroborated
        assert_eq!(generate_symptoms("Smut", true).len(), 5);
    }

    #[test]
    fn test_healthy_crop_never_corroborated() {
        let plain = generate_symptoms(HEALTHY_CROP, false);
        let with_image = generate_symptoms(HEALTHY_CROP, true);
        assert_eq!(plain, with_image);
        assert_eq!(plain[0], "No visible symptoms");
    }
}
