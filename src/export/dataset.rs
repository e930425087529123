use serde::{Deserialize, Serialize};

/// Static description of the training dataset shown alongside analyses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    pub total_samples: u64,
    pub crop_types: u32,
    pub disease_classes: u32,
    pub features: Vec<DatasetFeature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetFeature {
    pub name: String,
    pub description: String,
    /// Relative importance in [0, 1]
    pub importance: f64,
}

static FEATURES: &[(&str, &str, f64)] = &[
    ("Soil Moisture", "Water content in soil affecting root health", 0.92),
    ("Temperature", "Ambient temperature influencing crop growth", 0.88),
    ("Humidity", "Air moisture level affecting disease spread", 0.85),
    ("Leaf Color", "Chlorophyll content indicating plant health", 0.90),
    ("Weather Data", "Rainfall, wind speed, and sunlight hours", 0.87),
    ("Soil pH", "Acidity/alkalinity affecting nutrient uptake", 0.79),
    ("Nitrogen Level", "Soil nitrogen content for growth", 0.82),
    ("Phosphorus Level", "Essential for root and flower development", 0.75),
];

pub fn dataset_info() -> DatasetInfo {
    DatasetInfo {
        total_samples: 125_000,
        crop_types: 10,
        disease_classes: 38,
        features: FEATURES
            .iter()
            .map(|&(name, description, importance)| DatasetFeature {
                name: name.to_string(),
                description: description.to_string(),
                importance,
            })
            .collect(),
    }
}
