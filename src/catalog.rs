//! Disease Catalog
//!
//! Static crop → condition tables. Order within each table matters: index 0 is
//! the nominal finding for the crop, the rest are alternatives that image-based
//! selection may surface.
//!
//! The lookup map is built once on first use and never written again, so it
//! can be shared freely between threads.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::types::{ConditionRecord, SeverityTier};

/// Crop types offered to callers (also the catalog's key set)
pub const CROP_TYPES: &[&str] = &[
    "Wheat",
    "Rice",
    "Cotton",
    "Tomato",
    "Corn",
    "Soybean",
    "Potato",
    "Sugarcane",
    "Barley",
    "Millet",
];

/// Location hints for free-text location entry
pub const LOCATION_SUGGESTIONS: &[&str] = &[
    "Punjab, India",
    "Maharashtra, India",
    "Karnataka, India",
    "Tamil Nadu, India",
    "Gujarat, India",
    "Rajasthan, India",
    "Uttar Pradesh, India",
    "West Bengal, India",
    "Andhra Pradesh, India",
    "Madhya Pradesh, India",
];

// ============================================================================
// EMBEDDED CONDITION TABLES
// ============================================================================

const fn condition(name: &'static str, severity: SeverityTier, probability: f64) -> ConditionRecord {
    ConditionRecord { name, severity, probability }
}

use SeverityTier::{High, Low, Medium};

static WHEAT: &[ConditionRecord] = &[
    condition("Rust", Medium, 0.65),
    condition("Powdery Mildew", Low, 0.25),
    condition("Leaf Blight", High, 0.80),
];

static RICE: &[ConditionRecord] = &[
    condition("Blast", High, 0.75),
    condition("Sheath Blight", Medium, 0.55),
    condition("Brown Spot", Low, 0.30),
];

static COTTON: &[ConditionRecord] = &[
    condition("Boll Rot", Medium, 0.50),
    condition("Leaf Curl Virus", High, 0.85),
    condition("Alternaria Leaf Spot", Low, 0.35),
];

static TOMATO: &[ConditionRecord] = &[
    condition("Early Blight", Medium, 0.60),
    condition("Late Blight", High, 0.70),
    condition("Bacterial Spot", Low, 0.40),
];

static CORN: &[ConditionRecord] = &[
    condition("Northern Corn Leaf Blight", Medium, 0.55),
    condition("Common Rust", Low, 0.30),
    condition("Gray Leaf Spot", High, 0.75),
];

static SOYBEAN: &[ConditionRecord] = &[
    condition("Soybean Rust", High, 0.80),
    condition("Bacterial Blight", Low, 0.25),
    condition("Frogeye Leaf Spot", Medium, 0.50),
];

static POTATO: &[ConditionRecord] = &[
    condition("Late Blight", High, 0.85),
    condition("Early Blight", Medium, 0.60),
    condition("Common Scab", Low, 0.35),
];

static SUGARCANE: &[ConditionRecord] = &[
    condition("Red Rot", Medium, 0.55),
    condition("Smut", Low, 0.30),
    condition("Rust", High, 0.70),
];

static BARLEY: &[ConditionRecord] = &[
    condition("Net Blotch", Medium, 0.50),
    condition("Powdery Mildew", Low, 0.35),
    condition("Stripe Rust", High, 0.75),
];

static MILLET: &[ConditionRecord] = &[
    condition("Downy Mildew", Medium, 0.45),
    condition("Rust", Low, 0.30),
    condition("Blast", High, 0.65),
];

// ============================================================================
// CATALOG
// ============================================================================

/// Read-only mapping from crop type to its ordered candidate conditions
#[derive(Debug)]
pub struct DiseaseCatalog {
    entries: FxHashMap<&'static str, &'static [ConditionRecord]>,
}

impl DiseaseCatalog {
    fn build() -> Self {
        let tables: [(&'static str, &'static [ConditionRecord]); 10] = [
            ("Wheat", WHEAT),
            ("Rice", RICE),
            ("Cotton", COTTON),
            ("Tomato", TOMATO),
            ("Corn", CORN),
            ("Soybean", SOYBEAN),
            ("Potato", POTATO),
            ("Sugarcane", SUGARCANE),
            ("Barley", BARLEY),
            ("Millet", MILLET),
        ];

        let mut entries = FxHashMap::default();
        entries.reserve(tables.len());
        for (crop, conditions) in tables {
            entries.insert(crop, conditions);
        }

        Self { entries }
    }

    /// Process-wide catalog, initialised on first access
    pub fn global() -> &'static DiseaseCatalog {
        static CATALOG: OnceLock<DiseaseCatalog> = OnceLock::new();
        CATALOG.get_or_init(DiseaseCatalog::build)
    }

    /// Candidate conditions for a crop, in catalog order.
    ///
    /// Unknown crop types yield an empty slice; callers treat that as healthy.
    pub fn lookup(&self, crop_type: &str) -> &'static [ConditionRecord] {
        self.entries.get(crop_type).copied().unwrap_or(&[])
    }

    pub fn contains(&self, crop_type: &str) -> bool {
        self.entries.contains_key(crop_type)
    }

    pub fn crop_count(&self) -> usize {
        self.entries.len()
    }
}

/// Location suggestions containing `query` (case-insensitive).
///
/// A blank query yields no suggestions.
pub fn suggest_locations(query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    LOCATION_SUGGESTIONS
        .iter()
        .copied()
        .filter(|loc| loc.to_lowercase().contains(&needle))
        .collect()
}
