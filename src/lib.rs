//! Crop Condition Inference Engine
//!
//! Rule-based crop health analysis: given a crop type, a location and an
//! optional field-image signal, picks a representative condition from a static
//! catalog and turns it into a scored, explained analysis record.
//!
//! Pipeline (leaf-first):
//! - `catalog`: static crop → condition tables
//! - `selector`: primary condition selection (image-aware, injected RNG)
//! - `scoring`: probability → 0-100 health score
//! - `symptoms` / `recommendations`: text synthesis
//! - `assembler`: final `AnalysisResult`
//! - `engine`: entry points tying the above together
//! - `export`: JSON / CSV / markdown renderings and dataset metadata

pub mod error;
pub mod types;
pub mod config;
pub mod catalog;
pub mod selector;
pub mod scoring;
pub mod symptoms;
pub mod recommendations;
pub mod assembler;
pub mod engine;
pub mod export;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::AnalysisError;
pub use types::{
    AnalysisInput, AnalysisResult, ConditionRecord, ImageAnalysisNote, SeverityTier, HEALTHY_CROP,
};
pub use scoring::{health_score, HealthBand};
pub use config::EngineConfig;
pub use catalog::{DiseaseCatalog, CROP_TYPES};
pub use engine::{run_analysis, AnalysisEngine};
pub use export::{dataset_info, CsvFormatter, DatasetInfo, JsonFormatter, MarkdownFormatter};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
