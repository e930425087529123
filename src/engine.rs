//! Analysis Engine
//!
//! Ties selection, scoring, text synthesis and assembly into one synchronous
//! call. The only source of nondeterminism besides the timestamp is the
//! caller's `Rng`.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::assembler::assemble;
use crate::catalog::DiseaseCatalog;
use crate::config::EngineConfig;
use crate::error::AnalysisError;
use crate::recommendations::generate_recommendations;
use crate::scoring::health_score;
use crate::selector::select_condition;
use crate::symptoms::generate_symptoms;
use crate::types::{AnalysisInput, AnalysisResult};

/// Crop condition analysis over the process-wide catalog
#[derive(Debug, Clone, Copy)]
pub struct AnalysisEngine {
    catalog: &'static DiseaseCatalog,
    config: EngineConfig,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl AnalysisEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            catalog: DiseaseCatalog::global(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'static DiseaseCatalog {
        self.catalog
    }

    /// Run an analysis stamped with the current instant
    pub fn run<R: Rng + ?Sized>(
        &self,
        input: &AnalysisInput,
        rng: &mut R,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.run_at(input, rng, Utc::now())
    }

    /// Run an analysis stamped with `now`.
    ///
    /// Fails with `MissingRequiredInput` for a blank crop type or location;
    /// otherwise either the full result is produced or nothing is.
    pub fn run_at<R: Rng + ?Sized>(
        &self,
        input: &AnalysisInput,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Result<AnalysisResult, AnalysisError> {
        input.validate()?;

        let candidates = self.catalog.lookup(&input.crop_type);
        let condition = select_condition(
            self.catalog,
            &input.crop_type,
            input.image_signal,
            &self.config,
            rng,
        );

        let score = health_score(condition.probability);
        let symptoms = generate_symptoms(condition.name, input.image_signal);
        let recommendations =
            generate_recommendations(condition.name, condition.severity, input.image_signal)?;

        tracing::info!(
            "Analyzed {} at '{}': {} ({}, p={:.2}, health={}, image={})",
            input.crop_type,
            input.location,
            condition.name,
            condition.severity,
            condition.probability,
            score,
            input.image_signal
        );

        Ok(assemble(
            input,
            &condition,
            score,
            symptoms,
            recommendations,
            candidates,
            now,
        ))
    }
}

/// Analyze one crop with the default tuning constants.
pub fn run_analysis<R: Rng + ?Sized>(
    crop_type: &str,
    location: &str,
    image_signal: bool,
    rng: &mut R,
) -> Result<AnalysisResult, AnalysisError> {
    AnalysisEngine::default().run(&AnalysisInput::new(crop_type, location, image_signal), rng)
}
