//! Error types for crop condition analysis

use thiserror::Error;

/// Errors surfaced by the analysis engine.
///
/// An unknown crop type is deliberately absent: catalog misses fall back to
/// the healthy-crop sentinel instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A required caller input (crop type or location) was empty
    #[error("missing required input: {field}")]
    MissingRequiredInput { field: &'static str },

    /// Severity value outside {None, Low, Medium, High}, or a severity that
    /// cannot occur for the given condition
    #[error("invalid severity: {0}")]
    InvalidSeverity(String),
}
