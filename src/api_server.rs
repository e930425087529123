// Axum API Server Module
//
// Purpose: thin HTTP surface over the analysis engine and its exports.
// Analyses are instantaneous, so handlers run them inline.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog::{suggest_locations, CROP_TYPES};
use crate::config::EngineConfig;
use crate::engine::AnalysisEngine;
use crate::error::AnalysisError;
use crate::export::{
    analysis_export_filename, dataset_export_filename, dataset_info, CsvFormatter,
};
use crate::types::{AnalysisInput, AnalysisResult};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnalysisEngine>,
}

impl AppState {
    pub fn new(config: EngineConfig) -> Self {
        let engine = AnalysisEngine::new(config);
        let tuning = engine.config();
        tracing::info!(
            "Initializing analysis engine over {} crops (reselect_chance={}, image_boost={}, reselect_boost={}, cap={})",
            engine.catalog().crop_count(),
            tuning.reselect_chance,
            tuning.image_boost,
            tuning.reselect_boost,
            tuning.probability_cap
        );
        Self {
            engine: Arc::new(engine),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Form helpers
        .route("/api/crops", get(list_crops))
        .route("/api/locations", get(list_locations))

        // Analysis endpoints
        .route("/api/analysis", post(analyze))
        .route("/api/analysis/csv", post(analyze_csv))

        // Dataset metadata
        .route("/api/dataset", get(get_dataset))
        .route("/api/dataset/csv", get(get_dataset_csv))

        // Middleware (applied in reverse order)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_crops() -> impl IntoResponse {
    Json(serde_json::json!({ "cropTypes": CROP_TYPES }))
}

async fn list_locations(Query(params): Query<LocationQuery>) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    Json(serde_json::json!({ "suggestions": suggest_locations(&query) }))
}

async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = run_request(&state, payload)?;
    Ok(Json(result))
}

async fn analyze_csv(
    State(state): State<AppState>,
    Json(payload): Json<AnalysisRequest>,
) -> Result<Response, AppError> {
    let result = run_request(&state, payload)?;
    let filename = analysis_export_filename(
        &result.crop_type,
        chrono::Utc::now().date_naive(),
        "csv",
    );
    Ok(csv_attachment(CsvFormatter::format_analysis(&result), &filename))
}

async fn get_dataset() -> impl IntoResponse {
    Json(dataset_info())
}

async fn get_dataset_csv() -> Response {
    let filename = dataset_export_filename(chrono::Utc::now().date_naive(), "csv");
    csv_attachment(CsvFormatter::format_dataset(&dataset_info()), &filename)
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(serde::Deserialize)]
struct LocationQuery {
    q: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisRequest {
    crop_type: String,
    location: String,
    #[serde(default)]
    has_image: bool,
    /// Fixed seed for reproducible image-based selection
    seed: Option<u64>,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn run_request(state: &AppState, payload: AnalysisRequest) -> Result<AnalysisResult, AppError> {
    let input = AnalysisInput::new(payload.crop_type, payload.location, payload.has_image);

    let mut rng = match payload.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    Ok(state.engine.run(&input, &mut rng)?)
}

fn csv_attachment(body: String, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::MissingRequiredInput { .. } => AppError::BadRequest(err.to_string()),
            AnalysisError::InvalidSeverity(_) => {
                tracing::error!("Analysis invariant broken: {}", err);
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
