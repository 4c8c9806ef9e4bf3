// Axum API Server Module
//
// Purpose: JSON surface over the sample evaluator for dashboards
// Endpoints: /health, /standards, /calculate-direct, /calculate-batch

#[cfg(feature = "api")]
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use crate::batch::summarize;

#[cfg(feature = "api")]
use crate::classify::{
    ClassificationScheme, RiskCategory, FIVE_TIER_BOUNDS, HAZARD_LOW_MAX, HAZARD_MODERATE_MAX,
    STANDARD_EXCELLENT_MAX, STANDARD_GOOD_MAX,
};

#[cfg(feature = "api")]
use crate::reading::{ConcentrationReading, Sample};

#[cfg(feature = "api")]
use crate::scorer::SampleEvaluator;

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<SampleEvaluator>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(evaluator: SampleEvaluator) -> Self {
        Self {
            evaluator: Arc::new(evaluator),
        }
    }

    /// Evaluator for a request, honouring a per-request scheme override
    fn evaluator_for(&self, scheme: Option<ClassificationScheme>) -> Arc<SampleEvaluator> {
        match scheme {
            Some(s) if s != self.evaluator.scheme() => Arc::new(self.evaluator.with_scheme(s)),
            _ => self.evaluator.clone(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/standards", get(get_standards))
        .route("/calculate-direct", post(calculate_direct))
        .route("/calculate-batch", post(calculate_batch))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn get_standards(State(state): State<AppState>) -> Json<serde_json::Value> {
    let bands = |scheme| {
        RiskCategory::all(scheme)
            .iter()
            .map(|c| {
                serde_json::json!({
                    "category": c,
                    "color": c.color(),
                    "description": c.description(),
                })
            })
            .collect::<Vec<_>>()
    };

    Json(serde_json::json!({
        "metals": state.evaluator.table(),
        "active_scheme": state.evaluator.scheme(),
        "classification": {
            "standard": {
                "excellent_max": STANDARD_EXCELLENT_MAX,
                "good_max": STANDARD_GOOD_MAX,
                "categories": bands(ClassificationScheme::Standard),
            },
            "five_tier": {
                "lower_bounds": FIVE_TIER_BOUNDS,
                "categories": bands(ClassificationScheme::FiveTier),
            },
            "hazard_index": {
                "low_max": HAZARD_LOW_MAX,
                "moderate_max": HAZARD_MODERATE_MAX,
            },
        },
    }))
}

#[cfg(feature = "api")]
async fn calculate_direct(
    State(state): State<AppState>,
    Json(payload): Json<DirectRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if payload.concentrations.is_empty() {
        return Err(AppError::BadRequest(
            "No concentration data provided".to_string(),
        ));
    }
    payload
        .concentrations
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let evaluator = state.evaluator_for(payload.scheme);
    let sample_id = payload.sample_id.unwrap_or_else(|| "Sample_1".to_string());
    let result = evaluator.evaluate(&sample_id, &payload.concentrations);

    Ok(Json(serde_json::json!({
        "success": true,
        "results": result,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

#[cfg(feature = "api")]
async fn calculate_batch(
    State(state): State<AppState>,
    Json(payload): Json<BatchRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if payload.samples.is_empty() {
        return Err(AppError::BadRequest("No samples provided".to_string()));
    }
    for sample in &payload.samples {
        sample
            .concentrations
            .validate()
            .map_err(|e| AppError::BadRequest(format!("sample '{}': {}", sample.sample_id, e)))?;
    }

    let evaluator = state.evaluator_for(payload.scheme);
    let n_samples = payload.samples.len();
    tracing::info!("Evaluating batch of {} samples", n_samples);

    // CPU-bound work: run in blocking thread pool
    let (results, summary) = tokio::task::spawn_blocking(move || {
        let results = evaluator.evaluate_batch(&payload.samples);
        let summary = summarize(&results);
        (results, summary)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?;

    Ok(Json(serde_json::json!({
        "success": true,
        "overall_statistics": summary,
        "samples": results,
        "analysis_timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

// ============================================================================
// Request Types
// ============================================================================

#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
struct DirectRequest {
    #[serde(default)]
    sample_id: Option<String>,
    concentrations: ConcentrationReading,
    #[serde(default)]
    scheme: Option<ClassificationScheme>,
}

#[cfg(feature = "api")]
#[derive(serde::Deserialize)]
struct BatchRequest {
    samples: Vec<Sample>,
    #[serde(default)]
    scheme: Option<ClassificationScheme>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    Internal(String),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
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
