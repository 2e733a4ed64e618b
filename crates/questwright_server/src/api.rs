//! HTTP API for generating adventures.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use questwright_core::{
    AdventureRequest, CostEstimate, CostEstimator, ModelSelection, OptionCatalog,
};
use questwright_error::{ValidationError, ValidationErrorKind};
use questwright_interface::{CompletionDriver, generate_adventure};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// Body sent when the completion call fails for any reason.
pub const GENERATION_FAILED: &str = "Failed to generate adventure.";

/// Body sent for unsupported methods on the API routes.
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

type ApiError = (StatusCode, Json<Value>);

/// Shared handler state.
///
/// Everything here is read-only; requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    driver: Arc<dyn CompletionDriver>,
    selection: ModelSelection,
    estimator: CostEstimator,
    temperature: f32,
    max_scenes: usize,
}

impl AppState {
    /// Creates new API state with the default estimator weights.
    pub fn new(
        driver: Arc<dyn CompletionDriver>,
        selection: ModelSelection,
        temperature: f32,
        max_scenes: usize,
    ) -> Self {
        Self {
            driver,
            selection,
            estimator: CostEstimator::default(),
            temperature,
            max_scenes,
        }
    }

    /// Replace the estimator.
    pub fn with_estimator(mut self, estimator: CostEstimator) -> Self {
        self.estimator = estimator;
        self
    }
}

/// Estimate plus the profile that would serve the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    /// Token and cost figures
    #[serde(flatten)]
    pub estimate: CostEstimate,
    /// Model that would be called
    pub model: String,
    /// Output ceiling that would be requested
    pub max_tokens: u32,
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/options", get(options))
        .route(
            "/api/generate-adventure",
            post(generate).fallback(method_not_allowed),
        )
        .route("/api/estimate", post(estimate).fallback(method_not_allowed))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({"error": METHOD_NOT_ALLOWED})),
    )
}

/// Option lists for building a form.
async fn options(State(state): State<AppState>) -> impl IntoResponse {
    Json(OptionCatalog::snapshot(state.max_scenes))
}

/// Generate one adventure.
///
/// Validation failures answer 400 without touching the driver. Completion
/// failures are logged here and answered with [`GENERATION_FAILED`].
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn generate(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let request = parse_submission(&body, state.max_scenes)?;
    info!(
        scenes = request.structure.len(),
        detail = %request.detail_level,
        "Generating adventure"
    );

    match generate_adventure(
        state.driver.as_ref(),
        &request,
        &state.selection,
        state.temperature,
    )
    .await
    {
        Ok(adventure) => Ok(Json(json!({"result": adventure.into_text()}))),
        Err(e) => {
            error!(error = %e, "Adventure generation failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": GENERATION_FAILED})),
            ))
        }
    }
}

/// Estimate tokens and cost for a submission.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn estimate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EstimateResponse>, ApiError> {
    let request = parse_submission(&body, state.max_scenes)?;
    let profile = state.selection.for_detail(request.detail_level);

    Ok(Json(EstimateResponse {
        estimate: state.estimator.estimate(&request, profile),
        model: profile.model().clone(),
        max_tokens: *profile.max_tokens(),
    }))
}

/// Decode and validate a body, mapping failures to a 400 response.
fn parse_submission(body: &[u8], max_scenes: usize) -> Result<AdventureRequest, ApiError> {
    let request = serde_json::from_slice::<Value>(body)
        .map_err(|e| ValidationError::new(ValidationErrorKind::MalformedBody(e.to_string())))
        .and_then(AdventureRequest::from_json_value)
        .and_then(|request| request.validate(max_scenes).map(|()| request));

    request.map_err(|e| {
        warn!(reason = %e.message(), "Rejected submission");
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": e.message()})),
        )
    })
}
