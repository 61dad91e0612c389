//! HTTP request handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::state::AppState;
use crate::config::SimulatorConfig;
use crate::error::SimulationError;
use crate::functions::{function_schemas, DispatchSnapshot, FunctionCall, FunctionOutput};
use crate::qps::GeneratorState;
use crate::types::SeriesResponse;

// ============== Function Handlers ==============

/// GET /v1/functions
pub async fn list_functions() -> Json<Value> {
    Json(function_schemas())
}

/// POST /v1/functions/call
pub async fn call_function(
    State(state): State<AppState>,
    Json(call): Json<FunctionCall>,
) -> Result<Json<FunctionOutput>, SimulationError> {
    state.router.dispatch(&call).map(Json)
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    /// False when the text held no function call
    pub called: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<FunctionOutput>,
}

/// POST /v1/functions/extract
pub async fn extract_and_call(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, SimulationError> {
    let output = state.router.dispatch_text(&request.text)?;
    Ok(Json(ExtractResponse {
        called: output.is_some(),
        output,
    }))
}

// ============== QPS Handlers ==============

#[derive(Debug, Default, Deserialize)]
pub struct QpsQuery {
    pub time_window_minutes: Option<i64>,
    pub data_points: Option<i64>,
}

/// GET /v1/qps
pub async fn get_qps_series(
    State(state): State<AppState>,
    Query(query): Query<QpsQuery>,
) -> Result<Json<SeriesResponse>, SimulationError> {
    state
        .router
        .calculate_qps(query.time_window_minutes, query.data_points)
        .map(Json)
}

/// GET /v1/qps/state
pub async fn get_qps_state(State(state): State<AppState>) -> Json<GeneratorState> {
    Json(state.router.qps_state())
}

// ============== Admin Handlers ==============

/// GET /admin/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<DispatchSnapshot> {
    Json(state.router.stats().snapshot())
}

/// POST /admin/stats/reset
pub async fn reset_stats(State(state): State<AppState>) -> StatusCode {
    state.router.stats().reset();
    StatusCode::NO_CONTENT
}

/// GET /admin/config
pub async fn get_config(State(state): State<AppState>) -> Json<SimulatorConfig> {
    Json((*state.config).clone())
}

// ============== Health Handlers ==============

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub current_qps: f64,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
        current_qps: state.router.qps_state().current_rate,
    })
}

#[derive(Serialize)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
    pub rust_version: String,
}

/// GET /version
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rust_version: env!("CARGO_PKG_RUST_VERSION").to_string(),
    })
}

#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<String>,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: "QPS Simulator".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: env!("CARGO_PKG_DESCRIPTION").to_string(),
        endpoints: vec![
            "/v1/functions".to_string(),
            "/v1/functions/call".to_string(),
            "/v1/functions/extract".to_string(),
            "/v1/qps".to_string(),
            "/v1/qps/state".to_string(),
            "/health".to_string(),
        ],
    })
}
