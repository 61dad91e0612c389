//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;
use super::state::AppState;

/// Function-calling routes
pub fn function_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/functions", get(handlers::list_functions))
        .route("/v1/functions/call", post(handlers::call_function))
        .route("/v1/functions/extract", post(handlers::extract_and_call))
}

/// QPS series routes
pub fn qps_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/qps", get(handlers::get_qps_series))
        .route("/v1/qps/state", get(handlers::get_qps_state))
}

/// Admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/stats", get(handlers::get_stats))
        .route("/admin/stats/reset", post(handlers::reset_stats))
        .route("/admin/config", get(handlers::get_config))
}

/// Health and info routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/healthz", get(handlers::health_check))
        .route("/version", get(handlers::version))
        .route("/", get(handlers::root))
}
