//! HTTP server implementation
//!
//! Exposes the function router and the QPS generator over an Axum HTTP API.

mod handlers;
mod routes;
mod state;
pub mod shutdown;

pub use handlers::*;
pub use routes::*;
pub use shutdown::*;
pub use state::*;

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::config::SimulatorConfig;
use crate::telemetry::init_telemetry;

/// Run the simulator server
pub async fn run_server(config: SimulatorConfig) -> anyhow::Result<()> {
    init_telemetry(&config.telemetry)?;

    let state = AppState::new(config.clone());
    let app = create_router(state.clone());

    let addr: SocketAddr = config.server.socket_addr()?;

    info!(
        "Starting QPS Simulator v{} on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );
    info!(
        base_rate = state.router.qps_state().base_rate,
        seeded = config.seed.is_some(),
        "QPS generator ready"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    let config = state.config.clone();

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let router = Router::new()
        .merge(routes::function_routes())
        .merge(routes::qps_routes())
        .merge(routes::admin_routes())
        .merge(routes::health_routes());

    let router = if config.server.cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(middleware).with_state(state)
}
