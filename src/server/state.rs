//! Server state management

use std::sync::Arc;
use std::time::Instant;

use crate::config::SimulatorConfig;
use crate::functions::FunctionRouter;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<FunctionRouter>,
    pub config: Arc<SimulatorConfig>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: SimulatorConfig) -> Self {
        Self::with_router(config.clone(), FunctionRouter::new(&config))
    }

    /// Use a pre-built router (e.g. one driven by a fixed clock)
    pub fn with_router(config: SimulatorConfig, router: FunctionRouter) -> Self {
        Self {
            router: Arc::new(router),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
