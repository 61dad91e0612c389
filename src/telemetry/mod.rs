//! Telemetry and observability module
//!
//! Structured logging with `tracing`, configured from [`TelemetryConfig`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TelemetryConfig;
use crate::error::{SimulationError, SimulatorResult};

/// Initialize the telemetry subsystem
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so command output on stdout stays machine-readable.
pub fn init_telemetry(config: &TelemetryConfig) -> SimulatorResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| SimulationError::Config(format!("Invalid log level: {}", e)))?;

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let result = if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_file(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .with_target(true);

        subscriber.with(json_layer).try_init()
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_file(false)
            .with_line_number(false)
            .with_target(true)
            .compact();

        subscriber.with(fmt_layer).try_init()
    };

    // A subscriber may already be installed (tests, embedding hosts)
    if let Err(e) = result {
        tracing::debug!(error = %e, "Global subscriber already set");
        return Ok(());
    }

    tracing::info!(
        service = %config.service_name,
        version = %env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}
