//! Configuration module for QPS-Simulator
//!
//! Provides hierarchical configuration with support for:
//! - YAML/TOML/JSON config files
//! - Environment variable overrides
//! - Validation

mod qps;

pub use qps::*;

use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{SimulationError, SimulatorResult};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Seed for deterministic behavior (None = random)
    pub seed: Option<u64>,
    /// Server configuration
    pub server: ServerConfig,
    /// QPS generator settings
    pub qps: QpsConfig,
    /// Telemetry settings
    pub telemetry: TelemetryConfig,
}

impl SimulatorConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SimulatorResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| SimulationError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| SimulationError::Config(format!("YAML parse error: {}", e)))?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| SimulationError::Config(format!("TOML parse error: {}", e)))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| SimulationError::Config(format!("JSON parse error: {}", e)))?,
            _ => return Err(SimulationError::Config(
                "Unsupported config file format. Use .yaml, .toml, or .json".to_string()
            )),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn from_env() -> SimulatorResult<Self> {
        let mut config = Self::default();

        if let Ok(port) = std::env::var("QPS_SIMULATOR_PORT") {
            config.server.port = port.parse().map_err(|_| {
                SimulationError::Config("Invalid port number".to_string())
            })?;
        }

        if let Ok(host) = std::env::var("QPS_SIMULATOR_HOST") {
            config.server.host = host;
        }

        if let Ok(seed) = std::env::var("QPS_SIMULATOR_SEED") {
            config.seed = Some(seed.parse().map_err(|_| {
                SimulationError::Config("Invalid seed value".to_string())
            })?);
        }

        if let Ok(level) = std::env::var("QPS_SIMULATOR_LOG_LEVEL") {
            config.telemetry.log_level = level;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> SimulatorResult<()> {
        self.server.validate()?;
        self.qps.validate()?;
        Ok(())
    }

    /// Render the configuration in the given format (yaml, toml, json)
    pub fn render(&self, format: &str) -> SimulatorResult<String> {
        match format {
            "yaml" | "yml" => serde_yaml::to_string(self)
                .map_err(|e| SimulationError::Config(e.to_string())),
            "toml" => toml::to_string_pretty(self)
                .map_err(|e| SimulationError::Config(e.to_string())),
            "json" => serde_json::to_string_pretty(self)
                .map_err(|e| SimulationError::Config(e.to_string())),
            other => Err(SimulationError::Config(format!("Unknown format: {}", other))),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Enable permissive CORS
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            cors_enabled: true,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> SimulatorResult<()> {
        if self.port == 0 {
            return Err(SimulationError::Config("server.port: Port cannot be 0".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(SimulationError::Config(
                "server.request_timeout_secs: timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> SimulatorResult<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| SimulationError::Config(format!("Invalid socket address: {}", e)))
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Enable telemetry
    pub enabled: bool,
    /// Log level
    pub log_level: String,
    /// Enable JSON logging
    pub json_logs: bool,
    /// Service name reported at startup
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: "info".to_string(),
            json_logs: false,
            service_name: "qps-simulator".to_string(),
        }
    }
}
