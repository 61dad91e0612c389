//! CLI Module for QPS-Simulator
//!
//! Provides a command-line interface with subcommands for:
//! - Starting the HTTP server
//! - Generating QPS series locally
//! - Dispatching function calls from model output
//! - Managing configuration

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::VERSION;

/// QPS-Simulator: function-calling demo harness with synthetic QPS data
#[derive(Parser, Debug)]
#[command(name = "qps-simulator")]
#[command(author = "LLM DevOps Team")]
#[command(version = VERSION)]
#[command(about = "Function-calling demo harness with a realistic synthetic QPS generator")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration file path (YAML, TOML, or JSON)
    #[arg(short, long, global = true, env = "QPS_SIMULATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Global log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "QPS_SIMULATOR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Enable JSON log output
    #[arg(long, global = true, env = "QPS_SIMULATOR_JSON_LOGS")]
    pub json_logs: bool,

    /// Quiet mode - suppress banner and non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    #[command(alias = "s")]
    Serve(ServeCommand),

    /// Generate a QPS series for the last N minutes
    Qps(QpsCommand),

    /// Extract a function call from text and dispatch it
    Call(CallCommand),

    /// Print the function schemas
    Functions,

    /// Configuration management
    #[command(alias = "cfg")]
    Config(ConfigCommand),

    /// Show version and build information
    Version,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Start the HTTP server
#[derive(Parser, Debug)]
pub struct ServeCommand {
    /// Port to listen on
    #[arg(short, long, env = "QPS_SIMULATOR_PORT")]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long, env = "QPS_SIMULATOR_HOST")]
    pub host: Option<String>,

    /// Set a fixed seed for deterministic behavior
    #[arg(long, env = "QPS_SIMULATOR_SEED")]
    pub seed: Option<u64>,
}

/// Generate a QPS series
#[derive(Parser, Debug)]
pub struct QpsCommand {
    /// Time window in minutes
    #[arg(short, long, allow_negative_numbers = true)]
    pub window: Option<i64>,

    /// Number of data points
    #[arg(short, long, allow_negative_numbers = true)]
    pub points: Option<i64>,

    /// Seed for deterministic output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Dispatch a function call
#[derive(Parser, Debug)]
pub struct CallCommand {
    /// Model output or JSON function call ("-" reads stdin)
    pub input: String,

    /// Seed for deterministic output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Configuration management
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output format (yaml, toml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate configuration file
    Validate {
        /// Configuration file to validate
        file: PathBuf,
    },
}
