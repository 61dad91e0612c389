//! # QPS-Simulator
//!
//! Function-calling demo harness with a realistic synthetic QPS generator.
//!
//! The simulator turns model output containing a JSON function call into a
//! dispatched call against a small set of mock services, the most interesting
//! of which produces queries-per-second time series with a diurnal traffic
//! pattern, random noise, occasional bursts, and exponential smoothing.
//!
//! ## Features
//!
//! - **Synthetic QPS Series**: Peak/off-peak factor, noise, bursts, smoothing
//! - **Function Calling**: Extract calls from free text and route them
//! - **Deterministic Execution**: Injectable random source and clock
//! - **HTTP API**: Axum server exposing functions and series
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qps_simulator::{QpsGenerator, config::QpsConfig};
//!
//! let mut generator = QpsGenerator::with_seed(QpsConfig::default(), 42);
//! let series = generator.calculate_series(5, 10).unwrap();
//! for point in &series.data {
//!     println!("{}", point);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod functions;
pub mod qps;
pub mod server;
pub mod services;
pub mod telemetry;
pub mod types;

pub use config::SimulatorConfig;
pub use error::{SimulationError, SimulatorResult};
pub use functions::{FunctionCall, FunctionOutput, FunctionRouter};
pub use qps::QpsGenerator;
pub use server::run_server;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;
