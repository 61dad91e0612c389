//! Function routing
//!
//! Turns a structured function call (usually produced by a model doing
//! function selection and argument extraction) into a call on one of the mock
//! services or the QPS generator.

mod extract;
mod schema;
mod stats;

pub use extract::*;
pub use schema::*;
pub use stats::*;

use std::str::FromStr;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::{QpsConfig, SimulatorConfig};
use crate::error::{SimulationError, SimulatorResult};
use crate::qps::{
    DynGenerator, GeneratorState, QpsGenerator, RandomSource, RngSource, SharedClock, SystemClock,
};
use crate::services::*;
use crate::types::SeriesResponse;

/// Stats key for calls naming no known function
pub const UNKNOWN_FUNCTION: &str = "unknown";

/// The functions a caller can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionName {
    GetCurrentWeather,
    Calculator,
    GetRecentOrders,
    CreateCustomPackage,
    CalculateQps,
}

impl FunctionName {
    pub const ALL: [FunctionName; 5] = [
        Self::GetCurrentWeather,
        Self::Calculator,
        Self::GetRecentOrders,
        Self::CreateCustomPackage,
        Self::CalculateQps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetCurrentWeather => "get_current_weather",
            Self::Calculator => "calculator",
            Self::GetRecentOrders => "get_recent_orders",
            Self::CreateCustomPackage => "create_custom_package",
            Self::CalculateQps => "calculate_qps",
        }
    }
}

impl std::fmt::Display for FunctionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunctionName {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s.trim())
            .ok_or_else(|| SimulationError::UnknownFunction(s.to_string()))
    }
}

/// A function name plus its JSON arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub function: String,
    #[serde(default)]
    pub parameters: Value,
}

impl FunctionCall {
    pub fn new(function: impl Into<String>, parameters: Value) -> Self {
        Self {
            function: function.into(),
            parameters,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct QpsParams {
    time_window_minutes: Option<i64>,
    data_points: Option<i64>,
}

/// Result of a dispatched call, tagged with the function that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "function", content = "result", rename_all = "snake_case")]
pub enum FunctionOutput {
    GetCurrentWeather(WeatherResponse),
    Calculator(CalculationResponse),
    GetRecentOrders(OrderResponse),
    CreateCustomPackage(PackageResponse),
    CalculateQps(SeriesResponse),
}

impl FunctionOutput {
    pub fn function(&self) -> FunctionName {
        match self {
            Self::GetCurrentWeather(_) => FunctionName::GetCurrentWeather,
            Self::Calculator(_) => FunctionName::Calculator,
            Self::GetRecentOrders(_) => FunctionName::GetRecentOrders,
            Self::CreateCustomPackage(_) => FunctionName::CreateCustomPackage,
            Self::CalculateQps(_) => FunctionName::CalculateQps,
        }
    }
}

/// Routes function calls to their handlers
///
/// Owns the one QPS generator for this process; access to it is serialized
/// through a mutex held for the whole series computation.
pub struct FunctionRouter {
    qps: Mutex<DynGenerator>,
    orders: OrderService,
    stats: DispatchStats,
}

impl FunctionRouter {
    /// Build a router with the system clock, seeded from `config.seed` when set
    pub fn new(config: &SimulatorConfig) -> Self {
        Self::with_sources(
            config.qps.clone(),
            Box::new(RngSource::from_seed_option(config.seed)),
            Arc::new(SystemClock),
        )
    }

    /// Build a router from explicit randomness and time sources
    pub fn with_sources(
        qps_config: QpsConfig,
        rng: Box<dyn RandomSource + Send>,
        clock: SharedClock,
    ) -> Self {
        Self::with_generator(QpsGenerator::with_sources(qps_config, rng, clock))
    }

    /// Build a router around an already constructed generator
    pub fn with_generator(generator: DynGenerator) -> Self {
        let orders = OrderService::new(generator.clock().clone());
        Self {
            qps: Mutex::new(generator),
            orders,
            stats: DispatchStats::new(),
        }
    }

    /// Dispatch a structured call
    ///
    /// Unrecognized names are counted under a single `unknown` bucket.
    pub fn dispatch(&self, call: &FunctionCall) -> SimulatorResult<FunctionOutput> {
        let result = match call.function.parse::<FunctionName>() {
            Ok(name) => {
                self.stats.record_call(name.as_str());
                self.route(name, &call.parameters)
            }
            Err(e) => {
                self.stats.record_call(UNKNOWN_FUNCTION);
                Err(e)
            }
        };
        match &result {
            Ok(output) => info!(function = %output.function(), "Function call dispatched"),
            Err(e) => {
                self.stats.record_error();
                warn!(function = %call.function, error = %e, "Function call failed");
            }
        }
        result
    }

    /// Extract a call from model output and dispatch it
    ///
    /// Returns `Ok(None)` when the text carries no function call.
    pub fn dispatch_text(&self, text: &str) -> SimulatorResult<Option<FunctionOutput>> {
        match extract_function_call(text) {
            Some(call) => self.dispatch(&call).map(Some),
            None => Ok(None),
        }
    }

    /// Generate a QPS series, filling unset arguments from configuration
    pub fn calculate_qps(
        &self,
        time_window_minutes: Option<i64>,
        data_points: Option<i64>,
    ) -> SimulatorResult<SeriesResponse> {
        let mut generator = self.qps.lock();
        let window = time_window_minutes.unwrap_or(generator.config().default_window_minutes);
        let points = data_points.unwrap_or(generator.config().default_points);
        generator.calculate_series(window, points)
    }

    /// Snapshot of the generator state
    pub fn qps_state(&self) -> GeneratorState {
        self.qps.lock().state().clone()
    }

    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    fn route(&self, name: FunctionName, parameters: &Value) -> SimulatorResult<FunctionOutput> {
        match name {
            FunctionName::GetCurrentWeather => {
                let params = parse_params(name, parameters)?;
                WeatherService::current_weather(params).map(FunctionOutput::GetCurrentWeather)
            }
            FunctionName::Calculator => {
                let params = parse_params(name, parameters)?;
                CalculatorService::calculate(params).map(FunctionOutput::Calculator)
            }
            FunctionName::GetRecentOrders => {
                let params = parse_params(name, parameters)?;
                self.orders.recent_orders(params).map(FunctionOutput::GetRecentOrders)
            }
            FunctionName::CreateCustomPackage => {
                let params = parse_params(name, parameters)?;
                PackageService::create_custom_package(params)
                    .map(FunctionOutput::CreateCustomPackage)
            }
            FunctionName::CalculateQps => {
                let params: QpsParams = parse_params(name, parameters)?;
                self.calculate_qps(params.time_window_minutes, params.data_points)
                    .map(FunctionOutput::CalculateQps)
            }
        }
    }
}

/// Deserialize call arguments; a missing or null object counts as `{}`
fn parse_params<T: DeserializeOwned>(name: FunctionName, parameters: &Value) -> SimulatorResult<T> {
    let parameters = match parameters {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };

    serde_json::from_value(parameters).map_err(|e| SimulationError::InvalidArgument {
        message: format!("invalid parameters for {}: {}", name, e),
        param: None,
    })
}
