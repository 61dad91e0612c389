//! Mock weather lookup

use serde::{Deserialize, Serialize};
use crate::error::{SimulationError, SimulatorResult};

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherParams {
    pub location: String,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "celsius".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub location: String,
    pub temperature: String,
    pub unit: String,
    pub forecast: Vec<String>,
}

/// Returns the same canned forecast for every location
pub struct WeatherService;

impl WeatherService {
    pub fn current_weather(params: WeatherParams) -> SimulatorResult<WeatherResponse> {
        let location = params.location.trim();
        if location.is_empty() {
            return Err(SimulationError::invalid_argument("location", "location is required"));
        }

        let unit = params.unit.to_lowercase();
        if unit != "celsius" && unit != "fahrenheit" {
            return Err(SimulationError::invalid_argument(
                "unit",
                format!("unsupported unit '{}', expected celsius or fahrenheit", params.unit),
            ));
        }

        Ok(WeatherResponse {
            location: location.to_string(),
            temperature: "22".to_string(),
            unit,
            forecast: vec!["sunny".to_string(), "windy".to_string()],
        })
    }
}
