//! Custom package creation with payment links

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::{SimulationError, SimulatorResult};

const PAYMENT_BASE_URL: &str = "https://example.com/pay";

/// Feature catalogue; the first three form the default bundle
pub const BASE_FEATURES: [&str; 10] = [
    "Basic access",
    "Online documentation",
    "Community support",
    "API access",
    "Data analytics",
    "Advanced reports",
    "Dedicated support",
    "Custom services",
    "Priority response",
    "Expert consultation",
];

#[derive(Debug, Clone, Deserialize)]
pub struct PackageParams {
    pub name: String,
    #[serde(default = "default_duration")]
    pub duration: i64,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub price: Option<f64>,
}

fn default_duration() -> i64 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Months
    pub duration: i64,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageResponse {
    pub package: Package,
    pub payment_url: String,
}

pub struct PackageService;

impl PackageService {
    pub fn create_custom_package(params: PackageParams) -> SimulatorResult<PackageResponse> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(SimulationError::invalid_argument("name", "package name is required"));
        }
        if params.duration <= 0 {
            return Err(SimulationError::invalid_argument(
                "duration",
                format!("duration must be positive, got {}", params.duration),
            ));
        }

        // Only an absent list falls back to the default bundle; `[]` stays empty
        let features = match params.features {
            Some(features) => features,
            None => BASE_FEATURES[..3].iter().map(|f| f.to_string()).collect(),
        };

        let price = match params.price {
            Some(price) if !price.is_finite() || price < 0.0 => {
                return Err(SimulationError::invalid_argument(
                    "price",
                    "price must be a non-negative number",
                ));
            }
            Some(price) => price,
            None => features.len() as f64 * 100.0 * params.duration as f64,
        };

        let package = Package {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            price,
            duration: params.duration,
            features,
        };
        let payment_url = payment_url(&package)?;

        Ok(PackageResponse {
            package,
            payment_url,
        })
    }
}

fn payment_url(package: &Package) -> SimulatorResult<String> {
    let description = format!("{} Package for {} months", package.name, package.duration);
    let amount = format!("{:.2}", package.price);

    let url = Url::parse_with_params(
        PAYMENT_BASE_URL,
        &[
            ("id", package.id.as_str()),
            ("amount", amount.as_str()),
            ("description", description.as_str()),
        ],
    )
    .map_err(|e| SimulationError::Internal(format!("failed to build payment url: {}", e)))?;

    Ok(url.into())
}
