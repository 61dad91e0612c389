//! Error types for QPS-Simulator

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for simulator operations
pub type SimulatorResult<T> = Result<T, SimulationError>;

/// Main error type for simulation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Caller input errors
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        message: String,
        param: Option<String>,
    },

    // Function routing errors
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Malformed function call: {0}")]
    MalformedCall(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SimulationError {
    /// Shorthand for an [`SimulationError::InvalidArgument`] tied to a parameter
    pub fn invalid_argument(param: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            param: Some(param.to_string()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            Self::UnknownFunction(_) => StatusCode::NOT_FOUND,
            Self::MalformedCall(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_type(&self) -> &str {
        match self {
            Self::Config(_) => "configuration_error",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::UnknownFunction(_) => "unknown_function",
            Self::MalformedCall(_) => "malformed_call",
            Self::Internal(_) => "internal_error",
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        let mut response = ErrorResponse::new(self.error_type(), &self.to_string());

        if let Self::InvalidArgument { param: Some(p), .. } = self {
            response = response.with_param(p);
        }

        response
    }
}

/// JSON error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: ErrorDetail {
                message: message.to_string(),
                error_type: error_type.to_string(),
                param: None,
            },
        }
    }

    pub fn with_param(mut self, param: &str) -> Self {
        self.error.param = Some(param.to_string());
        self
    }
}

impl IntoResponse for SimulationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.to_error_response())).into_response()
    }
}

impl From<std::io::Error> for SimulationError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedCall(err.to_string())
    }
}
