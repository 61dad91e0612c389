//! Common test utilities for integration tests
//!
//! Provides a router driven by a fixed clock and deterministic randomness,
//! plus request helpers that go through the full middleware stack.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use tower::ServiceExt;

use qps_simulator::{
    config::SimulatorConfig,
    qps::{FixedClock, MidpointSource},
    server::{create_router, AppState},
    FunctionRouter,
};

/// Test application wrapper
pub struct TestApp {
    pub router: Router,
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    /// Application pinned to 2024-06-01 15:00:00 with midpoint randomness
    ///
    /// Midpoint randomness gives a base rate of 30, unit noise and no bursts.
    pub fn spawn() -> Self {
        Self::spawn_with_config(SimulatorConfig::default())
    }

    pub fn spawn_with_config(config: SimulatorConfig) -> Self {
        let clock = Arc::new(FixedClock::new(start_time()));
        let router = FunctionRouter::with_sources(
            config.qps.clone(),
            Box::new(MidpointSource),
            clock.clone(),
        );
        let state = AppState::with_router(config, router);

        Self {
            router: create_router(state),
            clock,
        }
    }

    /// Send a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.send(Method::GET, path, None).await
    }

    /// Send a POST request with JSON body
    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}

pub fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(15, 0, 0)
        .unwrap()
}

/// Parse a serialized sample timestamp
pub fn timestamp(value: &Value) -> NaiveDateTime {
    serde_json::from_value(value.clone()).unwrap()
}

/// Assert an error body carries the expected type
pub fn assert_error_type(body: &Value, expected: &str) {
    assert_eq!(
        body["error"]["type"], expected,
        "unexpected error body: {}",
        body
    );
}
