//! Function-calling endpoint tests

use axum::http::StatusCode;
use serde_json::json;

use super::common::{assert_error_type, TestApp};

#[tokio::test]
async fn test_list_functions() {
    let app = TestApp::spawn();
    let (status, body) = app.get("/v1/functions").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|schema| schema["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "get_current_weather",
            "calculator",
            "get_recent_orders",
            "create_custom_package",
            "calculate_qps",
        ]
    );
}

#[tokio::test]
async fn test_call_weather() {
    let app = TestApp::spawn();
    let (status, body) = app
        .post(
            "/v1/functions/call",
            json!({"function": "get_current_weather", "parameters": {"location": "Beijing"}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["function"], "get_current_weather");
    assert_eq!(body["result"]["location"], "Beijing");
    assert_eq!(body["result"]["unit"], "celsius");
    assert_eq!(body["result"]["forecast"], json!(["sunny", "windy"]));
}

#[tokio::test]
async fn test_call_calculator() {
    let app = TestApp::spawn();
    let (status, body) = app
        .post(
            "/v1/functions/call",
            json!({"function": "calculator", "parameters": {"operation": "*", "x": 6, "y": 7}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["result"], 42.0);
}

#[tokio::test]
async fn test_call_calculator_divide_by_zero() {
    let app = TestApp::spawn();
    let (status, body) = app
        .post(
            "/v1/functions/call",
            json!({"function": "calculator", "parameters": {"operation": "/", "x": 1, "y": 0}}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_type(&body, "invalid_argument");
}

#[tokio::test]
async fn test_call_recent_orders_uses_clock() {
    let app = TestApp::spawn();
    let (status, body) = app
        .post(
            "/v1/functions/call",
            json!({"function": "get_recent_orders", "parameters": {"user_id": "u-1"}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["total_orders"], 3);
    assert_eq!(body["result"]["period"], "Last 3 months");
    assert_eq!(body["result"]["orders"][0]["date"], "2024-06-01T15:00:00");
}

#[tokio::test]
async fn test_call_custom_package() {
    let app = TestApp::spawn();
    let (status, body) = app
        .post(
            "/v1/functions/call",
            json!({"function": "create_custom_package", "parameters": {"name": "Pro", "duration": 2}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let package = &body["result"]["package"];
    assert_eq!(package["name"], "Pro");
    assert_eq!(package["features"].as_array().unwrap().len(), 3);
    assert_eq!(package["price"], 600.0);
    assert!(body["result"]["payment_url"]
        .as_str()
        .unwrap()
        .starts_with("https://example.com/pay?"));
}

#[tokio::test]
async fn test_call_unknown_function() {
    let app = TestApp::spawn();
    let (status, body) = app
        .post(
            "/v1/functions/call",
            json!({"function": "send_email", "parameters": {}}),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_type(&body, "unknown_function");
}

#[tokio::test]
async fn test_call_missing_required_parameter() {
    let app = TestApp::spawn();
    let (status, body) = app
        .post(
            "/v1/functions/call",
            json!({"function": "get_current_weather", "parameters": {}}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_type(&body, "invalid_argument");
}

#[tokio::test]
async fn test_extract_fenced_call() {
    let app = TestApp::spawn();
    let text = "Sure, let me look that up.\n```json\n{\"function\": \"calculator\", \
                \"parameters\": {\"operation\": \"add\", \"x\": 2, \"y\": 3}}\n```";
    let (status, body) = app
        .post("/v1/functions/extract", json!({ "text": text }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["called"], true);
    assert_eq!(body["output"]["function"], "calculator");
    assert_eq!(body["output"]["result"]["result"], 5.0);
}

#[tokio::test]
async fn test_extract_without_call() {
    let app = TestApp::spawn();
    let (status, body) = app
        .post(
            "/v1/functions/extract",
            json!({"text": "The weather is lovely today."}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["called"], false);
    assert!(body.get("output").is_none());
}
