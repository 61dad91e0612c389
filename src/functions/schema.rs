//! JSON-schema descriptions of the callable functions
//!
//! This is the catalogue a model is shown when it has to pick a function and
//! extract its arguments.

use serde_json::{json, Value};

use crate::services::Operation;

/// Schemas for every function the router accepts
pub fn function_schemas() -> Value {
    json!([
        {
            "name": "get_current_weather",
            "description": "Get the current weather for a city",
            "parameters": {
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "City name, e.g. Beijing, Shanghai"
                    },
                    "unit": {
                        "type": "string",
                        "enum": ["celsius", "fahrenheit"],
                        "description": "Temperature unit"
                    }
                },
                "required": ["location"]
            }
        },
        {
            "name": "calculator",
            "description": "Perform a basic arithmetic operation",
            "parameters": {
                "type": "object",
                "properties": {
                    "x": { "type": "number", "description": "First operand" },
                    "y": { "type": "number", "description": "Second operand" },
                    "operation": {
                        "type": "string",
                        "enum": [
                            Operation::Add.symbol(),
                            Operation::Subtract.symbol(),
                            Operation::Multiply.symbol(),
                            Operation::Divide.symbol()
                        ],
                        "description": "Operation to apply"
                    }
                },
                "required": ["x", "y", "operation"]
            }
        },
        {
            "name": "get_recent_orders",
            "description": "Get a user's recent orders",
            "parameters": {
                "type": "object",
                "properties": {
                    "user_id": { "type": "string", "description": "User ID" },
                    "months": {
                        "type": "integer",
                        "description": "How many months to look back",
                        "default": 3
                    }
                },
                "required": ["user_id"]
            }
        },
        {
            "name": "create_custom_package",
            "description": "Create a custom subscription package",
            "parameters": {
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Package name" },
                    "duration": {
                        "type": "integer",
                        "description": "Duration in months",
                        "default": 1
                    },
                    "features": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Features included in the package"
                    },
                    "price": { "type": "number", "description": "Package price" }
                },
                "required": ["name"]
            }
        },
        {
            "name": "calculate_qps",
            "description": "Get QPS statistics for a recent time window",
            "parameters": {
                "type": "object",
                "properties": {
                    "time_window_minutes": {
                        "type": "integer",
                        "description": "Time window in minutes"
                    },
                    "data_points": {
                        "type": "integer",
                        "description": "Number of data points to return",
                        "default": 10
                    }
                },
                "required": ["time_window_minutes"]
            }
        }
    ])
}
