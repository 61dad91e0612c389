//! Basic arithmetic

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::error::{SimulationError, SimulatorResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl FromStr for Operation {
    type Err = SimulationError;

    /// Accepts symbols, English words and the Chinese operation names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "add" | "plus" | "加" => Ok(Self::Add),
            "-" | "subtract" | "minus" | "减" => Ok(Self::Subtract),
            "*" | "x" | "multiply" | "times" | "乘" => Ok(Self::Multiply),
            "/" | "divide" | "div" | "除" => Ok(Self::Divide),
            _ => Err(SimulationError::invalid_argument(
                "operation",
                format!("unsupported operation: {}", s),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalculationParams {
    pub operation: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub operation: String,
    pub x: f64,
    pub y: f64,
    pub result: f64,
}

pub struct CalculatorService;

impl CalculatorService {
    pub fn calculate(params: CalculationParams) -> SimulatorResult<CalculationResponse> {
        let op: Operation = params.operation.parse()?;
        let (x, y) = (params.x, params.y);

        let result = match op {
            Operation::Add => x + y,
            Operation::Subtract => x - y,
            Operation::Multiply => x * y,
            Operation::Divide => {
                if y == 0.0 {
                    return Err(SimulationError::invalid_argument("y", "division by zero"));
                }
                x / y
            }
        };

        if !result.is_finite() {
            return Err(SimulationError::invalid_argument("x", "result is not a finite number"));
        }

        Ok(CalculationResponse {
            operation: op.symbol().to_string(),
            x,
            y,
            result,
        })
    }
}
