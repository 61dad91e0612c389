//! Mock order history

use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulatorResult};
use crate::qps::{Clock, SharedClock};

#[derive(Debug, Clone, Deserialize)]
pub struct OrderParams {
    pub user_id: String,
    #[serde(default = "default_months")]
    pub months: i64,
}

fn default_months() -> i64 {
    3
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    pub date: String,
    pub product: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub user_id: String,
    pub period: String,
    pub total_orders: usize,
    pub orders: Vec<OrderItem>,
}

/// Serves three fabricated orders for any user
pub struct OrderService {
    clock: SharedClock,
}

impl OrderService {
    pub fn new(clock: SharedClock) -> Self {
        Self { clock }
    }

    pub fn recent_orders(&self, params: OrderParams) -> SimulatorResult<OrderResponse> {
        let user_id = params.user_id.trim();
        if user_id.is_empty() {
            return Err(SimulationError::invalid_argument("user_id", "user_id is required"));
        }
        if params.months <= 0 {
            return Err(SimulationError::invalid_argument(
                "months",
                format!("months must be positive, got {}", params.months),
            ));
        }

        let date = self.clock.now().format("%Y-%m-%dT%H:%M:%S").to_string();
        let orders: Vec<OrderItem> = (1..=3u32)
            .map(|i| {
                let price = 10.0 * i as f64;
                OrderItem {
                    order_id: format!("ORD-{}", i),
                    date: date.clone(),
                    product: format!("Product {}", i),
                    quantity: i,
                    price,
                    total: price * i as f64,
                    status: "completed".to_string(),
                }
            })
            .collect();

        Ok(OrderResponse {
            user_id: user_id.to_string(),
            period: format!("Last {} months", params.months),
            total_orders: orders.len(),
            orders,
        })
    }
}
