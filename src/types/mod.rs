//! Shared data types
//!
//! Response types for the QPS generator. The per-function response types
//! live next to their services.

mod series;

pub use series::*;
