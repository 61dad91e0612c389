//! Mock function handlers
//!
//! Stateless formatters behind the function router. None of them talk to a
//! real backend.

mod calculator;
mod orders;
mod packages;
mod weather;

pub use calculator::*;
pub use orders::*;
pub use packages::*;
pub use weather::*;
