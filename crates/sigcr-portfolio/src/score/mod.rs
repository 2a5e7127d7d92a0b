//! Resilience score and exposure aggregates.

mod exposure;
mod resilience;

pub use exposure::*;
pub use resilience::*;
