//! Cost and attempt-count estimates derived from a combined probability.

mod confidence;
mod cost;

pub use confidence::{confidence_interval, ConfidenceInterval};
pub use cost::{estimate_cost, CostDistribution, CostEstimate};
