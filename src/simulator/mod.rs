//! Monte Carlo validation of the analytic formulas.
//!
//! Runs many independent trials, each drawing until success or the draw
//! cap, and summarises attempts and cost. Results are kept separate from
//! the analytic `ProbabilityResult` they are checked against.

mod config;
mod report;
mod runner;
mod stats;

pub use config::SimConfig;
pub use report::SimulationResult;
pub use runner::{simulate, simulate_independent};
pub use stats::{Percentiles, SampleSummary};
