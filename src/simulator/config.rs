//! Simulation configuration.

use crate::core::constants::{DEFAULT_TRIAL_COUNT, MAX_DRAWS_PER_TRIAL};
use std::time::Duration;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent trials to run
    pub trials: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Wall-clock budget; the run stops early and reports a partial result
    pub time_budget: Option<Duration>,

    /// Fan trial chunks out over the rayon pool
    pub parallel: bool,

    /// Draws per trial before giving up on it
    pub max_draws_per_trial: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIAL_COUNT,
            seed: None,
            time_budget: None,
            parallel: true,
            max_draws_per_trial: MAX_DRAWS_PER_TRIAL,
        }
    }
}

impl SimConfig {
    /// Small run for a fast sanity check
    pub fn quick() -> Self {
        Self {
            trials: 1_000,
            ..Default::default()
        }
    }

    /// Large run for tight estimates
    pub fn thorough() -> Self {
        Self {
            trials: 100_000,
            ..Default::default()
        }
    }

    pub fn with_trials(mut self, trials: u32) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
