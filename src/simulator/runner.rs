//! Monte Carlo trial runner.
//!
//! Trials are grouped into fixed-size chunks. Each chunk owns a ChaCha RNG
//! seeded from the run seed plus its index, so a seeded run produces the
//! same samples whether chunks run sequentially or on the rayon pool.

use super::config::SimConfig;
use super::report::SimulationResult;
use super::stats::SampleSummary;
use crate::core::constants::TRIALS_PER_CHUNK;
use crate::error::{OddsError, Result};
use crate::methods::Method;
use crate::probability::ProbabilityResult;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Simulate repeated attempts against the combined probability.
pub fn simulate(result: &ProbabilityResult, config: &SimConfig) -> Result<SimulationResult> {
    let p = achievable_probability(result)?;
    run_trials(config, result.method, move |rng| rng.gen::<f64>() < p)
}

/// Simulate attempts where every resolved target rolls independently
/// against its own per-attribute probability, succeeding only when all
/// hit together. No combination penalty is applied, which makes this the
/// reference for how far a method's combined formula strays from plain
/// independence.
pub fn simulate_independent(
    result: &ProbabilityResult,
    config: &SimConfig,
) -> Result<SimulationResult> {
    // An impossible goal stays impossible even with nothing left to draw.
    achievable_probability(result)?;

    let probabilities: Vec<f64> = result
        .resolved
        .iter()
        .map(|a| {
            result
                .individual_probabilities
                .get(&a.name)
                .copied()
                .unwrap_or(0.0)
        })
        .collect();

    if let Some(&bad) = probabilities.iter().find(|p| p.is_nan() || **p <= 0.0) {
        return Err(OddsError::InvalidProbability(bad));
    }

    run_trials(config, result.method, move |rng| {
        probabilities.iter().all(|p| rng.gen::<f64>() < *p)
    })
}

/// Combined probability of `result`, rejected unless it is positive.
fn achievable_probability(result: &ProbabilityResult) -> Result<f64> {
    let p = result.combined_probability;
    if p.is_nan() || p <= 0.0 {
        return Err(OddsError::InvalidProbability(p));
    }
    Ok(p)
}

/// Outcome of one chunk of trials.
struct ChunkOutcome {
    completed: u32,
    attempts: Vec<u32>,
    truncated: bool,
}

fn run_trials<F>(config: &SimConfig, method: Method, attempt: F) -> Result<SimulationResult>
where
    F: Fn(&mut ChaCha8Rng) -> bool + Sync,
{
    let base_seed = config.seed.unwrap_or_else(rand::random);
    let deadline = config.time_budget.map(|budget| Instant::now() + budget);
    let chunk_count = config.trials.div_ceil(TRIALS_PER_CHUNK);

    let run_indexed = |index: u32| {
        let size = TRIALS_PER_CHUNK.min(config.trials - index * TRIALS_PER_CHUNK);
        let mut rng = ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(index as u64));
        run_chunk(size, config.max_draws_per_trial, deadline, &mut rng, &attempt)
    };

    let chunks: Vec<ChunkOutcome> = if config.parallel {
        (0..chunk_count).into_par_iter().map(run_indexed).collect()
    } else {
        (0..chunk_count).map(run_indexed).collect()
    };

    let simulation_count: u32 = chunks.iter().map(|c| c.completed).sum();
    let truncated = chunks.iter().any(|c| c.truncated);
    let attempts: Vec<f64> = chunks
        .iter()
        .flat_map(|c| c.attempts.iter().map(|&a| a as f64))
        .collect();

    debug!(
        chunks = chunk_count,
        simulation_count,
        successes = attempts.len(),
        "simulation chunks reduced"
    );

    let attempt_summary = SampleSummary::from_samples(&attempts).ok_or(
        OddsError::NoSuccessfulTrials {
            trials: simulation_count,
        },
    )?;

    let base_cost = method.base_cost();
    let costs: Vec<f64> = attempts.iter().map(|a| a * base_cost).collect();
    let cost_summary = SampleSummary::from_samples(&costs).ok_or(
        OddsError::NoSuccessfulTrials {
            trials: simulation_count,
        },
    )?;

    let successes = attempts.len() as u32;
    if truncated {
        info!(
            requested = config.trials,
            completed = simulation_count,
            "simulation stopped early by time budget"
        );
    } else {
        info!(trials = simulation_count, successes, "simulation complete");
    }

    Ok(SimulationResult {
        method,
        requested_trials: config.trials,
        simulation_count,
        successes,
        success_rate: successes as f64 / simulation_count as f64,
        truncated,
        attempts: attempt_summary,
        cost: cost_summary,
    })
}

fn run_chunk<F>(
    size: u32,
    max_draws: u32,
    deadline: Option<Instant>,
    rng: &mut ChaCha8Rng,
    attempt: &F,
) -> ChunkOutcome
where
    F: Fn(&mut ChaCha8Rng) -> bool,
{
    let mut outcome = ChunkOutcome {
        completed: 0,
        attempts: Vec::new(),
        truncated: false,
    };

    for _ in 0..size {
        if deadline.is_some_and(|d| Instant::now() >= d) {
            outcome.truncated = true;
            break;
        }

        outcome.completed += 1;
        if let Some(draws) = (1..=max_draws).find(|_| attempt(rng)) {
            outcome.attempts.push(draws);
        }
    }

    outcome
}
