//! Monte Carlo checks of the analytic formulas.
//!
//! Single-target goals and lone seeds are exact: the simulated mean must sit
//! within 15% of the analytic expectation. The multi-target methods apply
//! empirical penalty factors on top of plain independence, so their
//! divergence from an independent-draw simulation is pinned down here too.

use craftodds::{Catalog, Method, OddsEngine, OddsError, ProbabilityResult, Query, SimConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

const TOLERANCE: f64 = 0.15;

/// Large weights keep the success rates high enough for fast runs.
const SIM_CATALOG: &str = r#"{
    "pools": { "primary": 50000, "secondary": 45000 },
    "attributes": [
        {
            "name": "Life",
            "category": "primary",
            "seedable": true,
            "tiers": [{ "label": "T1", "weight": 5000, "min_level": 1, "value_range": [80, 99] }]
        },
        {
            "name": "Rare Life",
            "category": "primary",
            "tiers": [{ "label": "T1", "weight": 100, "min_level": 1, "value_range": [100, 120] }]
        },
        {
            "name": "Speed",
            "category": "secondary",
            "tiers": [{ "label": "T1", "weight": 4500, "min_level": 1, "value_range": [10, 15] }]
        },
        {
            "name": "Crit",
            "category": "secondary",
            "tiers": [{ "label": "T1", "weight": 9000, "min_level": 1, "value_range": [20, 30] }]
        }
    ]
}"#;

fn calculate(catalog: &Catalog, targets: &[&str], method: Method) -> ProbabilityResult {
    OddsEngine::new(catalog)
        .calculate_probability(&Query::new(targets, "any", 86, method))
        .unwrap()
}

fn relative_error(simulated: f64, analytic: f64) -> f64 {
    (simulated - analytic).abs() / analytic
}

// =========================================================================
// Exact cases
// =========================================================================

#[test]
fn test_single_target_matches_analytic_mean() {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let engine = OddsEngine::new(&catalog);
    let config = SimConfig::default().with_seed(42);

    for method in [Method::BroadReroll, Method::ProgressiveBuild] {
        let result = calculate(&catalog, &["Life"], method);
        let analytic = result.expected_attempts.finite().unwrap();
        assert!((analytic - 10.0).abs() < 1e-9);

        let sim = engine.simulate(&result, &config).unwrap();
        assert_eq!(sim.simulation_count, 10_000);
        assert!(
            relative_error(sim.attempts.mean, analytic) < TOLERANCE,
            "{method}: simulated {} vs analytic {analytic}",
            sim.attempts.mean
        );
    }
}

#[test]
fn test_hand_rolled_draws_agree_with_simulator() {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let result = calculate(&catalog, &["Speed", "Crit"], Method::BroadReroll);
    let p = result.combined_probability;

    // Plain geometric draws against the same probability, outside the engine
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let trials = 5_000;
    let total: u64 = (0..trials)
        .map(|_| (1..).find(|_| rng.gen::<f64>() < p).unwrap_or(0) as u64)
        .sum();
    let hand_mean = total as f64 / trials as f64;

    let sim = OddsEngine::new(&catalog)
        .simulate(&result, &SimConfig::default().with_seed(11))
        .unwrap();
    assert!(relative_error(sim.attempts.mean, hand_mean) < TOLERANCE);
}

#[test]
fn test_rare_target_matches_analytic_mean() {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let result = calculate(&catalog, &["Rare Life"], Method::BroadReroll);
    let analytic = result.expected_attempts.finite().unwrap();
    assert!((analytic - 500.0).abs() < 1e-6);

    let sim = OddsEngine::new(&catalog)
        .simulate(&result, &SimConfig::default().with_seed(7))
        .unwrap();
    assert!(relative_error(sim.attempts.mean, analytic) < TOLERANCE);
    assert!(!sim.truncated);
    // Cost sample is the attempt sample scaled by the method's base cost
    assert!((sim.cost.mean - sim.attempts.mean * 5.0).abs() < 1e-6);
}

#[test]
fn test_lone_seed_always_succeeds_first_try() {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let result = calculate(&catalog, &["Life"], Method::GuaranteedSeed);
    assert_eq!(result.combined_probability, 1.0);

    let engine = OddsEngine::new(&catalog);
    let config = SimConfig::quick().with_seed(1);
    for sim in [
        engine.simulate(&result, &config).unwrap(),
        engine.simulate_independent(&result, &config).unwrap(),
    ] {
        assert_eq!(sim.success_rate, 1.0);
        assert_eq!(sim.attempts.mean, 1.0);
        assert_eq!(sim.attempts.max, 1.0);
    }
}

#[test]
fn test_simulated_percentiles_are_ordered() {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let result = calculate(&catalog, &["Speed"], Method::BroadReroll);
    let sim = OddsEngine::new(&catalog)
        .simulate(&result, &SimConfig::quick().with_seed(3))
        .unwrap();

    let p = &sim.attempts.percentiles;
    assert!(sim.attempts.min <= p.p10);
    assert!(p.p10 <= p.p25 && p.p25 <= sim.attempts.median);
    assert!(sim.attempts.median <= p.p75 && p.p75 <= p.p90 && p.p90 <= p.p95);
    assert!(p.p95 <= sim.attempts.max);
}

// =========================================================================
// Penalty variants diverge from independent draws
// =========================================================================

/// Independent draws of two 10% attributes succeed 1% of the time. Each
/// penalised method claims a lower rate; the ratio of means measures the
/// penalty.
fn independent_over_analytic(method: Method) -> f64 {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let result = calculate(&catalog, &["Life", "Speed"], method);
    let analytic = result.expected_attempts.finite().unwrap();
    let sim = OddsEngine::new(&catalog)
        .simulate_independent(&result, &SimConfig::default().with_seed(99))
        .unwrap();
    analytic / sim.attempts.mean
}

#[test]
fn test_broad_reroll_pair_is_n_squared_pessimistic() {
    // 0.01 under independence, 0.01 / 2² analytically
    let ratio = independent_over_analytic(Method::BroadReroll);
    assert!(relative_error(ratio, 4.0) < TOLERANCE, "ratio {ratio}");
}

#[test]
fn test_progressive_pair_is_half_of_independence() {
    let ratio = independent_over_analytic(Method::ProgressiveBuild);
    assert!(relative_error(ratio, 2.0) < TOLERANCE, "ratio {ratio}");
}

#[test]
fn test_weight_biased_pair_divergence() {
    // Independent draws use the 1.2x boosted weights: 0.12² = 0.0144.
    // Analytic: (0.2 · 0.2) · 0.15 / 2 = 0.003.
    let ratio = independent_over_analytic(Method::WeightBiased);
    assert!(relative_error(ratio, 4.8) < TOLERANCE, "ratio {ratio}");
}

#[test]
fn test_seed_with_secondary_matches_its_penalty() {
    // Life is seeded for free; Speed draws at 10% and the method keeps 20% of that.
    let ratio = independent_over_analytic(Method::GuaranteedSeed);
    assert!(relative_error(ratio, 5.0) < TOLERANCE, "ratio {ratio}");
}

// =========================================================================
// Configuration and budgets
// =========================================================================

#[test]
fn test_seeded_runs_are_reproducible() {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let result = calculate(&catalog, &["Crit"], Method::WeightBiased);
    let engine = OddsEngine::new(&catalog);

    let config = SimConfig::default().with_trials(2500).with_seed(1234);
    let parallel = engine.simulate(&result, &config).unwrap();
    let sequential = engine.simulate(&result, &config.clone().sequential()).unwrap();
    assert_eq!(parallel.attempts, sequential.attempts);
    assert_eq!(parallel.successes, sequential.successes);
}

#[test]
fn test_unreachable_goal_cannot_be_simulated() {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let result = OddsEngine::new(&catalog)
        .calculate_probability(
            &Query::new(&["Life", "Nope"], "any", 86, Method::BroadReroll).skip_unresolved(),
        )
        .unwrap();
    // Only Life resolved, so the goal is still reachable
    assert!(result.is_achievable());

    let all_missing = OddsEngine::new(&catalog)
        .calculate_probability(&Query::new(&["Nope"], "any", 86, Method::BroadReroll).skip_unresolved())
        .unwrap();
    let err = OddsEngine::new(&catalog)
        .simulate(&all_missing, &SimConfig::quick())
        .unwrap_err();
    assert!(matches!(err, OddsError::InvalidProbability(p) if p == 0.0));
}

#[test]
fn test_exhausted_time_budget_reports_no_trials() {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let result = calculate(&catalog, &["Life"], Method::BroadReroll);
    let config = SimConfig::default().with_time_budget(Duration::ZERO);
    let err = OddsEngine::new(&catalog).simulate(&result, &config).unwrap_err();
    assert!(matches!(err, OddsError::NoSuccessfulTrials { trials: 0 }));
}

#[test]
fn test_time_budget_returns_partial_result() {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let result = calculate(&catalog, &["Life"], Method::BroadReroll);
    // Far more trials than can finish in the budget
    let requested = 10_000_000;
    let config = SimConfig::default()
        .with_trials(requested)
        .with_seed(21)
        .with_time_budget(Duration::from_millis(25))
        .sequential();

    let sim = OddsEngine::new(&catalog).simulate(&result, &config).unwrap();
    assert!(sim.truncated);
    assert_eq!(sim.requested_trials, requested);
    assert!(sim.simulation_count > 0 && sim.simulation_count < requested);
    assert!(sim.successes <= sim.simulation_count);
    assert_eq!(
        sim.success_rate,
        sim.successes as f64 / sim.simulation_count as f64
    );
}

#[test]
fn test_report_mentions_deviation() {
    let catalog = Catalog::from_json(SIM_CATALOG).unwrap();
    let result = calculate(&catalog, &["Life"], Method::BroadReroll);
    let sim = OddsEngine::new(&catalog)
        .simulate(&result, &SimConfig::quick().with_seed(5))
        .unwrap();
    let deviation = sim.deviation_from(result.expected_attempts).unwrap();
    assert!(deviation.abs() < TOLERANCE);
    assert!(sim.to_text().contains("SIMULATION REPORT"));
    assert!(sim.to_json().contains("\"simulation_count\": 1000"));
}
