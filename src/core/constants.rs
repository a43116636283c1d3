//! Empirical constants shared by the calculator, estimators and simulator.
//!
//! The combination factors are fitted values, not derived combinatorics.
//! Change one here and the whole pipeline follows.

// =============================================================================
// POOLS & SLOTS
// =============================================================================

/// Approximate total weight of every primary-category attribute.
pub const PRIMARY_POOL_WEIGHT: f64 = 50_000.0;

/// Approximate total weight of every secondary-category attribute.
pub const SECONDARY_POOL_WEIGHT: f64 = 45_000.0;

/// An item holds at most this many attributes of one category.
pub const MAX_ATTRIBUTES_PER_CATEGORY: usize = 3;

// =============================================================================
// COMBINATION FACTORS
// =============================================================================

/// Broad reroll penalty numerator: combined *= this / n².
pub const BROAD_REROLL_PENALTY: f64 = 1.0;

/// Progressive build only handles pairs; the second step lands with this factor.
pub const PROGRESSIVE_COMPLETION_FACTOR: f64 = 0.5;

/// Fixed probability for progressive build with more than two targets.
pub const PROGRESSIVE_OVERFLOW_PROBABILITY: f64 = 0.001;

/// Largest target count progressive build models.
pub const PROGRESSIVE_MAX_TARGETS: usize = 2;

/// Guaranteed seed penalty numerator over the remaining random attributes.
pub const SEED_REMAINING_PENALTY: f64 = 0.2;

/// Ceiling when more than one target is seedable at once.
pub const SEED_MULTIPLE_CAP: f64 = 0.1;

/// Weight-biased methods roughly double the weight of targeted attributes.
pub const WEIGHT_BIAS_FACTOR: f64 = 2.0;

/// Weight-biased penalty numerator: combined *= this / n.
pub const WEIGHT_BIAS_PENALTY: f64 = 0.15;

/// Per-attribute weight multiplier applied by weight-biased methods.
pub const WEIGHT_BIAS_METHOD_MULTIPLIER: f64 = 1.2;

// =============================================================================
// COSTS
// =============================================================================

pub const BROAD_REROLL_BASE_COST: f64 = 5.0;
pub const PROGRESSIVE_BUILD_BASE_COST: f64 = 2.0;
pub const GUARANTEED_SEED_BASE_COST: f64 = 8.0;
pub const WEIGHT_BIASED_BASE_COST: f64 = 6.0;

pub const BROAD_REROLL_VARIANCE: f64 = 1.5;
pub const PROGRESSIVE_BUILD_VARIANCE: f64 = 2.0;
pub const GUARANTEED_SEED_VARIANCE: f64 = 1.3;
pub const WEIGHT_BIASED_VARIANCE: f64 = 1.4;

/// stddev = expected * COST_STDDEV_SCALE * variance factor
pub const COST_STDDEV_SCALE: f64 = 0.5;

/// z-score bounding a two-sided 90% range.
pub const Z_90: f64 = 1.645;

/// z-score bounding a two-sided 95% range.
pub const Z_95: f64 = 1.96;

/// Pessimistic cost sits this many standard deviations above expected.
pub const PESSIMISTIC_STDDEVS: f64 = 2.0;

// =============================================================================
// ATTEMPT ESTIMATES
// =============================================================================

/// Best case = max(1, floor(expected * BEST_CASE_FRACTION)).
pub const BEST_CASE_FRACTION: f64 = 0.1;

/// Worst case = floor(expected * WORST_CASE_MULTIPLE).
pub const WORST_CASE_MULTIPLE: f64 = 5.0;

// =============================================================================
// SIMULATION
// =============================================================================

/// A single trial gives up after this many draws.
pub const MAX_DRAWS_PER_TRIAL: u32 = 10_000;

pub const DEFAULT_TRIAL_COUNT: u32 = 10_000;

/// Trials per RNG chunk. Chunk seeds are derived from the run seed, so seeded
/// results are identical in sequential and parallel mode.
pub const TRIALS_PER_CHUNK: u32 = 1_000;

// =============================================================================
// METHOD COMPARISON
// =============================================================================

pub const COMPARE_PROBABILITY_WEIGHT: f64 = 0.4;
pub const COMPARE_BUDGET_WEIGHT: f64 = 0.3;
pub const COMPARE_PRIOR_WEIGHT: f64 = 0.3;

/// Prior success rate assumed for a method the caller has no history for.
pub const DEFAULT_METHOD_PRIOR: f64 = 0.5;
