use crate::core::constants::{COST_STDDEV_SCALE, PESSIMISTIC_STDDEVS, Z_90};
use crate::core::Bounded;
use crate::methods::Method;
use serde::Serialize;

/// Spread of total cost for a finite expected attempt count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostDistribution {
    pub base_cost: f64,
    pub expected: f64,
    pub std_dev: f64,
    /// Lower edge of the 90% range, floored at 0.
    pub p05: f64,
    /// Upper edge of the 90% range.
    pub p95: f64,
    pub optimistic: f64,
    pub pessimistic: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CostEstimate {
    Finite(CostDistribution),
    /// The target can never be hit, so no amount of spending is enough.
    Unbounded { base_cost: f64 },
}

impl CostEstimate {
    pub fn base_cost(&self) -> f64 {
        match self {
            CostEstimate::Finite(d) => d.base_cost,
            CostEstimate::Unbounded { base_cost } => *base_cost,
        }
    }

    pub fn expected(&self) -> Bounded {
        match self {
            CostEstimate::Finite(d) => Bounded::Finite(d.expected),
            CostEstimate::Unbounded { .. } => Bounded::Unbounded,
        }
    }

    pub fn distribution(&self) -> Option<&CostDistribution> {
        match self {
            CostEstimate::Finite(d) => Some(d),
            CostEstimate::Unbounded { .. } => None,
        }
    }
}

/// Cost spread for `expected_attempts` attempts of `method`.
pub fn estimate_cost(method: Method, expected_attempts: Bounded) -> CostEstimate {
    let base_cost = method.base_cost();
    let attempts = match expected_attempts {
        Bounded::Finite(a) => a,
        Bounded::Unbounded => return CostEstimate::Unbounded { base_cost },
    };

    let expected = attempts * base_cost;
    let std_dev = expected * COST_STDDEV_SCALE * method.variance_factor();

    CostEstimate::Finite(CostDistribution {
        base_cost,
        expected,
        std_dev,
        p05: (expected - Z_90 * std_dev).max(0.0),
        p95: expected + Z_90 * std_dev,
        optimistic: base_cost.max(expected - std_dev),
        pessimistic: expected + PESSIMISTIC_STDDEVS * std_dev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broad_reroll_cost_for_500_attempts() {
        let estimate = estimate_cost(Method::BroadReroll, Bounded::Finite(500.0));
        let d = estimate.distribution().unwrap();
        assert!((d.expected - 2500.0).abs() < 1e-9);
        // 2500 * 0.5 * 1.5
        assert!((d.std_dev - 1875.0).abs() < 1e-9);
        assert_eq!(d.p05, 0.0);
        assert!((d.p95 - (2500.0 + 1.645 * 1875.0)).abs() < 1e-9);
        assert!((d.pessimistic - 6250.0).abs() < 1e-9);
        assert!((d.optimistic - 625.0).abs() < 1e-9);
    }

    #[test]
    fn test_optimistic_never_below_one_attempt() {
        let estimate = estimate_cost(Method::GuaranteedSeed, Bounded::Finite(1.0));
        let d = estimate.distribution().unwrap();
        // expected 8 - stddev 5.2 = 2.8 < base cost 8
        assert!((d.optimistic - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_unbounded_short_circuits() {
        let estimate = estimate_cost(Method::WeightBiased, Bounded::Unbounded);
        assert_eq!(estimate, CostEstimate::Unbounded { base_cost: 6.0 });
        assert!(estimate.expected().is_unbounded());
        assert!(estimate.distribution().is_none());
    }

    #[test]
    fn test_estimate_is_deterministic() {
        for method in Method::ALL {
            let a = estimate_cost(method, Bounded::Finite(123.4));
            let b = estimate_cost(method, Bounded::Finite(123.4));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_serialize_unbounded_tagged() {
        let json = serde_json::to_string(&estimate_cost(Method::BroadReroll, Bounded::Unbounded))
            .unwrap();
        assert!(json.contains("\"kind\":\"unbounded\""));
    }
}
