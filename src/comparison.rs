//! Side-by-side scoring of every method for one goal and budget.

use crate::catalog::Catalog;
use crate::core::constants::{
    COMPARE_BUDGET_WEIGHT, COMPARE_PRIOR_WEIGHT, COMPARE_PROBABILITY_WEIGHT, DEFAULT_METHOD_PRIOR,
};
use crate::core::Bounded;
use crate::error::Result;
use crate::methods::Method;
use crate::probability::{ProbabilityCalculator, Query};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodAssessment {
    pub method: Method,
    pub probability: f64,
    pub expected_attempts: Bounded,
    pub expected_cost: Bounded,
    pub prior: f64,
    pub budget_fit: f64,
    pub within_budget: bool,
    pub score: f64,
}

/// How comfortably `cost` fits in `budget`, in [0, 1].
pub fn budget_fit(cost: Bounded, budget: f64) -> f64 {
    match cost {
        Bounded::Finite(cost) if budget > 0.0 => (1.0 - cost / budget).clamp(0.0, 1.0),
        _ => 0.0,
    }
}

/// Price the goal under every method and rank them, best first.
///
/// `priors` holds observed per-method success rates; missing methods use a
/// neutral 0.5. Unresolvable targets fail the comparison.
pub fn compare_methods<S: AsRef<str>>(
    catalog: &Catalog,
    targets: &[S],
    base_type: &str,
    min_level: u32,
    budget: f64,
    priors: &HashMap<Method, f64>,
) -> Result<Vec<MethodAssessment>> {
    let calculator = ProbabilityCalculator::new(catalog);
    let query = Query::new(targets, base_type, min_level, Method::BroadReroll);

    let mut assessments = Method::ALL
        .into_iter()
        .map(|method| {
            let result = calculator.calculate(&query.with_method(method))?;
            let expected_cost = result.cost.expected();
            let prior = priors
                .get(&method)
                .copied()
                .unwrap_or(DEFAULT_METHOD_PRIOR)
                .clamp(0.0, 1.0);
            let fit = budget_fit(expected_cost, budget);
            let score = COMPARE_PROBABILITY_WEIGHT * result.combined_probability
                + COMPARE_BUDGET_WEIGHT * fit
                + COMPARE_PRIOR_WEIGHT * prior;

            Ok(MethodAssessment {
                method,
                probability: result.combined_probability,
                expected_attempts: result.expected_attempts,
                expected_cost,
                prior,
                budget_fit: fit,
                within_budget: expected_cost.finite().is_some_and(|c| c <= budget),
                score,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable sort keeps declaration order among ties.
    assessments.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(best) = assessments.first() {
        debug!(method = %best.method, score = best.score, budget, "compared methods");
    }
    Ok(assessments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OddsError;

    #[test]
    fn test_budget_fit() {
        assert_eq!(budget_fit(Bounded::Finite(250.0), 1000.0), 0.75);
        assert_eq!(budget_fit(Bounded::Finite(5000.0), 1000.0), 0.0);
        assert_eq!(budget_fit(Bounded::Finite(10.0), 0.0), 0.0);
        assert_eq!(budget_fit(Bounded::Unbounded, 1000.0), 0.0);
    }

    #[test]
    fn test_compare_returns_every_method_sorted() {
        let catalog = Catalog::builtin();
        let ranked = compare_methods(
            &catalog,
            &["Maximum Life"],
            "body_armour",
            86,
            5000.0,
            &HashMap::new(),
        )
        .unwrap();

        assert_eq!(ranked.len(), 4);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        // Seeding a lone seedable target is certain and costs 8
        assert_eq!(ranked[0].method, Method::GuaranteedSeed);
        assert!(ranked[0].within_budget);
    }

    #[test]
    fn test_priors_shift_the_ranking() {
        let catalog = Catalog::builtin();
        let mut priors = HashMap::new();
        priors.insert(Method::WeightBiased, 1.0);
        priors.insert(Method::GuaranteedSeed, 0.0);
        let ranked = compare_methods(
            &catalog,
            &["Attack Speed"],
            "weapon",
            86,
            10.0,
            &priors,
        )
        .unwrap();
        assert_eq!(ranked[0].method, Method::WeightBiased);
        assert_eq!(ranked[0].prior, 1.0);
    }

    #[test]
    fn test_unreachable_goal_is_never_within_budget() {
        let catalog = Catalog::builtin();
        let targets = [
            "Fire Resistance",
            "Cold Resistance",
            "Lightning Resistance",
            "Attack Speed",
        ];
        let ranked =
            compare_methods(&catalog, &targets, "ring", 86, 1e12, &HashMap::new()).unwrap();
        for a in ranked {
            assert!(!a.within_budget);
            assert_eq!(a.budget_fit, 0.0);
            assert!((a.score - COMPARE_PRIOR_WEIGHT * DEFAULT_METHOD_PRIOR).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unknown_target_fails() {
        let catalog = Catalog::builtin();
        let err = compare_methods(&catalog, &["Nope"], "ring", 86, 100.0, &HashMap::new())
            .unwrap_err();
        assert!(matches!(err, OddsError::UnknownAttribute(_)));
    }
}
