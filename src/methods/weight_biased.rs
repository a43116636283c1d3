use super::{independent_product, CombinationRule};
use crate::catalog::PoolTotals;
use crate::core::constants::{WEIGHT_BIAS_FACTOR, WEIGHT_BIAS_PENALTY};
use crate::resolver::ResolvedAttribute;

/// Reroll with the targeted attributes' weights boosted. Gentler penalty
/// than a plain reroll since fewer unwanted attributes compete.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightBiased;

impl CombinationRule for WeightBiased {
    fn combine(&self, attributes: &[ResolvedAttribute], pools: &PoolTotals) -> f64 {
        let n = attributes.len() as f64;
        independent_product(attributes, pools, WEIGHT_BIAS_FACTOR) * WEIGHT_BIAS_PENALTY / n
    }
}
