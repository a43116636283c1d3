use super::{independent_product, CombinationRule};
use crate::catalog::PoolTotals;
use crate::core::constants::BROAD_REROLL_PENALTY;
use crate::resolver::ResolvedAttribute;

/// Every attribute rerolls at once. The chance of hitting each target is
/// treated as independent, then penalised by 1/n² for the odds of the
/// remaining slots not crowding them out.
#[derive(Debug, Clone, Copy, Default)]
pub struct BroadReroll;

impl CombinationRule for BroadReroll {
    fn combine(&self, attributes: &[ResolvedAttribute], pools: &PoolTotals) -> f64 {
        let n = attributes.len() as f64;
        independent_product(attributes, pools, 1.0) * BROAD_REROLL_PENALTY / (n * n)
    }
}
