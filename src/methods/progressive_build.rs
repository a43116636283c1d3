use super::{independent_product, CombinationRule};
use crate::catalog::PoolTotals;
use crate::core::constants::{
    PROGRESSIVE_COMPLETION_FACTOR, PROGRESSIVE_MAX_TARGETS, PROGRESSIVE_OVERFLOW_PROBABILITY,
};
use crate::resolver::ResolvedAttribute;

/// Roll a near-blank item until one target lands, then add a second.
/// Only one or two targets are modelled; beyond that the method is
/// impractical and gets a fixed floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressiveBuild;

impl CombinationRule for ProgressiveBuild {
    fn combine(&self, attributes: &[ResolvedAttribute], pools: &PoolTotals) -> f64 {
        if attributes.len() > PROGRESSIVE_MAX_TARGETS {
            return PROGRESSIVE_OVERFLOW_PROBABILITY;
        }

        let product = independent_product(attributes, pools, 1.0);
        if attributes.len() == PROGRESSIVE_MAX_TARGETS {
            product * PROGRESSIVE_COMPLETION_FACTOR
        } else {
            product
        }
    }
}
