use super::{independent_product, CombinationRule};
use crate::catalog::PoolTotals;
use crate::core::constants::{SEED_MULTIPLE_CAP, SEED_REMAINING_PENALTY};
use crate::resolver::ResolvedAttribute;

/// One seedable attribute is forced onto the item; everything else rolls.
/// A single seed can only force one attribute, so asking for two seedables
/// at once is capped.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuaranteedSeed;

impl CombinationRule for GuaranteedSeed {
    fn combine(&self, attributes: &[ResolvedAttribute], pools: &PoolTotals) -> f64 {
        let (seeded, remaining): (Vec<_>, Vec<_>) =
            attributes.iter().partition(|a| a.seedable);

        let probability = if remaining.is_empty() {
            1.0
        } else {
            independent_product(remaining.iter().copied(), pools, 1.0) * SEED_REMAINING_PENALTY
                / remaining.len() as f64
        };

        if seeded.len() > 1 {
            probability.min(SEED_MULTIPLE_CAP)
        } else {
            probability
        }
    }

    fn individual_probability(&self, attribute: &ResolvedAttribute, pools: &PoolTotals) -> f64 {
        if attribute.seedable {
            1.0
        } else {
            super::pool_share(attribute.effective_weight, attribute.category, pools)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::methods::test_support::{attr, seedable};

    #[test]
    fn test_lone_seed_is_certain() {
        let pools = PoolTotals::default();
        let p = GuaranteedSeed.combine(&[seedable("Life", Category::Primary, 100.0)], &pools);
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_seed_plus_one_random() {
        let pools = PoolTotals::default();
        let attrs = [
            seedable("Life", Category::Primary, 100.0),
            attr("Beta", Category::Secondary, 200.0),
        ];
        let p = GuaranteedSeed.combine(&attrs, &pools);
        let expected = 200.0 / 45_000.0 * 0.2;
        assert!((p - expected).abs() < 1e-12);
        assert!((p - 0.000889).abs() < 1e-6);
    }

    #[test]
    fn test_two_seedables_capped() {
        let pools = PoolTotals::default();
        let attrs = [
            seedable("Life", Category::Primary, 100.0),
            seedable("Shield", Category::Primary, 100.0),
        ];
        assert_eq!(GuaranteedSeed.combine(&attrs, &pools), 0.1);
    }

    #[test]
    fn test_cap_does_not_raise_small_probabilities() {
        let pools = PoolTotals::default();
        let attrs = [
            seedable("Life", Category::Primary, 100.0),
            seedable("Shield", Category::Primary, 100.0),
            attr("Beta", Category::Secondary, 450.0),
        ];
        let p = GuaranteedSeed.combine(&attrs, &pools);
        assert!((p - 0.01 * 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_seedable_individual_probability_is_one() {
        let pools = PoolTotals::default();
        let life = seedable("Life", Category::Primary, 100.0);
        assert_eq!(GuaranteedSeed.individual_probability(&life, &pools), 1.0);
        let beta = attr("Beta", Category::Secondary, 450.0);
        assert!((GuaranteedSeed.individual_probability(&beta, &pools) - 0.01).abs() < 1e-12);
    }
}
