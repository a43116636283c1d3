//! Modification methods and their combination rules.
//!
//! Each method owns one `CombinationRule`. The rules only see attributes that
//! already passed the shared checks in [`Method::combined_probability`]: at
//! least one target and no category over its slot limit.

mod broad_reroll;
mod guaranteed_seed;
mod progressive_build;
mod weight_biased;

pub use broad_reroll::BroadReroll;
pub use guaranteed_seed::GuaranteedSeed;
pub use progressive_build::ProgressiveBuild;
pub use weight_biased::WeightBiased;

use crate::catalog::{Category, PoolTotals};
use crate::core::constants::*;
use crate::resolver::ResolvedAttribute;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a method turns per-attribute chances into one combined chance.
pub trait CombinationRule: Send + Sync {
    /// Combined probability for a non-empty, slot-legal target set.
    fn combine(&self, attributes: &[ResolvedAttribute], pools: &PoolTotals) -> f64;

    /// Chance of this one attribute winning its pool draw.
    fn individual_probability(&self, attribute: &ResolvedAttribute, pools: &PoolTotals) -> f64 {
        pool_share(attribute.effective_weight, attribute.category, pools)
    }
}

/// `weight / pool`, clamped to at most 1.
pub(crate) fn pool_share(weight: f64, category: Category, pools: &PoolTotals) -> f64 {
    (weight / pools.total_for(category)).min(1.0)
}

/// Product of every attribute's pool share, each weight scaled by `bias`.
pub(crate) fn independent_product<'a>(
    attributes: impl IntoIterator<Item = &'a ResolvedAttribute>,
    pools: &PoolTotals,
    bias: f64,
) -> f64 {
    attributes
        .into_iter()
        .map(|a| pool_share(a.pool_weight * bias, a.category, pools))
        .product()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Reroll every attribute at once.
    BroadReroll,
    /// Roll one or two attributes, then add one more.
    ProgressiveBuild,
    /// Force one seedable attribute, roll the rest.
    GuaranteedSeed,
    /// Reroll with targeted weights boosted.
    WeightBiased,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::BroadReroll,
        Method::ProgressiveBuild,
        Method::GuaranteedSeed,
        Method::WeightBiased,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Method::BroadReroll => "broad_reroll",
            Method::ProgressiveBuild => "progressive_build",
            Method::GuaranteedSeed => "guaranteed_seed",
            Method::WeightBiased => "weight_biased",
        }
    }

    pub fn rule(&self) -> &'static dyn CombinationRule {
        match self {
            Method::BroadReroll => &BroadReroll,
            Method::ProgressiveBuild => &ProgressiveBuild,
            Method::GuaranteedSeed => &GuaranteedSeed,
            Method::WeightBiased => &WeightBiased,
        }
    }

    /// Abstract cost of one attempt.
    pub fn base_cost(&self) -> f64 {
        match self {
            Method::BroadReroll => BROAD_REROLL_BASE_COST,
            Method::ProgressiveBuild => PROGRESSIVE_BUILD_BASE_COST,
            Method::GuaranteedSeed => GUARANTEED_SEED_BASE_COST,
            Method::WeightBiased => WEIGHT_BIASED_BASE_COST,
        }
    }

    /// Spread of per-attempt cost, in [1.3, 2.0].
    pub fn variance_factor(&self) -> f64 {
        match self {
            Method::BroadReroll => BROAD_REROLL_VARIANCE,
            Method::ProgressiveBuild => PROGRESSIVE_BUILD_VARIANCE,
            Method::GuaranteedSeed => GUARANTEED_SEED_VARIANCE,
            Method::WeightBiased => WEIGHT_BIASED_VARIANCE,
        }
    }

    /// Scales pool weight into effective weight.
    pub fn weight_multiplier(&self) -> f64 {
        match self {
            Method::WeightBiased => WEIGHT_BIAS_METHOD_MULTIPLIER,
            _ => 1.0,
        }
    }

    /// Combined probability of landing every attribute in one attempt.
    ///
    /// No targets is vacuously certain. More than three attributes of one
    /// category cannot fit on an item, so the result is exactly 0.
    pub fn combined_probability(&self, attributes: &[ResolvedAttribute], pools: &PoolTotals) -> f64 {
        if attributes.is_empty() {
            return 1.0;
        }
        if exceeds_slot_limit(attributes) {
            return 0.0;
        }
        self.rule().combine(attributes, pools).clamp(0.0, 1.0)
    }
}

pub fn exceeds_slot_limit(attributes: &[ResolvedAttribute]) -> bool {
    let primaries = attributes
        .iter()
        .filter(|a| a.category == Category::Primary)
        .count();
    let secondaries = attributes.len() - primaries;
    primaries > MAX_ATTRIBUTES_PER_CATEGORY || secondaries > MAX_ATTRIBUTES_PER_CATEGORY
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Method::ALL
            .into_iter()
            .find(|m| m.id() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown method '{s}' (expected one of: broad_reroll, progressive_build, guaranteed_seed, weight_biased)"
                )
            })
    }
}
