use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Which half of the item an attribute occupies. Each category is drawn
/// from its own pool and has its own slot limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Primary,
    Secondary,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Primary => "primary",
            Category::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One weighted variant of an attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub label: String,
    pub weight: u32,
    /// Minimum source level at which this tier can appear.
    pub min_level: u32,
    /// Inclusive roll range `(min, max)`.
    pub value_range: (f64, f64),
}

impl Tier {
    pub fn new(label: &str, weight: u32, min_level: u32, value_range: (f64, f64)) -> Self {
        Self {
            label: label.to_string(),
            weight,
            min_level,
            value_range,
        }
    }

    pub fn is_available_at(&self, level: u32) -> bool {
        self.min_level <= level
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub name: String,
    pub category: Category,
    pub tiers: Vec<Tier>,
    /// Base type -> weight multiplier. Unmapped base types use 1.0.
    #[serde(default)]
    pub base_type_multipliers: HashMap<String, f64>,
    /// Guaranteed-seed methods can force this attribute onto the item.
    #[serde(default)]
    pub seedable: bool,
}

impl AttributeDefinition {
    pub fn base_type_multiplier(&self, base_type: &str) -> f64 {
        self.base_type_multipliers
            .get(base_type)
            .copied()
            .unwrap_or(1.0)
    }

    /// Lowest level at which any tier is available.
    pub fn lowest_requirement(&self) -> Option<u32> {
        self.tiers.iter().map(|t| t.min_level).min()
    }

    /// Rarest tier reachable at `level`, i.e. the lowest weight among the
    /// tiers whose requirement the level meets.
    pub fn rarest_tier_at(&self, level: u32) -> Option<&Tier> {
        self.tiers
            .iter()
            .filter(|t| t.is_available_at(level))
            .min_by_key(|t| t.weight)
    }
}

/// Total weight of each category's pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoolTotals {
    pub primary: f64,
    pub secondary: f64,
}

impl PoolTotals {
    pub fn total_for(&self, category: Category) -> f64 {
        match category {
            Category::Primary => self.primary,
            Category::Secondary => self.secondary,
        }
    }
}

impl Default for PoolTotals {
    fn default() -> Self {
        Self {
            primary: crate::core::constants::PRIMARY_POOL_WEIGHT,
            secondary: crate::core::constants::SECONDARY_POOL_WEIGHT,
        }
    }
}
