//! Availability resolution: which tier of an attribute can roll at a given
//! source level, and how heavily it weighs in its pool.

use crate::catalog::{Catalog, Category, Tier};
use crate::error::{OddsError, Result};
use serde::Serialize;
use tracing::debug;

/// An attribute pinned to the tier it would roll at, with its weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAttribute {
    pub name: String,
    pub tier: Tier,
    pub category: Category,
    pub seedable: bool,
    /// Tier weight scaled by the base-type multiplier. This is what competes
    /// in the category pool.
    pub pool_weight: f64,
    /// Pool weight scaled by the method-specific multiplier.
    pub effective_weight: f64,
}

impl ResolvedAttribute {
    /// Copy with the method-specific multiplier applied to the effective weight.
    pub fn with_method_multiplier(&self, multiplier: f64) -> Self {
        Self {
            effective_weight: self.pool_weight * multiplier,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Resolve one attribute for an item of `base_type` at `level`.
    pub fn resolve(&self, name: &str, level: u32, base_type: &str) -> Result<ResolvedAttribute> {
        let def = self
            .catalog
            .get(name)
            .ok_or_else(|| OddsError::UnknownAttribute(name.to_string()))?;

        let tier = def
            .rarest_tier_at(level)
            .ok_or_else(|| OddsError::LevelTooLow {
                attribute: name.to_string(),
                level,
                required: def.lowest_requirement().unwrap_or(0),
            })?;

        let pool_weight = tier.weight as f64 * def.base_type_multiplier(base_type);
        debug!(
            attribute = name,
            tier = %tier.label,
            pool_weight,
            "resolved attribute"
        );

        Ok(ResolvedAttribute {
            name: def.name.clone(),
            tier: tier.clone(),
            category: def.category,
            seedable: def.seedable,
            pool_weight,
            effective_weight: pool_weight,
        })
    }
}
