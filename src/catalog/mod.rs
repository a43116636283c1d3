//! Attribute weight catalog.
//!
//! The catalog is built once, validated, and then only ever read. Every
//! other component borrows it; nothing mutates it after construction.

mod data;
mod types;

pub use data::builtin_definitions;
pub use types::{AttributeDefinition, Category, PoolTotals, Tier};

use crate::error::{OddsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serialized layout of a catalog: pool totals plus the attribute list.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    pools: PoolTotals,
    attributes: Vec<AttributeDefinition>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    definitions: HashMap<String, AttributeDefinition>,
    pools: PoolTotals,
}

impl Catalog {
    /// Build a catalog, rejecting definitions that break the tier invariants.
    pub fn new(definitions: Vec<AttributeDefinition>, pools: PoolTotals) -> Result<Self> {
        validate_pools(&pools)?;

        let mut by_name = HashMap::with_capacity(definitions.len());
        for def in definitions {
            validate_definition(&def)?;
            if by_name.contains_key(&def.name) {
                return Err(OddsError::InvalidCatalog(format!(
                    "duplicate attribute '{}'",
                    def.name
                )));
            }
            by_name.insert(def.name.clone(), def);
        }

        Ok(Self {
            definitions: by_name,
            pools,
        })
    }

    /// The compiled-in attribute table with default pool totals.
    pub fn builtin() -> Self {
        let definitions = builtin_definitions()
            .into_iter()
            .map(|def| (def.name.clone(), def))
            .collect();
        Self {
            definitions,
            pools: PoolTotals::default(),
        }
    }

    /// Parse a catalog from JSON of the form
    /// `{"pools": {"primary": .., "secondary": ..}, "attributes": [..]}`.
    /// `pools` may be omitted to use the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.attributes, file.pools)
    }

    /// Serialize to the layout `from_json` reads. Attributes are sorted by name.
    pub fn to_json(&self) -> Result<String> {
        let mut attributes: Vec<_> = self.definitions.values().cloned().collect();
        attributes.sort_by(|a, b| a.name.cmp(&b.name));
        let file = CatalogFile {
            pools: self.pools,
            attributes,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn get(&self, name: &str) -> Option<&AttributeDefinition> {
        self.definitions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub fn pools(&self) -> &PoolTotals {
        &self.pools
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Attribute names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.definitions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn definitions(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.definitions.values()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_pools(pools: &PoolTotals) -> Result<()> {
    for (category, total) in [
        (Category::Primary, pools.primary),
        (Category::Secondary, pools.secondary),
    ] {
        if !total.is_finite() || total <= 0.0 {
            return Err(OddsError::InvalidCatalog(format!(
                "{category} pool total must be positive, got {total}"
            )));
        }
    }
    Ok(())
}

fn validate_definition(def: &AttributeDefinition) -> Result<()> {
    let invalid = |reason: String| Err(OddsError::InvalidCatalog(reason));

    if def.name.trim().is_empty() {
        return invalid("attribute with empty name".to_string());
    }
    if def.tiers.is_empty() {
        return invalid(format!("'{}' has no tiers", def.name));
    }
    if let Some(tier) = def.tiers.iter().find(|t| t.weight == 0) {
        return invalid(format!("'{}' tier {} has zero weight", def.name, tier.label));
    }
    if let Some((base, mult)) = def
        .base_type_multipliers
        .iter()
        .find(|(_, m)| !m.is_finite() || **m < 0.0)
    {
        return invalid(format!(
            "'{}' has invalid multiplier {mult} for base type '{base}'",
            def.name
        ));
    }

    // Commoner tiers come earlier: a lower requirement means a higher weight.
    for a in &def.tiers {
        for b in &def.tiers {
            if a.min_level < b.min_level && a.weight <= b.weight {
                return invalid(format!(
                    "'{}' tier {} (level {}, weight {}) must outweigh tier {} (level {}, weight {})",
                    def.name, a.label, a.min_level, a.weight, b.label, b.min_level, b.weight
                ));
            }
        }
    }

    Ok(())
}
