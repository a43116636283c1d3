//! Built-in attribute definitions.

use super::types::{AttributeDefinition, Category, Tier};
use std::collections::HashMap;

fn multipliers(entries: &[(&str, f64)]) -> HashMap<String, f64> {
    entries
        .iter()
        .map(|(base, mult)| (base.to_string(), *mult))
        .collect()
}

/// Standard five-tier ladder shared by the flat-scaling attributes.
fn standard_tiers(ranges: [(f64, f64); 5]) -> Vec<Tier> {
    vec![
        Tier::new("T1", 100, 85, ranges[0]),
        Tier::new("T2", 200, 70, ranges[1]),
        Tier::new("T3", 400, 50, ranges[2]),
        Tier::new("T4", 800, 30, ranges[3]),
        Tier::new("T5", 1600, 1, ranges[4]),
    ]
}

/// Resistances have a flatter ladder: top tiers are less rare.
fn resistance_tiers() -> Vec<Tier> {
    vec![
        Tier::new("T1", 250, 85, (43.0, 48.0)),
        Tier::new("T2", 500, 70, (37.0, 42.0)),
        Tier::new("T3", 750, 50, (31.0, 36.0)),
        Tier::new("T4", 1000, 30, (25.0, 30.0)),
        Tier::new("T5", 1500, 1, (18.0, 24.0)),
    ]
}

fn resistance(name: &str) -> AttributeDefinition {
    AttributeDefinition {
        name: name.to_string(),
        category: Category::Secondary,
        tiers: resistance_tiers(),
        base_type_multipliers: multipliers(&[
            ("ring", 1.2),
            ("amulet", 1.0),
            ("body_armour", 0.8),
            ("helmet", 1.0),
            ("gloves", 0.8),
            ("boots", 0.8),
            ("belt", 1.0),
        ]),
        seedable: false,
    }
}

/// Returns every built-in attribute definition.
pub fn builtin_definitions() -> Vec<AttributeDefinition> {
    vec![
        AttributeDefinition {
            name: "Maximum Life".to_string(),
            category: Category::Primary,
            tiers: standard_tiers([
                (100.0, 120.0),
                (80.0, 99.0),
                (60.0, 79.0),
                (40.0, 59.0),
                (20.0, 39.0),
            ]),
            base_type_multipliers: multipliers(&[
                ("body_armour", 1.0),
                ("helmet", 0.8),
                ("gloves", 0.6),
                ("boots", 0.6),
                ("belt", 1.2),
                ("ring", 0.4),
                ("amulet", 0.8),
            ]),
            seedable: true,
        },
        AttributeDefinition {
            name: "Maximum Energy Shield".to_string(),
            category: Category::Primary,
            tiers: standard_tiers([
                (100.0, 120.0),
                (80.0, 99.0),
                (60.0, 79.0),
                (40.0, 59.0),
                (20.0, 39.0),
            ]),
            base_type_multipliers: multipliers(&[
                ("body_armour", 1.0),
                ("helmet", 0.8),
                ("gloves", 0.6),
                ("boots", 0.6),
                ("shield", 1.5),
            ]),
            seedable: true,
        },
        AttributeDefinition {
            name: "Attack Speed".to_string(),
            category: Category::Secondary,
            tiers: standard_tiers([
                (15.0, 17.0),
                (12.0, 14.0),
                (9.0, 11.0),
                (6.0, 8.0),
                (3.0, 5.0),
            ]),
            base_type_multipliers: multipliers(&[
                ("weapon", 1.0),
                ("gloves", 0.5),
                ("ring", 0.3),
                ("amulet", 0.4),
            ]),
            seedable: false,
        },
        AttributeDefinition {
            name: "Critical Strike Chance".to_string(),
            category: Category::Secondary,
            tiers: standard_tiers([
                (35.0, 38.0),
                (30.0, 34.0),
                (25.0, 29.0),
                (20.0, 24.0),
                (15.0, 19.0),
            ]),
            base_type_multipliers: multipliers(&[
                ("weapon", 1.0),
                ("ring", 0.3),
                ("amulet", 0.4),
            ]),
            seedable: false,
        },
        resistance("Fire Resistance"),
        resistance("Cold Resistance"),
        resistance("Lightning Resistance"),
    ]
}
