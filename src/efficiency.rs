//! Efficiency analysis of single attributes and small combinations.
//!
//! Every attribute and every 2- and 3-attribute combination of the input is
//! priced through the full pipeline and scored by
//! `probability / max(1, expected attempts)`. The maps are returned
//! unranked; ordering them is up to the caller.

use crate::catalog::Catalog;
use crate::core::Bounded;
use crate::error::Result;
use crate::methods::Method;
use crate::probability::{ProbabilityCalculator, ProbabilityResult, Query};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Separator used to build combination keys.
pub const COMBINATION_SEPARATOR: &str = " + ";

/// Largest combination size analysed.
const MAX_COMBINATION_SIZE: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyEntry {
    pub probability: f64,
    pub expected_attempts: Bounded,
    pub expected_cost: Bounded,
    pub efficiency_score: f64,
}

impl EfficiencyEntry {
    fn from_result(result: &ProbabilityResult) -> Self {
        Self {
            probability: result.combined_probability,
            expected_attempts: result.expected_attempts,
            expected_cost: result.cost.expected(),
            efficiency_score: efficiency_score(result.combined_probability, result.expected_attempts),
        }
    }
}

/// `probability / max(1, attempts)`; an unreachable goal scores 0.
pub fn efficiency_score(probability: f64, expected_attempts: Bounded) -> f64 {
    match expected_attempts {
        Bounded::Finite(attempts) => probability / attempts.max(1.0),
        Bounded::Unbounded => 0.0,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EfficiencyReport {
    pub method: Method,
    pub per_attribute: HashMap<String, EfficiencyEntry>,
    pub per_combination: HashMap<String, EfficiencyEntry>,
    pub generated_at: DateTime<Utc>,
}

impl EfficiencyReport {
    /// Generate a text report. Entries are listed by name, not by score.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    EFFICIENCY ANALYSIS\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");
        report.push_str(&format!("  Method: {}\n\n", self.method));

        report.push_str("── ATTRIBUTES ───────────────────────────────────────────────────\n");
        push_entries(&mut report, &self.per_attribute);
        report.push('\n');

        report.push_str("── COMBINATIONS ─────────────────────────────────────────────────\n");
        push_entries(&mut report, &self.per_combination);

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn push_entries(report: &mut String, entries: &HashMap<String, EfficiencyEntry>) {
    let mut names: Vec<_> = entries.keys().collect();
    names.sort();
    for name in names {
        let e = &entries[name];
        report.push_str(&format!(
            "  {:<48} p={:.6}  attempts={:.0}  score={:.3e}\n",
            name, e.probability, e.expected_attempts, e.efficiency_score
        ));
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EfficiencyAnalyzer<'a> {
    calculator: ProbabilityCalculator<'a>,
}

impl<'a> EfficiencyAnalyzer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            calculator: ProbabilityCalculator::new(catalog),
        }
    }

    /// Analyse under a broad reroll.
    pub fn analyze<S: AsRef<str>>(
        &self,
        names: &[S],
        base_type: &str,
        min_level: u32,
    ) -> Result<EfficiencyReport> {
        self.analyze_with_method(names, base_type, min_level, Method::BroadReroll)
    }

    pub fn analyze_with_method<S: AsRef<str>>(
        &self,
        names: &[S],
        base_type: &str,
        min_level: u32,
        method: Method,
    ) -> Result<EfficiencyReport> {
        // Repeated names would collapse entries and pair a name with itself.
        let mut seen = HashSet::new();
        let names: Vec<&str> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| seen.insert(*name))
            .collect();

        let mut per_attribute = HashMap::with_capacity(names.len());
        for name in &names {
            let entry = self.price(&[*name], base_type, min_level, method)?;
            per_attribute.insert(name.to_string(), entry);
        }

        let mut per_combination = HashMap::new();
        for size in 2..=MAX_COMBINATION_SIZE.min(names.len()) {
            for combo in combinations(names.len(), size) {
                let members: Vec<&str> = combo.iter().map(|&i| names[i]).collect();
                let entry = self.price(&members, base_type, min_level, method)?;
                per_combination.insert(members.join(COMBINATION_SEPARATOR), entry);
            }
        }

        debug!(
            attributes = per_attribute.len(),
            combinations = per_combination.len(),
            "efficiency analysis complete"
        );

        Ok(EfficiencyReport {
            method,
            per_attribute,
            per_combination,
            generated_at: Utc::now(),
        })
    }

    fn price(
        &self,
        targets: &[&str],
        base_type: &str,
        min_level: u32,
        method: Method,
    ) -> Result<EfficiencyEntry> {
        let query = Query::new(targets, base_type, min_level, method).skip_unresolved();
        let result = self.calculator.calculate(&query)?;
        Ok(EfficiencyEntry::from_result(&result))
    }
}

/// Every `k`-element index combination of `0..n`, in lexicographic order.
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k == 0 || k > n {
        return out;
    }

    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        out.push(indices.clone());

        // Rightmost index that can still advance.
        let Some(pos) = (0..k).rev().find(|&i| indices[i] < n - k + i) else {
            return out;
        };
        indices[pos] += 1;
        for i in pos + 1..k {
            indices[i] = indices[i - 1] + 1;
        }
    }
}
