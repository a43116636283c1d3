use crate::core::Bounded;
use crate::estimate::{ConfidenceInterval, CostEstimate};
use crate::methods::Method;
use crate::resolver::ResolvedAttribute;
use serde::Serialize;
use std::collections::HashMap;

/// A target that was dropped from the query, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedAttribute {
    pub name: String,
    pub reason: String,
}

/// Complete analysis of one modification goal.
#[derive(Debug, Clone, Serialize)]
pub struct ProbabilityResult {
    pub method: Method,
    pub targets: Vec<String>,
    pub resolved: Vec<ResolvedAttribute>,
    pub skipped: Vec<SkippedAttribute>,
    pub individual_probabilities: HashMap<String, f64>,
    /// In [0, 1]. Exactly 0 when the goal cannot be reached.
    pub combined_probability: f64,
    pub expected_attempts: Bounded,
    pub cost: CostEstimate,
    pub confidence_interval: ConfidenceInterval,
    pub best_case_attempts: Bounded,
    pub worst_case_attempts: Bounded,
}

impl ProbabilityResult {
    pub fn is_achievable(&self) -> bool {
        self.combined_probability > 0.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    PROBABILITY ANALYSIS\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("  Method:   {}\n", self.method));
        report.push_str(&format!("  Targets:  {}\n\n", self.targets.join(", ")));

        report.push_str("── PER ATTRIBUTE ────────────────────────────────────────────────\n");
        for attr in &self.resolved {
            let p = self
                .individual_probabilities
                .get(&attr.name)
                .copied()
                .unwrap_or(0.0);
            report.push_str(&format!(
                "  {:<28} {:>3} {:<9}  weight {:>7.1}  {:>8.4}%\n",
                attr.name,
                attr.tier.label,
                attr.category.name(),
                attr.pool_weight,
                p * 100.0
            ));
        }
        for skipped in &self.skipped {
            report.push_str(&format!("  ⚠️  skipped {}: {}\n", skipped.name, skipped.reason));
        }
        report.push('\n');

        report.push_str("── COMBINED ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Success Chance:      {:.6}%\n",
            self.combined_probability * 100.0
        ));
        report.push_str(&format!(
            "  Expected Attempts:   {:.1}\n",
            self.expected_attempts
        ));
        report.push_str(&format!(
            "  95% Interval:        {:.1} - {:.1}\n",
            self.confidence_interval.lower, self.confidence_interval.upper
        ));
        report.push_str(&format!(
            "  Best / Worst Case:   {:.0} / {:.0}\n\n",
            self.best_case_attempts, self.worst_case_attempts
        ));

        report.push_str("── COST ─────────────────────────────────────────────────────────\n");
        match &self.cost {
            CostEstimate::Finite(d) => {
                report.push_str(&format!("  Per Attempt:   {:.1}\n", d.base_cost));
                report.push_str(&format!("  Expected:      {:.1}\n", d.expected));
                report.push_str(&format!("  Std Dev:       {:.1}\n", d.std_dev));
                report.push_str(&format!("  90% Range:     {:.1} - {:.1}\n", d.p05, d.p95));
                report.push_str(&format!("  Optimistic:    {:.1}\n", d.optimistic));
                report.push_str(&format!("  Pessimistic:   {:.1}\n", d.pessimistic));
            }
            CostEstimate::Unbounded { base_cost } => {
                report.push_str(&format!("  Per Attempt:   {:.1}\n", base_cost));
                report.push_str("  ⚠️  Target unreachable - cost is unbounded\n");
            }
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
