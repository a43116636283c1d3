//! Simulation results and report generation.

use super::stats::SampleSummary;
use crate::core::Bounded;
use crate::methods::Method;
use serde::Serialize;

/// Aggregated outcome of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResult {
    pub method: Method,
    pub requested_trials: u32,
    /// Trials actually run. Lower than requested when a time budget ran out.
    pub simulation_count: u32,
    pub successes: u32,
    pub success_rate: f64,
    pub truncated: bool,
    /// Attempts needed, over successful trials only.
    pub attempts: SampleSummary,
    /// Attempts times the method's per-attempt cost.
    pub cost: SampleSummary,
}

impl SimulationResult {
    /// Relative gap between the simulated mean attempts and an analytic
    /// expectation, e.g. 0.05 for 5%.
    pub fn deviation_from(&self, expected_attempts: Bounded) -> Option<f64> {
        let expected = expected_attempts.finite()?;
        Some((self.attempts.mean - expected).abs() / expected)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Trials: {} run of {} requested, {} succeeded ({:.1}%)\n",
            self.simulation_count,
            self.requested_trials,
            self.successes,
            self.success_rate * 100.0
        ));
        if self.truncated {
            report.push_str("  ⚠️  Time budget exhausted - partial result\n");
        }
        report.push('\n');

        push_summary(&mut report, "ATTEMPTS", &self.attempts, 1);
        push_summary(&mut report, "COST", &self.cost, 1);

        report.push_str("═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn push_summary(report: &mut String, title: &str, summary: &SampleSummary, precision: usize) {
    report.push_str(&format!("── {title} {}\n", "─".repeat(60 - title.len())));
    report.push_str(&format!("  Mean:     {:.*}\n", precision, summary.mean));
    report.push_str(&format!("  Median:   {:.*}\n", precision, summary.median));
    report.push_str(&format!("  Std Dev:  {:.*}\n", precision, summary.std_dev));
    report.push_str(&format!(
        "  Range:    {:.*} - {:.*}\n",
        precision, summary.min, precision, summary.max
    ));
    let p = &summary.percentiles;
    report.push_str(&format!(
        "  P10 {:.*} | P25 {:.*} | P75 {:.*} | P90 {:.*} | P95 {:.*}\n\n",
        precision, p.p10, precision, p.p25, precision, p.p75, precision, p.p90, precision, p.p95
    ));
}
