//! One entry point over a shared catalog.

use crate::catalog::Catalog;
use crate::comparison::{self, MethodAssessment};
use crate::efficiency::{EfficiencyAnalyzer, EfficiencyReport};
use crate::error::Result;
use crate::methods::Method;
use crate::probability::{ProbabilityCalculator, ProbabilityResult, Query};
use crate::resolver::{ResolvedAttribute, Resolver};
use crate::simulator::{self, SimConfig, SimulationResult};
use std::collections::HashMap;

/// Borrows a catalog and exposes every analysis over it.
///
/// Holds no state of its own, so it is cheap to copy and safe to share
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct OddsEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> OddsEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn resolve(&self, name: &str, level: u32, base_type: &str) -> Result<ResolvedAttribute> {
        Resolver::new(self.catalog).resolve(name, level, base_type)
    }

    pub fn calculate_probability(&self, query: &Query) -> Result<ProbabilityResult> {
        ProbabilityCalculator::new(self.catalog).calculate(query)
    }

    /// Geometric simulation at the combined probability of `result`.
    pub fn simulate(&self, result: &ProbabilityResult, config: &SimConfig) -> Result<SimulationResult> {
        simulator::simulate(result, config)
    }

    /// Simulation that draws every resolved attribute independently.
    pub fn simulate_independent(
        &self,
        result: &ProbabilityResult,
        config: &SimConfig,
    ) -> Result<SimulationResult> {
        simulator::simulate_independent(result, config)
    }

    pub fn analyze_efficiency<S: AsRef<str>>(
        &self,
        names: &[S],
        base_type: &str,
        min_level: u32,
    ) -> Result<EfficiencyReport> {
        EfficiencyAnalyzer::new(self.catalog).analyze(names, base_type, min_level)
    }

    pub fn analyze_efficiency_with_method<S: AsRef<str>>(
        &self,
        names: &[S],
        base_type: &str,
        min_level: u32,
        method: Method,
    ) -> Result<EfficiencyReport> {
        EfficiencyAnalyzer::new(self.catalog).analyze_with_method(names, base_type, min_level, method)
    }

    pub fn compare_methods<S: AsRef<str>>(
        &self,
        targets: &[S],
        base_type: &str,
        min_level: u32,
        budget: f64,
        priors: &HashMap<Method, f64>,
    ) -> Result<Vec<MethodAssessment>> {
        comparison::compare_methods(self.catalog, targets, base_type, min_level, budget, priors)
    }
}
