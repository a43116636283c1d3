//! Probability calculation: resolve targets, combine their chances under a
//! method, then enrich with cost and confidence estimates.

mod result;

pub use result::{ProbabilityResult, SkippedAttribute};

use crate::catalog::Catalog;
use crate::core::constants::{BEST_CASE_FRACTION, WORST_CASE_MULTIPLE};
use crate::core::Bounded;
use crate::error::Result;
use crate::estimate::{confidence_interval, estimate_cost};
use crate::methods::Method;
use crate::resolver::{ResolvedAttribute, Resolver};
use std::collections::HashMap;
use tracing::{debug, warn};

/// What to do when a target cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    /// Fail the whole query on the first unresolvable target.
    #[default]
    Strict,
    /// Log, record the target as skipped, and carry on with the rest.
    SkipAndWarn,
}

/// Everything needed to price one modification goal.
#[derive(Debug, Clone)]
pub struct Query {
    pub targets: Vec<String>,
    pub base_type: String,
    pub min_level: u32,
    pub method: Method,
    pub policy: ResolutionPolicy,
}

impl Query {
    pub fn new<S: AsRef<str>>(targets: &[S], base_type: &str, min_level: u32, method: Method) -> Self {
        Self {
            targets: targets.iter().map(|t| t.as_ref().to_string()).collect(),
            base_type: base_type.to_string(),
            min_level,
            method,
            policy: ResolutionPolicy::Strict,
        }
    }

    pub fn skip_unresolved(mut self) -> Self {
        self.policy = ResolutionPolicy::SkipAndWarn;
        self
    }

    pub fn with_method(&self, method: Method) -> Self {
        Self {
            method,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProbabilityCalculator<'a> {
    catalog: &'a Catalog,
}

impl<'a> ProbabilityCalculator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Per-attribute chance of winning its pool draw under `method`.
    pub fn individual_probability(&self, attribute: &ResolvedAttribute, method: Method) -> f64 {
        let weighted = attribute.with_method_multiplier(method.weight_multiplier());
        method
            .rule()
            .individual_probability(&weighted, self.catalog.pools())
    }

    /// Combined chance of landing every attribute in one attempt.
    pub fn combined_probability(&self, attributes: &[ResolvedAttribute], method: Method) -> f64 {
        method.combined_probability(attributes, self.catalog.pools())
    }

    /// Resolve a query's targets according to its policy.
    pub fn resolve_targets(
        &self,
        query: &Query,
    ) -> Result<(Vec<ResolvedAttribute>, Vec<SkippedAttribute>)> {
        let resolver = Resolver::new(self.catalog);
        let mut resolved = Vec::with_capacity(query.targets.len());
        let mut skipped = Vec::new();

        for name in &query.targets {
            match resolver.resolve(name, query.min_level, &query.base_type) {
                Ok(attr) => resolved.push(attr.with_method_multiplier(query.method.weight_multiplier())),
                Err(err) if query.policy == ResolutionPolicy::SkipAndWarn && err.is_resolution_failure() => {
                    warn!(attribute = %name, error = %err, "skipping unresolvable target");
                    skipped.push(SkippedAttribute {
                        name: name.clone(),
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok((resolved, skipped))
    }

    /// Full analysis of a query.
    pub fn calculate(&self, query: &Query) -> Result<ProbabilityResult> {
        let (resolved, skipped) = self.resolve_targets(query)?;

        let individual_probabilities: HashMap<String, f64> = resolved
            .iter()
            .map(|a| (a.name.clone(), self.individual_probability(a, query.method)))
            .collect();

        // Targets were requested but none could be placed: nothing to hit.
        let combined_probability = if resolved.is_empty() && !query.targets.is_empty() {
            0.0
        } else {
            self.combined_probability(&resolved, query.method)
        };

        debug!(
            method = %query.method,
            targets = query.targets.len(),
            resolved = resolved.len(),
            combined_probability,
            "calculated probability"
        );

        Ok(build_result(
            query,
            resolved,
            skipped,
            individual_probabilities,
            combined_probability,
        ))
    }
}

fn build_result(
    query: &Query,
    resolved: Vec<ResolvedAttribute>,
    skipped: Vec<SkippedAttribute>,
    individual_probabilities: HashMap<String, f64>,
    combined_probability: f64,
) -> ProbabilityResult {
    let expected_attempts = Bounded::attempts_for(combined_probability);

    ProbabilityResult {
        method: query.method,
        targets: query.targets.clone(),
        resolved,
        skipped,
        individual_probabilities,
        combined_probability,
        expected_attempts,
        cost: estimate_cost(query.method, expected_attempts),
        confidence_interval: confidence_interval(combined_probability, expected_attempts),
        best_case_attempts: expected_attempts.map(|e| (e * BEST_CASE_FRACTION).floor().max(1.0)),
        worst_case_attempts: expected_attempts.map(|e| (e * WORST_CASE_MULTIPLE).floor()),
    }
}
