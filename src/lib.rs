//! craftodds - probability engine for weighted item modification
//!
//! Given a set of target attributes, an item base type and a source level,
//! answers how likely one attempt is to land them all under each
//! modification method, what that costs, and whether a Monte Carlo run
//! agrees.

pub mod catalog;
pub mod comparison;
pub mod core;
pub mod efficiency;
pub mod engine;
pub mod error;
pub mod estimate;
pub mod methods;
pub mod probability;
pub mod resolver;
pub mod simulator;

pub use catalog::{AttributeDefinition, Catalog, Category, PoolTotals, Tier};
pub use comparison::{compare_methods, MethodAssessment};
pub use crate::core::Bounded;
pub use efficiency::{EfficiencyAnalyzer, EfficiencyEntry, EfficiencyReport};
pub use engine::OddsEngine;
pub use error::{OddsError, Result};
pub use estimate::{ConfidenceInterval, CostDistribution, CostEstimate};
pub use methods::{CombinationRule, Method};
pub use probability::{ProbabilityCalculator, ProbabilityResult, Query, ResolutionPolicy};
pub use resolver::{ResolvedAttribute, Resolver};
pub use simulator::{SimConfig, SimulationResult};
