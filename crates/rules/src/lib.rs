//! Tunable configuration for the readiness scoring pipeline.
//!
//! Every normalization constant, weight table, economic assumption, and
//! benchmark reference lives here as a typed, serde-deserializable value
//! with validated defaults. The compute crate never hard-codes a
//! threshold; deployments can override any table from YAML.

pub mod benchmark_config;
pub mod consolidation;
pub mod economics_config;
pub mod matching;
pub mod scoring_config;

pub use benchmark_config::{BenchmarkConfig, KpiDirection, KpiReference};
pub use consolidation::{ConsolidationCategory, ConsolidationMap};
pub use economics_config::{BreakdownShare, EconomicAssumptions};
pub use matching::{first_match, name_matches};
pub use scoring_config::{
    CategoryThresholds, ConfidenceFloors, GoldWeights, NormalizationThresholds, ScoringConfig,
    SilverWeights,
};
