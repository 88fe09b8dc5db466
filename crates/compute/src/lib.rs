//! Agentic readiness scoring for contact-center processes.
//!
//! Takes a batch of raw interaction records and produces, per
//! queue/skill, a 0-10 readiness score with sub-factor breakdown,
//! a customer-value segment, and downstream economic and benchmark
//! derivations. Pure in-memory transformation; no I/O.

pub mod pipeline;

pub use pipeline::aggregate::{ProcessAggregate, ProcessStats};
pub use pipeline::benchmark::BenchmarkPoint;
pub use pipeline::economics::{AutomationPotential, EconomicModel, Opportunity};
pub use pipeline::sanitize::SanitizeReport;
pub use pipeline::score::{ReadinessCategory, ReadinessResult, SubFactor};
pub use pipeline::{run_analysis, Analysis, AnalysisRules, ProcessReadiness, SummaryKpis};
