//! The readiness pipeline: sanitize, aggregate, normalize, score,
//! segment, then derive economics and benchmarks.
//!
//! Strictly ordered, each stage a pure function of the previous stage's
//! output plus injected configuration. Fatal configuration problems
//! abort before any stage runs; data-quality findings are collected as
//! warnings on the result instead.

pub mod aggregate;
pub mod benchmark;
pub mod economics;
pub mod normalize;
pub mod sanitize;
pub mod score;
pub mod segment;

use serde::Serialize;
use tracing::info;

use skillscope_core::{AnalysisWarning, Interaction, ScoringError, Segment, StaticConfig, Tier};
use skillscope_rules::{BenchmarkConfig, ConsolidationMap, EconomicAssumptions, ScoringConfig};

use aggregate::{ProcessAggregate, ProcessStats};
use benchmark::BenchmarkPoint;
use economics::{EconomicModel, Opportunity};
use sanitize::SanitizeReport;
use score::{ReadinessResult, ScoreInputs, SubFactor};

/// Assumed structured-fields share when the client supplied none.
const DEFAULT_STRUCTURED_FIELDS_PCT: f64 = 0.5;

/// The full rule set the pipeline runs under. Every table has
/// validated defaults; deployments override sections from YAML.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisRules {
    pub scoring: ScoringConfig,
    pub economics: EconomicAssumptions,
    pub benchmarks: BenchmarkConfig,
    pub consolidation: ConsolidationMap,
}

impl AnalysisRules {
    pub fn validate(&self) -> Result<(), ScoringError> {
        self.scoring.validate()?;
        self.economics.validate()?;
        self.benchmarks.validate()?;
        Ok(())
    }
}

/// Everything the pipeline produced for one process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessReadiness {
    pub aggregate: ProcessAggregate,
    pub readiness: ReadinessResult,
    pub segment: Segment,
    /// Consolidated reporting category, when one claims the name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consolidated_category: Option<String>,
}

/// Portfolio-level headline figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryKpis {
    pub total_interactions: usize,
    pub process_count: usize,
    /// Volume-weighted average handle time, seconds.
    pub avg_handle_time: f64,
    /// Volume-weighted transfer rate, percent.
    pub transfer_rate: f64,
    /// First-contact-resolution proxy: 100 minus the transfer rate.
    pub fcr_proxy: f64,
    /// Labor cost of the analyzed batch, EUR.
    pub batch_cost: f64,
    /// Overall benchmark standing, 0-100.
    pub health_score: f64,
}

/// The structured result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub tier: Tier,
    pub sanitize_report: SanitizeReport,
    /// Per-process results, sorted by volume descending.
    pub processes: Vec<ProcessReadiness>,
    /// Batch-level readiness built from aggregate inputs.
    pub portfolio: ReadinessResult,
    pub summary: SummaryKpis,
    pub economics: EconomicModel,
    pub benchmarks: Vec<BenchmarkPoint>,
    pub opportunities: Vec<Opportunity>,
    pub warnings: Vec<AnalysisWarning>,
}

/// Run the whole pipeline on one batch of interactions.
///
/// Configuration problems fail fast; thin or noisy data degrades to a
/// best-effort result with warnings attached.
pub fn run_analysis(
    tier: Tier,
    interactions: &[Interaction],
    static_config: &StaticConfig,
    rules: &AnalysisRules,
) -> Result<Analysis, ScoringError> {
    static_config.validate()?;
    rules.validate()?;

    let (cleaned, sanitize_report) = sanitize::sanitize(interactions);

    let mut warnings = Vec::new();
    let stats = aggregate::aggregate_by_process(
        &cleaned,
        static_config.cost_per_hour,
        &rules.scoring.normalization,
    );

    if cleaned.is_empty() {
        warnings.push(AnalysisWarning::InsufficientData);
    } else if stats.len() < 3 {
        warnings.push(AnalysisWarning::FewProcesses { count: stats.len() });
    }

    let structured_fields_pct = static_config
        .structured_fields_pct
        .unwrap_or(DEFAULT_STRUCTURED_FIELDS_PCT);

    let mut processes = Vec::with_capacity(stats.len());
    for s in &stats {
        if s.aggregate.volume < rules.scoring.confidence_floors.degenerate {
            warnings.push(AnalysisWarning::DegenerateStatistics {
                process: s.aggregate.process_name.clone(),
                volume: s.aggregate.volume,
            });
        }

        let annual_savings = economics::projected_annual_savings(
            s.aggregate.total_cost,
            rules.scoring.annualization_factor,
            rules.scoring.normalization.automation_savings_fraction,
        );
        let inputs = ScoreInputs {
            stats: s,
            annual_savings,
            structured_fields_pct,
            escalation_rate: static_config.escalation_rate,
            csat_samples: static_config.csat_samples.as_deref(),
        };
        let readiness = score::score_process(tier, &inputs, &rules.scoring);
        let segment = segment::classify_segment(
            &s.aggregate.process_name,
            static_config.segment_mapping.as_ref(),
        );
        let consolidated_category = rules
            .consolidation
            .categorize(&s.aggregate.process_name)
            .map(|c| c.display_name.clone());

        processes.push(ProcessReadiness {
            aggregate: s.aggregate.clone(),
            readiness,
            segment,
            consolidated_category,
        });
    }

    let portfolio =
        portfolio_readiness(tier, &stats, static_config.escalation_rate, &rules.scoring);

    let batch_cost: f64 = stats.iter().map(|s| s.aggregate.total_cost).sum();
    let economics = economics::build_model(
        batch_cost,
        rules.scoring.annualization_factor,
        &rules.economics,
        &mut warnings,
    );
    let benchmarks = benchmark::derive_benchmarks(&stats, static_config.avg_csat, &rules.benchmarks);
    let opportunities =
        economics::opportunities(&stats, rules.scoring.annualization_factor, &rules.economics);
    let summary = summarize(&stats, batch_cost, &benchmarks);

    info!(
        ?tier,
        interactions = interactions.len(),
        kept = sanitize_report.kept_count,
        processes = processes.len(),
        portfolio_score = portfolio.score,
        warnings = warnings.len(),
        "analysis complete"
    );

    Ok(Analysis {
        tier,
        sanitize_report,
        processes,
        portfolio,
        summary,
        economics,
        benchmarks,
        opportunities,
        warnings,
    })
}

/// Roll the batch up into one portfolio-level result.
///
/// Built from aggregate-level inputs rather than averaged per-process
/// scores: repetitiveness from total volume, predictability from the
/// volume-weighted mean handle-time CV, and complexity from the
/// volume-weighted mean transfer rate, equally weighted.
fn portfolio_readiness(
    tier: Tier,
    stats: &[ProcessStats],
    escalation_rate: Option<f64>,
    config: &ScoringConfig,
) -> ReadinessResult {
    let total_volume: usize = stats.iter().map(|s| s.aggregate.volume).sum();
    if total_volume == 0 {
        return ReadinessResult {
            score: 0.0,
            sub_factors: Vec::new(),
            category: score::categorize(0.0, config),
            confidence: skillscope_core::Confidence::Low,
            interpretation: Some("no scorable processes in this batch".to_string()),
        };
    }
    if tier == Tier::Bronze {
        return ReadinessResult {
            score: 0.0,
            sub_factors: Vec::new(),
            category: score::categorize(0.0, config),
            confidence: score::confidence_for_volume(total_volume, config),
            interpretation: Some(
                "bronze data carries volume only; portfolio readiness cannot be scored"
                    .to_string(),
            ),
        };
    }
    let n = total_volume as f64;

    let mean_cv = stats
        .iter()
        .map(|s| s.aggregate.handle_time_cv * s.aggregate.volume as f64)
        .sum::<f64>()
        / n;
    let mean_transfer_rate = stats
        .iter()
        .map(|s| s.aggregate.transfer_rate * s.aggregate.volume as f64)
        .sum::<f64>()
        / n;

    let t = &config.normalization;
    const WEIGHT: f64 = 1.0 / 3.0;
    let sub_factors = vec![
        SubFactor {
            name: "repetitiveness",
            display_name: "Repetitiveness",
            score: normalize::repetitiveness(total_volume, t),
            weight: WEIGHT,
            description: "volume-driven task repetition",
            details: [("volume", n)].into_iter().collect(),
        },
        SubFactor {
            name: "predictability",
            display_name: "Predictability",
            score: normalize::predictability(mean_cv, escalation_rate, t),
            weight: WEIGHT,
            description: "handle-time consistency and escalation behavior",
            details: [
                ("handle_time_cv", mean_cv),
                ("escalation_rate", escalation_rate.unwrap_or(0.0)),
            ]
            .into_iter()
            .collect(),
        },
        SubFactor {
            name: "complexity",
            display_name: "Complexity (inverse)",
            score: normalize::transfer_complexity(mean_transfer_rate, t),
            weight: WEIGHT,
            description: "freedom from cross-queue transfers",
            details: [("transfer_rate", mean_transfer_rate)].into_iter().collect(),
        },
    ];

    let score = sub_factors
        .iter()
        .map(|f| f.score * f.weight)
        .sum::<f64>()
        .clamp(0.0, 10.0);

    ReadinessResult {
        score,
        sub_factors,
        category: score::categorize(score, config),
        confidence: score::confidence_for_volume(total_volume, config),
        interpretation: None,
    }
}

fn summarize(stats: &[ProcessStats], batch_cost: f64, benchmarks: &[BenchmarkPoint]) -> SummaryKpis {
    let total_interactions: usize = stats.iter().map(|s| s.aggregate.volume).sum();
    let n = total_interactions as f64;

    let (avg_handle_time, transfer_rate) = if total_interactions > 0 {
        (
            stats
                .iter()
                .map(|s| s.aggregate.handle_time_mean * s.aggregate.volume as f64)
                .sum::<f64>()
                / n,
            stats
                .iter()
                .map(|s| s.aggregate.transfer_rate * s.aggregate.volume as f64)
                .sum::<f64>()
                / n,
        )
    } else {
        (0.0, 0.0)
    };

    let health_score = if benchmarks.is_empty() {
        50.0
    } else {
        benchmarks.iter().map(|b| b.percentile).sum::<f64>() / benchmarks.len() as f64
    };

    SummaryKpis {
        total_interactions,
        process_count: stats.len(),
        avg_handle_time,
        transfer_rate,
        fcr_proxy: 100.0 - transfer_rate,
        batch_cost,
        health_score,
    }
}
