//! Composite readiness scoring. Sub-factors from the normalizer are
//! combined with tier-specific weight tables; the weighted sum stays on
//! the same 0-10 scale because each table sums to 1.0.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use skillscope_core::{Confidence, Tier};
use skillscope_rules::ScoringConfig;

use super::aggregate::ProcessStats;
use super::normalize;

/// One weighted component of a composite score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubFactor {
    pub name: &'static str,
    pub display_name: &'static str,
    /// Normalized value on the 0-10 scale.
    pub score: f64,
    pub weight: f64,
    pub description: &'static str,
    /// Raw inputs the score was derived from, for auditability.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub details: IndexMap<&'static str, f64>,
}

fn factor(
    name: &'static str,
    display_name: &'static str,
    description: &'static str,
    score: f64,
    weight: f64,
    details: &[(&'static str, f64)],
) -> SubFactor {
    SubFactor {
        name,
        display_name,
        score,
        weight,
        description,
        details: details.iter().copied().collect(),
    }
}

/// Where a process lands on the automation roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessCategory {
    AutomateNow,
    AssistCopilot,
    OptimizeFirst,
}

/// Scored readiness for a single process.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessResult {
    /// Composite score, 0-10.
    pub score: f64,
    pub sub_factors: Vec<SubFactor>,
    pub category: ReadinessCategory,
    pub confidence: Confidence,
    /// Present when the score cannot be taken at face value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
}

/// Per-process scoring inputs beyond the aggregate statistics.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub stats: &'a ProcessStats,
    /// Projected annual savings for this process, EUR.
    pub annual_savings: f64,
    /// Fraction of interactions carrying structured fields, 0-1.
    pub structured_fields_pct: f64,
    /// Known escalation rate, when the telephony platform reports one.
    pub escalation_rate: Option<f64>,
    /// Individual CSAT samples, when available at this tier.
    pub csat_samples: Option<&'a [f64]>,
}

/// Score one process at the given data tier.
pub fn score_process(tier: Tier, inputs: &ScoreInputs<'_>, config: &ScoringConfig) -> ReadinessResult {
    match tier {
        Tier::Gold => score_gold(inputs, config),
        Tier::Silver => score_silver(inputs, config),
        Tier::Bronze => bronze_stub(inputs, config),
    }
}

fn score_gold(inputs: &ScoreInputs<'_>, config: &ScoringConfig) -> ReadinessResult {
    let t = &config.normalization;
    let w = &config.gold_weights;
    let agg = &inputs.stats.aggregate;

    let sub_factors = vec![
        factor(
            "repetitiveness",
            "Repetitiveness",
            "volume-driven task repetition",
            normalize::repetitiveness(agg.volume, t),
            w.repetitiveness,
            &[("volume", agg.volume as f64)],
        ),
        factor(
            "predictability",
            "Predictability",
            "handle-time consistency and escalation behavior",
            normalize::predictability(agg.handle_time_cv, inputs.escalation_rate, t),
            w.predictability,
            &[
                ("handle_time_cv", agg.handle_time_cv),
                ("escalation_rate", inputs.escalation_rate.unwrap_or(0.0)),
            ],
        ),
        factor(
            "structuring",
            "Data structuring",
            "share of interactions carrying structured fields",
            normalize::structuring(inputs.structured_fields_pct),
            w.structuring,
            &[("structured_fields_pct", inputs.structured_fields_pct)],
        ),
        factor(
            "complexity",
            "Complexity (inverse)",
            "freedom from outlier handle times",
            normalize::exception_complexity(inputs.stats.exception_rate, t),
            w.complexity_inverse,
            &[("exception_rate", inputs.stats.exception_rate)],
        ),
        factor(
            "stability",
            "Demand stability",
            "evenness of the arrival pattern across the day",
            normalize::stability(&inputs.stats.hourly_volume, t),
            w.stability,
            &[(
                "off_hours_fraction",
                normalize::off_hours_fraction(&inputs.stats.hourly_volume),
            )],
        ),
        factor(
            "roi",
            "ROI potential",
            "projected annual savings from automation",
            normalize::roi_score(inputs.annual_savings, t),
            w.roi,
            &[("annual_savings", inputs.annual_savings)],
        ),
    ];

    let mut score = weighted_sum(&sub_factors);
    score = apply_csat_adjustment(score, inputs.csat_samples);

    finish(agg.process_name.as_str(), agg.volume, score, sub_factors, None, config)
}

fn score_silver(inputs: &ScoreInputs<'_>, config: &ScoringConfig) -> ReadinessResult {
    let t = &config.normalization;
    let w = &config.silver_weights;
    let agg = &inputs.stats.aggregate;

    let sub_factors = vec![
        factor(
            "repetitiveness",
            "Repetitiveness",
            "volume-driven task repetition",
            normalize::repetitiveness(agg.volume, t),
            w.repetitiveness,
            &[("volume", agg.volume as f64)],
        ),
        factor(
            "predictability",
            "Predictability",
            "handle-time consistency and escalation behavior",
            normalize::predictability(agg.handle_time_cv, inputs.escalation_rate, t),
            w.predictability,
            &[
                ("handle_time_cv", agg.handle_time_cv),
                ("escalation_rate", inputs.escalation_rate.unwrap_or(0.0)),
            ],
        ),
        factor(
            "roi",
            "ROI potential",
            "projected annual savings from automation",
            normalize::roi_score(inputs.annual_savings, t),
            w.roi,
            &[("annual_savings", inputs.annual_savings)],
        ),
    ];

    let score = weighted_sum(&sub_factors);
    finish(agg.process_name.as_str(), agg.volume, score, sub_factors, None, config)
}

/// Bronze batches lack the timing and routing detail every sub-factor
/// depends on, so no score is claimed.
fn bronze_stub(inputs: &ScoreInputs<'_>, config: &ScoringConfig) -> ReadinessResult {
    let agg = &inputs.stats.aggregate;
    finish(
        agg.process_name.as_str(),
        agg.volume,
        0.0,
        Vec::new(),
        Some(
            "bronze data carries volume only; readiness cannot be scored \
             without handle-time and routing detail"
                .to_string(),
        ),
        config,
    )
}

fn finish(
    process: &str,
    volume: usize,
    score: f64,
    sub_factors: Vec<SubFactor>,
    interpretation: Option<String>,
    config: &ScoringConfig,
) -> ReadinessResult {
    let score = score.clamp(0.0, 10.0);
    let category = categorize(score, config);
    let confidence = confidence_for_volume(volume, config);
    debug!(process, score, ?category, "process scored");
    ReadinessResult {
        score,
        sub_factors,
        category,
        confidence,
        interpretation,
    }
}

fn weighted_sum(sub_factors: &[SubFactor]) -> f64 {
    sub_factors.iter().map(|f| f.score * f.weight).sum()
}

/// Map a composite score onto the roadmap categories.
pub fn categorize(score: f64, config: &ScoringConfig) -> ReadinessCategory {
    let c = &config.category_thresholds;
    if score >= c.automate {
        ReadinessCategory::AutomateNow
    } else if score >= c.assist {
        ReadinessCategory::AssistCopilot
    } else {
        ReadinessCategory::OptimizeFirst
    }
}

/// Rate how far the volume floor supports the statistics behind a score.
pub fn confidence_for_volume(volume: usize, config: &ScoringConfig) -> Confidence {
    let f = &config.confidence_floors;
    if volume > f.high {
        Confidence::High
    } else if volume > f.medium {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Nudge the composite score by up to 5% based on the shape of the
/// CSAT distribution. Left-skewed samples (most ratings high, a thin
/// tail of bad ones) indicate a stable experience worth a small boost;
/// right skew and heavy tails get the opposite. Needs more than ten
/// samples to say anything.
fn apply_csat_adjustment(score: f64, samples: Option<&[f64]>) -> f64 {
    let Some(samples) = samples else {
        return score;
    };
    if samples.len() <= 10 {
        return score;
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    if variance <= f64::EPSILON {
        return score;
    }
    let stddev = variance.sqrt();
    let skewness = samples.iter().map(|v| ((v - mean) / stddev).powi(3)).sum::<f64>() / n;
    let kurtosis_excess =
        samples.iter().map(|v| ((v - mean) / stddev).powi(4)).sum::<f64>() / n - 3.0;

    let adjustment =
        (-skewness * 0.025 - kurtosis_excess.max(0.0) * 0.005).clamp(-0.05, 0.05);
    (score * (1.0 + adjustment)).clamp(0.0, 10.0)
}
