//! Scoring configuration — normalization thresholds, tier weight tables,
//! category boundaries, and confidence floors.
//!
//! Defaults carry the canonical constants of the scoring methodology;
//! `validate()` rejects tables the composite scorer must not silently
//! repair (weights are never renormalized).

use serde::{Deserialize, Serialize};
use skillscope_core::ScoringError;

/// Weight-sum tolerance for tier weight tables.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

// ── Threshold tables ────────────────────────────────────────────────

/// Fixed parameters of the sub-factor normalization functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct NormalizationThresholds {
    /// Handle-time CV at or below this scores a perfect 10.
    pub cv_excellent: f64,
    /// Handle-time CV at or above this scores 0.
    pub cv_poor: f64,
    /// Escalation rate at which the escalation term bottoms out.
    pub escalation_poor: f64,
    /// Transfer rate (fraction) at or below this scores a perfect 10.
    pub transfer_excellent: f64,
    /// Transfer rate (fraction) at or above this scores 0.
    pub transfer_poor: f64,
    /// Exception rate at which exception-based complexity bottoms out.
    pub exception_poor: f64,
    /// Exception rates are capped here before normalization.
    pub exception_cap: f64,
    /// Handle times beyond mean + this many stddevs count as exceptions.
    pub exception_sigma: f64,
    /// Logistic steepness for the repetitiveness curve.
    pub repetitiveness_k: f64,
    /// Monthly volume at which repetitiveness scores 5.
    pub repetitiveness_x0: f64,
    /// Logistic steepness for the ROI curve.
    pub roi_k: f64,
    /// Annual savings (EUR) at which ROI scores 5.
    pub roi_x0: f64,
    /// Fraction of human cost assumed recoverable through automation.
    pub automation_savings_fraction: f64,
    /// Weight of hourly-distribution entropy within the stability score.
    pub entropy_weight: f64,
    /// Weight of the off-hours term within the stability score.
    pub off_hours_weight: f64,
    /// Off-hours fraction at which the off-hours term saturates at 10.
    pub off_hours_scale: f64,
}

impl Default for NormalizationThresholds {
    fn default() -> Self {
        Self {
            cv_excellent: 0.3,
            cv_poor: 1.5,
            escalation_poor: 0.20,
            transfer_excellent: 0.05,
            transfer_poor: 0.30,
            exception_poor: 0.30,
            exception_cap: 0.50,
            exception_sigma: 2.5,
            repetitiveness_k: 0.015,
            repetitiveness_x0: 250.0,
            roi_k: 0.000_02,
            roi_x0: 125_000.0,
            automation_savings_fraction: 0.70,
            entropy_weight: 0.6,
            off_hours_weight: 0.4,
            off_hours_scale: 0.30,
        }
    }
}

// ── Tier weight tables ──────────────────────────────────────────────

/// Gold tier: six sub-factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct GoldWeights {
    pub repetitiveness: f64,
    pub predictability: f64,
    pub structuring: f64,
    pub complexity_inverse: f64,
    pub stability: f64,
    pub roi: f64,
}

impl Default for GoldWeights {
    fn default() -> Self {
        Self {
            repetitiveness: 0.25,
            predictability: 0.20,
            structuring: 0.15,
            complexity_inverse: 0.15,
            stability: 0.10,
            roi: 0.15,
        }
    }
}

impl GoldWeights {
    pub fn sum(&self) -> f64 {
        self.repetitiveness
            + self.predictability
            + self.structuring
            + self.complexity_inverse
            + self.stability
            + self.roi
    }
}

/// Silver tier: three sub-factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SilverWeights {
    pub repetitiveness: f64,
    pub predictability: f64,
    pub roi: f64,
}

impl Default for SilverWeights {
    fn default() -> Self {
        Self {
            repetitiveness: 0.30,
            predictability: 0.30,
            roi: 0.40,
        }
    }
}

impl SilverWeights {
    pub fn sum(&self) -> f64 {
        self.repetitiveness + self.predictability + self.roi
    }
}

// ── Classification and confidence ───────────────────────────────────

/// Readiness category boundaries on the 0-10 composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CategoryThresholds {
    /// Scores at or above this are "automate now".
    pub automate: f64,
    /// Scores at or above this (and below `automate`) are
    /// "assist / copilot"; anything lower is "optimize first".
    pub assist: f64,
}

impl Default for CategoryThresholds {
    fn default() -> Self {
        Self {
            automate: 8.0,
            assist: 5.0,
        }
    }
}

/// Volume floors behind the confidence rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ConfidenceFloors {
    /// Volume above this rates high confidence.
    pub high: usize,
    /// Volume above this (and at or below `high`) rates medium.
    pub medium: usize,
    /// Volume below this raises a degenerate-statistics warning.
    pub degenerate: usize,
}

impl Default for ConfidenceFloors {
    fn default() -> Self {
        Self {
            high: 1000,
            medium: 500,
            degenerate: 10,
        }
    }
}

// ── Top-level config ────────────────────────────────────────────────

/// The full scoring configuration consumed by the compute pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ScoringConfig {
    pub normalization: NormalizationThresholds,
    pub gold_weights: GoldWeights,
    pub silver_weights: SilverWeights,
    pub category_thresholds: CategoryThresholds,
    pub confidence_floors: ConfidenceFloors,
    /// Factor converting batch volume to annual volume
    /// (12 when the batch covers one month).
    pub annualization_factor: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            normalization: NormalizationThresholds::default(),
            gold_weights: GoldWeights::default(),
            silver_weights: SilverWeights::default(),
            category_thresholds: CategoryThresholds::default(),
            confidence_floors: ConfidenceFloors::default(),
            annualization_factor: 12.0,
        }
    }
}

impl ScoringConfig {
    /// Parse a YAML override of the default configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScoringError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ScoringError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject weight tables that do not sum to 1.0 and threshold tables
    /// that are out of order. Weights are never silently renormalized.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let gold_sum = self.gold_weights.sum();
        if (gold_sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ScoringError::WeightSumMismatch {
                tier: "gold".to_string(),
                sum: gold_sum,
            });
        }
        let silver_sum = self.silver_weights.sum();
        if (silver_sum - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ScoringError::WeightSumMismatch {
                tier: "silver".to_string(),
                sum: silver_sum,
            });
        }

        let n = &self.normalization;
        if n.cv_excellent >= n.cv_poor {
            return Err(ScoringError::InvalidConfiguration(
                "cv_excellent must be below cv_poor".to_string(),
            ));
        }
        if n.transfer_excellent >= n.transfer_poor {
            return Err(ScoringError::InvalidConfiguration(
                "transfer_excellent must be below transfer_poor".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&n.automation_savings_fraction) {
            return Err(ScoringError::InvalidConfiguration(
                "automation_savings_fraction must be in 0-1".to_string(),
            ));
        }
        if (n.entropy_weight + n.off_hours_weight - 1.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ScoringError::InvalidConfiguration(
                "stability component weights must sum to 1.0".to_string(),
            ));
        }

        let c = &self.category_thresholds;
        if c.assist >= c.automate {
            return Err(ScoringError::InvalidConfiguration(
                "assist threshold must be below automate threshold".to_string(),
            ));
        }

        let f = &self.confidence_floors;
        if f.medium >= f.high {
            return Err(ScoringError::InvalidConfiguration(
                "medium confidence floor must be below high floor".to_string(),
            ));
        }

        if self.annualization_factor <= 0.0 {
            return Err(ScoringError::InvalidConfiguration(
                "annualization_factor must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
