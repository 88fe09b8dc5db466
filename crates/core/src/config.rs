use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Externally supplied analysis parameters.
///
/// `cost_per_hour` is the only required field; everything else degrades
/// gracefully when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticConfig {
    /// Fully loaded agent labor cost per hour (must be > 0).
    pub cost_per_hour: f64,
    /// Average CSAT on a 0-100 scale, if the client supplied one.
    #[serde(default)]
    pub avg_csat: Option<f64>,
    /// Individual CSAT samples for the distribution adjustment (gold tier).
    #[serde(default)]
    pub csat_samples: Option<Vec<f64>>,
    /// Fraction of interaction data captured in structured fields (0-1).
    #[serde(default)]
    pub structured_fields_pct: Option<f64>,
    /// Escalation rate (0-1) when the client tracks escalations separately
    /// from transfers.
    #[serde(default)]
    pub escalation_rate: Option<f64>,
    /// Queue name lists for customer-value segmentation.
    #[serde(default)]
    pub segment_mapping: Option<SegmentMapping>,
}

impl StaticConfig {
    /// Minimal config with just the required labor cost.
    pub fn with_cost_per_hour(cost_per_hour: f64) -> Self {
        Self {
            cost_per_hour,
            avg_csat: None,
            csat_samples: None,
            structured_fields_pct: None,
            escalation_rate: None,
            segment_mapping: None,
        }
    }

    /// Reject configurations the pipeline cannot score with.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.cost_per_hour <= 0.0 || !self.cost_per_hour.is_finite() {
            return Err(ScoringError::NonPositiveCostPerHour(self.cost_per_hour));
        }
        if let Some(csat) = self.avg_csat {
            if !(0.0..=100.0).contains(&csat) {
                return Err(ScoringError::InvalidConfiguration(format!(
                    "avg_csat must be in 0-100, got {}",
                    csat
                )));
            }
        }
        if let Some(pct) = self.structured_fields_pct {
            if !(0.0..=1.0).contains(&pct) {
                return Err(ScoringError::InvalidConfiguration(format!(
                    "structured_fields_pct must be in 0-1, got {}",
                    pct
                )));
            }
        }
        if let Some(rate) = self.escalation_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ScoringError::InvalidConfiguration(format!(
                    "escalation_rate must be in 0-1, got {}",
                    rate
                )));
            }
        }
        Ok(())
    }
}

/// Queue name lists defining customer-value segments.
///
/// Matching is fuzzy (case-insensitive, bidirectional containment) and
/// checked high first, then low, then medium; unmatched queues default
/// to medium.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentMapping {
    #[serde(default)]
    pub high_value_queues: Vec<String>,
    #[serde(default)]
    pub medium_value_queues: Vec<String>,
    #[serde(default)]
    pub low_value_queues: Vec<String>,
}

impl SegmentMapping {
    /// A mapping with no queues in any segment classifies everything
    /// as medium.
    pub fn is_empty(&self) -> bool {
        self.high_value_queues.is_empty()
            && self.medium_value_queues.is_empty()
            && self.low_value_queues.is_empty()
    }
}
