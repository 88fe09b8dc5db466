use serde::Serialize;
use thiserror::Error;

/// Fatal errors. These abort the pipeline and propagate to the caller;
/// data-quality conditions are reported as [`AnalysisWarning`] instead.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("cost_per_hour must be positive, got {0}")]
    NonPositiveCostPerHour(f64),

    #[error("{tier} tier weights sum to {sum:.6}, expected 1.0")]
    WeightSumMismatch { tier: String, sum: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("config parse error: {0}")]
    Parse(String),
}

/// Non-fatal data-quality conditions, collected alongside the result.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisWarning {
    /// Zero interactions survived noise filtering.
    #[error("no interactions left after noise filtering")]
    InsufficientData,

    /// Fewer distinct processes than needed for a representative analysis.
    #[error("only {count} distinct processes (3 or more recommended)")]
    FewProcesses { count: usize },

    /// A process scored below the usability floor; its score carries
    /// low confidence.
    #[error("process '{process}' has only {volume} interactions")]
    DegenerateStatistics { process: String, volume: usize },

    /// Annual savings are zero or negative, so payback and ROI are
    /// reported as not applicable.
    #[error("insufficient savings to compute payback")]
    PayoffUndefined,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_field() {
        let e = ScoringError::NonPositiveCostPerHour(-1.0);
        assert!(e.to_string().contains("cost_per_hour"));

        let e = ScoringError::WeightSumMismatch {
            tier: "gold".to_string(),
            sum: 0.95,
        };
        assert!(e.to_string().contains("gold"));
        assert!(e.to_string().contains("0.95"));
    }

    #[test]
    fn warning_serializes_with_kind_tag() {
        let w = AnalysisWarning::FewProcesses { count: 2 };
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"kind\":\"few_processes\""));
    }
}
