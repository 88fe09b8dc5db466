//! Industry benchmark references — fixed P50 values per KPI plus the
//! multipliers used to derive the remaining percentile points when no
//! explicit reference data is supplied.

use serde::{Deserialize, Serialize};
use skillscope_core::ScoringError;

/// Whether a larger KPI value is better or worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiDirection {
    HigherIsBetter,
    LowerIsBetter,
}

/// Fixed industry reference for one KPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KpiReference {
    pub kpi: String,
    /// Industry median.
    pub p50: f64,
    pub direction: KpiDirection,
    pub unit: String,
    /// Explicit percentile points; derived from `p50` when absent.
    #[serde(default)]
    pub p25: Option<f64>,
    #[serde(default)]
    pub p75: Option<f64>,
    #[serde(default)]
    pub p90: Option<f64>,
}

impl KpiReference {
    fn new(kpi: &str, p50: f64, direction: KpiDirection, unit: &str) -> Self {
        Self {
            kpi: kpi.to_string(),
            p50,
            direction,
            unit: unit.to_string(),
            p25: None,
            p75: None,
            p90: None,
        }
    }

    /// Ascending reference grid [p25, p50, p75, p90], filling missing
    /// points from the configured multipliers.
    pub fn grid(&self, m: &DerivedPercentiles) -> [f64; 4] {
        [
            self.p25.unwrap_or(self.p50 * m.p25),
            self.p50,
            self.p75.unwrap_or(self.p50 * m.p75),
            self.p90.unwrap_or(self.p50 * m.p90),
        ]
    }
}

/// Multipliers applied to P50 to derive the other reference points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DerivedPercentiles {
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
}

impl Default for DerivedPercentiles {
    fn default() -> Self {
        Self {
            p25: 0.90,
            p75: 1.10,
            p90: 1.17,
        }
    }
}

/// Complete benchmark reference set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BenchmarkConfig {
    pub references: Vec<KpiReference>,
    pub derived: DerivedPercentiles,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            references: vec![
                KpiReference::new("AHT", 420.0, KpiDirection::LowerIsBetter, "s"),
                KpiReference::new("FCR", 72.0, KpiDirection::HigherIsBetter, "%"),
                KpiReference::new("CSAT", 4.3, KpiDirection::HigherIsBetter, "/5"),
                KpiReference::new(
                    "Cost per interaction",
                    3.5,
                    KpiDirection::LowerIsBetter,
                    "EUR",
                ),
            ],
            derived: DerivedPercentiles::default(),
        }
    }
}

impl BenchmarkConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ScoringError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ScoringError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Look up a reference by KPI name.
    pub fn reference(&self, kpi: &str) -> Option<&KpiReference> {
        self.references.iter().find(|r| r.kpi == kpi)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        for r in &self.references {
            if r.p50 <= 0.0 {
                return Err(ScoringError::InvalidConfiguration(format!(
                    "benchmark '{}' must have a positive P50",
                    r.kpi
                )));
            }
            let grid = self.grid_for(r);
            if !grid.windows(2).all(|w| w[0] < w[1]) {
                return Err(ScoringError::InvalidConfiguration(format!(
                    "benchmark '{}' reference points must be strictly ascending",
                    r.kpi
                )));
            }
        }
        Ok(())
    }

    /// Ascending [p25, p50, p75, p90] grid for a reference.
    pub fn grid_for(&self, reference: &KpiReference) -> [f64; 4] {
        reference.grid(&self.derived)
    }
}
