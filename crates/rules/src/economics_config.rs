//! Economic model assumptions — savings and investment fractions,
//! discount rate, and the fixed breakdown splits.

use serde::{Deserialize, Serialize};
use skillscope_core::ScoringError;

const SHARE_SUM_EPSILON: f64 = 1e-9;

/// One named share of a breakdown table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreakdownShare {
    pub category: String,
    /// Fraction of the total (all shares in a table sum to 1.0).
    pub share: f64,
}

impl BreakdownShare {
    fn new(category: &str, share: f64) -> Self {
        Self {
            category: category.to_string(),
            share,
        }
    }
}

/// Assumptions behind the economic projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EconomicAssumptions {
    /// Fraction of current annual cost assumed saved by automation.
    pub savings_fraction: f64,
    /// Initial investment as a fraction of current annual cost.
    pub investment_fraction: f64,
    /// Discount rate for NPV.
    pub discount_rate: f64,
    /// NPV / ROI horizon in years.
    pub horizon_years: u32,
    /// Per-process savings fraction used for the opportunity list.
    pub opportunity_savings_fraction: f64,
    /// How many top-cost processes to surface as opportunities.
    pub top_opportunities: usize,
    /// Named shares of annual savings.
    pub savings_breakdown: Vec<BreakdownShare>,
    /// Named shares of the initial investment.
    pub cost_breakdown: Vec<BreakdownShare>,
}

impl Default for EconomicAssumptions {
    fn default() -> Self {
        Self {
            savings_fraction: 0.35,
            investment_fraction: 0.10,
            discount_rate: 0.10,
            horizon_years: 3,
            opportunity_savings_fraction: 0.40,
            top_opportunities: 10,
            savings_breakdown: vec![
                BreakdownShare::new("Task automation", 0.45),
                BreakdownShare::new("Operational efficiency", 0.30),
                BreakdownShare::new("FCR improvement", 0.15),
                BreakdownShare::new("Attrition reduction", 0.075),
                BreakdownShare::new("Other", 0.025),
            ],
            cost_breakdown: vec![
                BreakdownShare::new("Software and licenses", 0.43),
                BreakdownShare::new("Implementation", 0.29),
                BreakdownShare::new("Training and change mgmt", 0.18),
                BreakdownShare::new("Contingency", 0.10),
            ],
        }
    }
}

impl EconomicAssumptions {
    pub fn from_yaml(yaml: &str) -> Result<Self, ScoringError> {
        let assumptions: Self =
            serde_yaml::from_str(yaml).map_err(|e| ScoringError::Parse(e.to_string()))?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        for (name, value) in [
            ("savings_fraction", self.savings_fraction),
            ("investment_fraction", self.investment_fraction),
            (
                "opportunity_savings_fraction",
                self.opportunity_savings_fraction,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoringError::InvalidConfiguration(format!(
                    "{} must be in 0-1, got {}",
                    name, value
                )));
            }
        }
        if self.discount_rate < 0.0 {
            return Err(ScoringError::InvalidConfiguration(
                "discount_rate must not be negative".to_string(),
            ));
        }
        if self.horizon_years == 0 {
            return Err(ScoringError::InvalidConfiguration(
                "horizon_years must be at least 1".to_string(),
            ));
        }
        for (name, table) in [
            ("savings_breakdown", &self.savings_breakdown),
            ("cost_breakdown", &self.cost_breakdown),
        ] {
            let sum: f64 = table.iter().map(|s| s.share).sum();
            if (sum - 1.0).abs() > SHARE_SUM_EPSILON {
                return Err(ScoringError::InvalidConfiguration(format!(
                    "{} shares sum to {:.6}, expected 1.0",
                    name, sum
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(EconomicAssumptions::default().validate().is_ok());
    }

    #[test]
    fn default_breakdowns_sum_to_one() {
        let a = EconomicAssumptions::default();
        let savings: f64 = a.savings_breakdown.iter().map(|s| s.share).sum();
        let cost: f64 = a.cost_breakdown.iter().map(|s| s.share).sum();
        assert!((savings - 1.0).abs() < SHARE_SUM_EPSILON);
        assert!((cost - 1.0).abs() < SHARE_SUM_EPSILON);
    }

    #[test]
    fn short_breakdown_rejected() {
        let mut a = EconomicAssumptions::default();
        a.cost_breakdown.pop();
        assert!(a.validate().is_err());
    }

    #[test]
    fn savings_fraction_out_of_range_rejected() {
        let mut a = EconomicAssumptions::default();
        a.savings_fraction = 1.5;
        assert!(a.validate().is_err());
    }

    #[test]
    fn yaml_override() {
        let yaml = r#"
savings_fraction: 0.25
discount_rate: 0.08
"#;
        let a = EconomicAssumptions::from_yaml(yaml).unwrap();
        assert_eq!(a.savings_fraction, 0.25);
        assert_eq!(a.discount_rate, 0.08);
        assert_eq!(a.horizon_years, 3);
    }
}
