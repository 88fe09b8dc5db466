//! Economic projection: annualized cost, automation savings, payback,
//! ROI and NPV over the planning horizon, plus the ranked opportunity
//! list.

use serde::Serialize;
use tracing::debug;

use skillscope_core::AnalysisWarning;
use skillscope_rules::EconomicAssumptions;

use super::aggregate::ProcessStats;

/// How tractable a process looks for automation, independent of the
/// full readiness score. Drives the opportunity list only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationPotential {
    High,
    Medium,
    Low,
}

/// One absolute line of a breakdown table (EUR).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub category: String,
    pub amount: f64,
}

/// Portfolio-level economic projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomicModel {
    /// Annualized labor cost of the analyzed portfolio, EUR.
    pub current_annual_cost: f64,
    /// Annualized cost under the automation scenario, EUR.
    pub future_annual_cost: f64,
    /// Projected annual savings under the automation scenario, EUR.
    pub annual_savings: f64,
    /// One-off investment to get there, EUR.
    pub initial_investment: f64,
    /// Months until the investment is recovered. Undefined when the
    /// projection yields no savings.
    pub payback_months: Option<u32>,
    /// Return over the horizon as a multiple of the investment.
    pub roi_multiple: f64,
    /// Net present value over the horizon at the discount rate, EUR.
    pub npv: f64,
    pub savings_breakdown: Vec<BreakdownLine>,
    pub cost_breakdown: Vec<BreakdownLine>,
}

/// One high-cost process worth acting on first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub process_name: String,
    pub volume: usize,
    pub annual_cost: f64,
    pub potential_savings: f64,
    pub automation_potential: AutomationPotential,
}

/// Annual savings projected for a single process, used as the ROI
/// scoring input.
pub fn projected_annual_savings(
    batch_cost: f64,
    annualization_factor: f64,
    savings_fraction: f64,
) -> f64 {
    batch_cost * annualization_factor * savings_fraction
}

/// Build the portfolio economic model from the batch labor cost.
///
/// A non-positive savings projection leaves payback undefined and
/// raises a warning instead of reporting a nonsense horizon.
pub fn build_model(
    batch_cost_total: f64,
    annualization_factor: f64,
    assumptions: &EconomicAssumptions,
    warnings: &mut Vec<AnalysisWarning>,
) -> EconomicModel {
    let current_annual_cost = batch_cost_total * annualization_factor;
    let annual_savings = current_annual_cost * assumptions.savings_fraction;
    let future_annual_cost = current_annual_cost - annual_savings;
    let initial_investment = current_annual_cost * assumptions.investment_fraction;

    let payback_months = if annual_savings > 0.0 {
        Some((initial_investment / annual_savings * 12.0).ceil() as u32)
    } else {
        warnings.push(AnalysisWarning::PayoffUndefined);
        None
    };

    let horizon = assumptions.horizon_years as f64;
    let roi_multiple = if initial_investment > 0.0 {
        (annual_savings * horizon - initial_investment) / initial_investment
    } else {
        0.0
    };

    let mut npv = -initial_investment;
    for year in 1..=assumptions.horizon_years {
        npv += annual_savings / (1.0 + assumptions.discount_rate).powi(year as i32);
    }

    debug!(
        current_annual_cost,
        annual_savings, initial_investment, npv, "economic model built"
    );

    EconomicModel {
        current_annual_cost,
        future_annual_cost,
        annual_savings,
        initial_investment,
        payback_months,
        roi_multiple,
        npv,
        savings_breakdown: scale_breakdown(&assumptions.savings_breakdown, annual_savings),
        cost_breakdown: scale_breakdown(&assumptions.cost_breakdown, initial_investment),
    }
}

fn scale_breakdown(
    shares: &[skillscope_rules::BreakdownShare],
    total: f64,
) -> Vec<BreakdownLine> {
    shares
        .iter()
        .map(|s| BreakdownLine {
            category: s.category.clone(),
            amount: s.share * total,
        })
        .collect()
}

/// Rank the costliest processes as automation opportunities.
///
/// Input is already sorted by volume; opportunities re-rank by annual
/// cost so a low-volume, long-handle-time queue can still surface.
pub fn opportunities(
    stats: &[ProcessStats],
    annualization_factor: f64,
    assumptions: &EconomicAssumptions,
) -> Vec<Opportunity> {
    let mut opportunities: Vec<Opportunity> = stats
        .iter()
        .map(|s| {
            let annual_cost = s.aggregate.total_cost * annualization_factor;
            Opportunity {
                process_name: s.aggregate.process_name.clone(),
                volume: s.aggregate.volume,
                annual_cost,
                potential_savings: annual_cost * assumptions.opportunity_savings_fraction,
                automation_potential: automation_potential(s),
            }
        })
        .collect();

    opportunities.sort_by(|a, b| {
        b.annual_cost
            .total_cmp(&a.annual_cost)
            .then_with(|| a.process_name.cmp(&b.process_name))
    });
    opportunities.truncate(assumptions.top_opportunities);
    opportunities
}

fn automation_potential(stats: &ProcessStats) -> AutomationPotential {
    let agg = &stats.aggregate;
    if agg.handle_time_cv < 0.3 && agg.transfer_rate < 15.0 {
        AutomationPotential::High
    } else if agg.handle_time_cv < 0.5 {
        AutomationPotential::Medium
    } else {
        AutomationPotential::Low
    }
}
