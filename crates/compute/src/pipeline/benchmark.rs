//! Industry benchmark comparison: portfolio KPIs placed on a percentile
//! scale against fixed reference points.

use serde::Serialize;

use skillscope_rules::{BenchmarkConfig, KpiDirection, KpiReference};

use super::aggregate::ProcessStats;

/// Anchor percentiles matching the [p25, p50, p75, p90] reference grid.
const GRID_ANCHORS: [f64; 4] = [25.0, 50.0, 75.0, 90.0];

/// One KPI placed against its industry reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkPoint {
    pub kpi_name: String,
    pub user_value: f64,
    /// Industry median (P50) reference.
    pub industry_value: f64,
    pub unit: String,
    /// Estimated standing, clamped to [1, 99]. Higher is always better
    /// here regardless of the KPI's own direction.
    pub percentile: f64,
    pub p25: f64,
    pub p75: f64,
    pub p90: f64,
}

/// Compare portfolio-level KPIs against the configured references.
///
/// AHT and transfer-derived FCR are volume-weighted across processes;
/// cost per interaction is total cost over total volume. The CSAT point
/// is only produced when a survey average was supplied. Empty input
/// yields no points.
pub fn derive_benchmarks(
    stats: &[ProcessStats],
    avg_csat: Option<f64>,
    config: &BenchmarkConfig,
) -> Vec<BenchmarkPoint> {
    let total_volume: usize = stats.iter().map(|s| s.aggregate.volume).sum();
    if total_volume == 0 {
        return Vec::new();
    }
    let n = total_volume as f64;

    let aht = stats
        .iter()
        .map(|s| s.aggregate.handle_time_mean * s.aggregate.volume as f64)
        .sum::<f64>()
        / n;
    let transfer_rate = stats
        .iter()
        .map(|s| s.aggregate.transfer_rate * s.aggregate.volume as f64)
        .sum::<f64>()
        / n;
    let fcr = 100.0 - transfer_rate;
    let cost_per_interaction = stats.iter().map(|s| s.aggregate.total_cost).sum::<f64>() / n;

    let mut points = Vec::new();
    let mut push = |kpi: &str, value: f64| {
        if let Some(reference) = config.reference(kpi) {
            points.push(make_point(reference, value, config));
        }
    };

    push("AHT", aht);
    push("FCR", fcr);
    if let Some(csat) = avg_csat {
        // Survey averages arrive on a 0-100 scale; references are /5.
        push("CSAT", csat / 20.0);
    }
    push("Cost per interaction", cost_per_interaction);

    points
}

fn make_point(reference: &KpiReference, value: f64, config: &BenchmarkConfig) -> BenchmarkPoint {
    let grid = config.grid_for(reference);
    BenchmarkPoint {
        kpi_name: reference.kpi.clone(),
        user_value: value,
        industry_value: reference.p50,
        unit: reference.unit.clone(),
        percentile: percentile_of(value, &grid, reference.direction),
        p25: grid[0],
        p75: grid[2],
        p90: grid[3],
    }
}

/// Place a value on the percentile scale via piecewise-linear
/// interpolation over the ascending reference grid, extrapolating with
/// the edge segment's slope and clamping to [1, 99]. Lower-is-better
/// KPIs are inverted so a good value always reads as a high percentile.
pub fn percentile_of(value: f64, grid: &[f64; 4], direction: KpiDirection) -> f64 {
    let raw = interpolate(value, grid);
    let position = match direction {
        KpiDirection::HigherIsBetter => raw,
        KpiDirection::LowerIsBetter => 100.0 - raw,
    };
    position.clamp(1.0, 99.0)
}

fn interpolate(value: f64, grid: &[f64; 4]) -> f64 {
    // Pick the segment containing the value; out-of-range values use
    // the nearest segment so the mapping stays monotone.
    let segment = if value <= grid[1] {
        0
    } else if value <= grid[2] {
        1
    } else {
        2
    };
    let (x0, x1) = (grid[segment], grid[segment + 1]);
    let (y0, y1) = (GRID_ANCHORS[segment], GRID_ANCHORS[segment + 1]);
    y0 + (value - x0) / (x1 - x0) * (y1 - y0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::aggregate::ProcessAggregate;

    fn stats(volume: usize, handle_mean: f64, transfer: f64, cost: f64) -> ProcessStats {
        ProcessStats {
            aggregate: ProcessAggregate {
                process_name: "P".to_string(),
                volume,
                handle_time_mean: handle_mean,
                handle_time_stddev: 0.0,
                handle_time_cv: 0.0,
                talk_time_cv: 0.0,
                transfer_rate: transfer,
                hold_time_mean: 0.0,
                total_cost: cost,
            },
            hourly_volume: [0; 24],
            exception_rate: 0.0,
        }
    }

    fn aht_grid() -> [f64; 4] {
        let config = BenchmarkConfig::default();
        let aht = config.reference("AHT").unwrap();
        config.grid_for(aht)
    }

    #[test]
    fn value_at_p50_reads_fiftieth() {
        let grid = aht_grid();
        let p = percentile_of(420.0, &grid, KpiDirection::LowerIsBetter);
        assert!((p - 50.0).abs() < 1e-9);
    }

    #[test]
    fn lower_is_better_inverts() {
        let grid = aht_grid();
        // An AHT at the p25 reference is better than three quarters of
        // the industry.
        let p = percentile_of(378.0, &grid, KpiDirection::LowerIsBetter);
        assert!((p - 75.0).abs() < 1e-9);
        let p = percentile_of(462.0, &grid, KpiDirection::LowerIsBetter);
        assert!((p - 25.0).abs() < 1e-9);
    }

    #[test]
    fn extreme_values_clamp() {
        let grid = aht_grid();
        assert_eq!(percentile_of(1.0, &grid, KpiDirection::LowerIsBetter), 99.0);
        assert_eq!(
            percentile_of(10_000.0, &grid, KpiDirection::LowerIsBetter),
            1.0
        );
    }

    #[test]
    fn interpolation_is_monotone() {
        let grid = aht_grid();
        let mut last = f64::INFINITY;
        for value in [300.0, 378.0, 420.0, 462.0, 491.0, 600.0] {
            let p = percentile_of(value, &grid, KpiDirection::LowerIsBetter);
            assert!(p <= last);
            last = p;
        }
    }

    #[test]
    fn portfolio_kpis_are_volume_weighted() {
        let config = BenchmarkConfig::default();
        let stats = vec![stats(300, 400.0, 10.0, 900.0), stats(100, 600.0, 30.0, 700.0)];
        let points = derive_benchmarks(&stats, None, &config);

        let aht = points.iter().find(|p| p.kpi_name == "AHT").unwrap();
        assert!((aht.user_value - 450.0).abs() < 1e-9);

        let fcr = points.iter().find(|p| p.kpi_name == "FCR").unwrap();
        // Weighted transfer rate 15% -> FCR proxy 85%.
        assert!((fcr.user_value - 85.0).abs() < 1e-9);
        assert!(fcr.percentile > 50.0);

        let cpi = points
            .iter()
            .find(|p| p.kpi_name == "Cost per interaction")
            .unwrap();
        assert!((cpi.user_value - 4.0).abs() < 1e-9);
    }

    #[test]
    fn csat_point_requires_survey_data() {
        let config = BenchmarkConfig::default();
        let stats = vec![stats(100, 400.0, 10.0, 400.0)];
        let without = derive_benchmarks(&stats, None, &config);
        assert!(!without.iter().any(|p| p.kpi_name == "CSAT"));

        let with = derive_benchmarks(&stats, Some(86.0), &config);
        let csat = with.iter().find(|p| p.kpi_name == "CSAT").unwrap();
        // 86/100 survey average maps to 4.3 on the /5 scale, the P50.
        assert!((csat.user_value - 4.3).abs() < 1e-9);
        assert!((csat.percentile - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_yields_no_points() {
        let config = BenchmarkConfig::default();
        assert!(derive_benchmarks(&[], None, &config).is_empty());
    }
}
