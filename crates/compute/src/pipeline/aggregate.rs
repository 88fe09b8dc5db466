use std::collections::HashMap;

use chrono::Timelike;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use skillscope_core::Interaction;
use skillscope_rules::NormalizationThresholds;

/// Statistical aggregates for one process (queue/skill).
///
/// Only materialized for non-empty groups, so `volume > 0` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessAggregate {
    pub process_name: String,
    pub volume: usize,
    /// Mean handle time (talk + hold + wrap-up) in seconds.
    pub handle_time_mean: f64,
    /// Population standard deviation of handle time.
    pub handle_time_stddev: f64,
    /// Coefficient of variation (stddev / mean, 0 when mean is 0).
    pub handle_time_cv: f64,
    /// Coefficient of variation over talk time only.
    pub talk_time_cv: f64,
    /// Transferred interactions as a percentage of volume (0-100).
    pub transfer_rate: f64,
    pub hold_time_mean: f64,
    /// Labor cost of the batch for this process.
    pub total_cost: f64,
}

/// Aggregate plus the per-process detail the scorer needs but the
/// tabular output does not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessStats {
    pub aggregate: ProcessAggregate,
    /// Interaction counts per hour of day (0-23).
    pub hourly_volume: [u64; 24],
    /// Fraction of handle times beyond mean + k stddevs, capped.
    pub exception_rate: f64,
}

/// Group cleaned interactions by process and compute per-group
/// statistics. Groups are processed in parallel; the result is sorted
/// by volume descending (name ascending on ties) so output is
/// deterministic regardless of scheduling.
///
/// An empty input yields an empty list; callers treat that as
/// insufficient data rather than an error.
pub fn aggregate_by_process(
    interactions: &[Interaction],
    cost_per_hour: f64,
    thresholds: &NormalizationThresholds,
) -> Vec<ProcessStats> {
    let mut groups: HashMap<&str, Vec<&Interaction>> = HashMap::new();
    for interaction in interactions {
        groups
            .entry(interaction.process_name.as_str())
            .or_default()
            .push(interaction);
    }

    let groups: Vec<(&str, Vec<&Interaction>)> = groups.into_iter().collect();

    let mut stats: Vec<ProcessStats> = groups
        .par_iter()
        .map(|(name, group)| compute_stats(name, group, cost_per_hour, thresholds))
        .collect();

    stats.sort_by(|a, b| {
        b.aggregate
            .volume
            .cmp(&a.aggregate.volume)
            .then_with(|| a.aggregate.process_name.cmp(&b.aggregate.process_name))
    });

    debug!(
        interactions = interactions.len(),
        processes = stats.len(),
        "per-process aggregation complete"
    );

    stats
}

fn compute_stats(
    name: &str,
    group: &[&Interaction],
    cost_per_hour: f64,
    thresholds: &NormalizationThresholds,
) -> ProcessStats {
    let volume = group.len();
    let n = volume as f64;

    let handle_times: Vec<f64> = group.iter().map(|i| i.handle_time()).collect();
    let (handle_mean, handle_std) = mean_and_stddev(&handle_times);
    let handle_cv = coefficient_of_variation(handle_mean, handle_std);

    let talk_times: Vec<f64> = group.iter().map(|i| i.talk_seconds).collect();
    let (talk_mean, talk_std) = mean_and_stddev(&talk_times);
    let talk_cv = coefficient_of_variation(talk_mean, talk_std);

    let transfers = group.iter().filter(|i| i.transferred).count();
    let transfer_rate = transfers as f64 / n * 100.0;

    let hold_time_mean = group.iter().map(|i| i.hold_seconds).sum::<f64>() / n;

    let total_cost = handle_mean / 3600.0 * cost_per_hour * n;

    let mut hourly_volume = [0u64; 24];
    for i in group {
        hourly_volume[i.start_time.hour() as usize] += 1;
    }

    let exception_rate = exception_rate(&handle_times, handle_mean, handle_std, thresholds);

    ProcessStats {
        aggregate: ProcessAggregate {
            process_name: name.to_string(),
            volume,
            handle_time_mean: handle_mean,
            handle_time_stddev: handle_std,
            handle_time_cv: handle_cv,
            talk_time_cv: talk_cv,
            transfer_rate,
            hold_time_mean,
            total_cost,
        },
        hourly_volume,
        exception_rate,
    }
}

/// Mean and population standard deviation.
fn mean_and_stddev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// stddev / mean, defined as 0 for a zero mean.
fn coefficient_of_variation(mean: f64, stddev: f64) -> f64 {
    if mean <= f64::EPSILON {
        0.0
    } else {
        stddev / mean
    }
}

/// Fraction of handle times beyond mean + `exception_sigma` stddevs,
/// capped at `exception_cap`. Zero variance means no exceptions.
fn exception_rate(
    handle_times: &[f64],
    mean: f64,
    stddev: f64,
    thresholds: &NormalizationThresholds,
) -> f64 {
    if handle_times.is_empty() || stddev <= f64::EPSILON {
        return 0.0;
    }
    let cutoff = mean + thresholds.exception_sigma * stddev;
    let exceptions = handle_times.iter().filter(|&&t| t > cutoff).count();
    let rate = exceptions as f64 / handle_times.len() as f64;
    rate.min(thresholds.exception_cap)
}
