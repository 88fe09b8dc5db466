use serde::Serialize;
use tracing::debug;

use skillscope_core::Interaction;

/// Interactions whose total duration falls below this are treated as
/// noise (system glitches, misdials) and removed before aggregation.
pub const MIN_TOTAL_DURATION_SECONDS: f64 = 10.0;

/// What the noise filter did, for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SanitizeReport {
    pub input_count: usize,
    pub kept_count: usize,
    pub removed_count: usize,
    /// Percentage of the input removed; 0 for an empty input.
    pub removed_pct: f64,
}

/// Drop interactions with an implausibly short total duration.
///
/// Only the three duration fields are inspected; everything else passes
/// through untouched.
pub fn sanitize(interactions: &[Interaction]) -> (Vec<Interaction>, SanitizeReport) {
    let kept: Vec<Interaction> = interactions
        .iter()
        .filter(|i| i.handle_time() >= MIN_TOTAL_DURATION_SECONDS)
        .cloned()
        .collect();

    let input_count = interactions.len();
    let kept_count = kept.len();
    let removed_count = input_count - kept_count;
    let removed_pct = if input_count > 0 {
        removed_count as f64 / input_count as f64 * 100.0
    } else {
        0.0
    };

    debug!(
        input = input_count,
        kept = kept_count,
        removed = removed_count,
        "noise filtering complete"
    );

    (
        kept,
        SanitizeReport {
            input_count,
            kept_count,
            removed_count,
            removed_pct,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make(talk: f64, hold: f64, wrapup: f64) -> Interaction {
        Interaction {
            id: "i".to_string(),
            start_time: Utc::now(),
            process_name: "Billing".to_string(),
            channel: "voice".to_string(),
            talk_seconds: talk,
            hold_seconds: hold,
            wrapup_seconds: wrapup,
            agent_id: "a".to_string(),
            transferred: false,
            caller_id: None,
        }
    }

    #[test]
    fn nine_seconds_removed_ten_kept() {
        let input = vec![make(0.0, 0.0, 9.0), make(0.0, 0.0, 10.0)];
        let (kept, report) = sanitize(&input);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].wrapup_seconds, 10.0);
        assert_eq!(report.removed_count, 1);
        assert!((report.removed_pct - 50.0).abs() < 1e-9);
    }

    #[test]
    fn duration_summed_across_fields() {
        // 4 + 3 + 3 = 10, kept even though each field is short.
        let input = vec![make(4.0, 3.0, 3.0)];
        let (kept, _) = sanitize(&input);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn empty_input_reports_zero_pct() {
        let (kept, report) = sanitize(&[]);
        assert!(kept.is_empty());
        assert_eq!(report.removed_pct, 0.0);
        assert_eq!(report.input_count, 0);
    }

    #[test]
    fn all_noise_removed() {
        let input = vec![make(1.0, 0.0, 0.0), make(0.0, 2.0, 0.0)];
        let (kept, report) = sanitize(&input);
        assert!(kept.is_empty());
        assert_eq!(report.removed_pct, 100.0);
    }
}
