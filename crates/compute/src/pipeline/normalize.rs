//! Sub-factor normalization: raw per-process statistics mapped onto the
//! 0-10 scale the composite scorer consumes.
//!
//! Linear ramps clamp at both ends; volume-like inputs go through a
//! logistic so the score saturates instead of growing without bound.

use skillscope_rules::NormalizationThresholds;

/// Clamp a raw sub-factor onto the scoring scale.
fn clamp10(value: f64) -> f64 {
    value.clamp(0.0, 10.0)
}

/// Predictability from the handle-time coefficient of variation.
///
/// A CV at or below `cv_excellent` scores 10, at or above `cv_poor`
/// scores 0, linear in between. When an escalation rate is known the
/// result is an even blend of the CV ramp and an escalation ramp that
/// bottoms out at `escalation_poor`.
pub fn predictability(
    cv: f64,
    escalation_rate: Option<f64>,
    thresholds: &NormalizationThresholds,
) -> f64 {
    let span = thresholds.cv_poor - thresholds.cv_excellent;
    let from_cv = clamp10(10.0 - (cv - thresholds.cv_excellent) / span * 10.0);
    match escalation_rate {
        Some(rate) => {
            let from_escalation = clamp10(10.0 * (1.0 - rate / thresholds.escalation_poor));
            0.5 * from_cv + 0.5 * from_escalation
        }
        None => from_cv,
    }
}

/// Inverse complexity from the transfer rate (percentage, 0-100).
///
/// Transfer rates at or below `transfer_excellent` score 10, at or
/// above `transfer_poor` score 0.
pub fn transfer_complexity(transfer_rate_pct: f64, thresholds: &NormalizationThresholds) -> f64 {
    let fraction = transfer_rate_pct / 100.0;
    let span = thresholds.transfer_poor - thresholds.transfer_excellent;
    clamp10(10.0 - (fraction - thresholds.transfer_excellent) / span * 10.0)
}

/// Inverse complexity from the exception rate (fraction of handle
/// times beyond the outlier cutoff, already capped upstream).
pub fn exception_complexity(exception_rate: f64, thresholds: &NormalizationThresholds) -> f64 {
    clamp10(10.0 * (1.0 - exception_rate / thresholds.exception_poor))
}

/// Repetitiveness from batch volume, logistic around
/// `repetitiveness_x0` interactions.
pub fn repetitiveness(volume: usize, thresholds: &NormalizationThresholds) -> f64 {
    let v = volume as f64;
    10.0 / (1.0 + (-thresholds.repetitiveness_k * (v - thresholds.repetitiveness_x0)).exp())
}

/// Structuring from the fraction of interactions carrying structured
/// fields (0-1).
pub fn structuring(structured_fields_pct: f64) -> f64 {
    clamp10(structured_fields_pct * 10.0)
}

/// Estimate the structured-fields fraction from the number of distinct
/// reason codes in use. Few codes means a tight, well-structured
/// taxonomy; a sprawling one degrades toward free text.
pub fn structuring_pct_from_reason_codes(unique_codes: usize) -> f64 {
    match unique_codes {
        0..=5 => 0.90,
        6..=20 => 0.70,
        21..=50 => 0.50,
        n => (0.50 - (n as f64 - 50.0) * 0.005).max(0.30),
    }
}

/// Stability from the hourly arrival distribution.
///
/// Two components: normalized Shannon entropy of the 24-hour
/// distribution (flat demand is easier to serve with automation than a
/// single spike), and the fraction of volume arriving outside business
/// hours, saturating at `off_hours_scale`.
pub fn stability(hourly_volume: &[u64; 24], thresholds: &NormalizationThresholds) -> f64 {
    let total: u64 = hourly_volume.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let entropy: f64 = hourly_volume
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total as f64;
            -p * p.log2()
        })
        .sum();
    let entropy_score = entropy / (24.0f64).log2() * 10.0;

    let off_hours = off_hours_fraction(hourly_volume);
    let off_hours_score = (off_hours / thresholds.off_hours_scale * 10.0).min(10.0);

    thresholds.entropy_weight * entropy_score + thresholds.off_hours_weight * off_hours_score
}

/// Fraction of volume arriving before 08:00 or from 19:00 on.
pub fn off_hours_fraction(hourly_volume: &[u64; 24]) -> f64 {
    let total: u64 = hourly_volume.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let off: u64 = hourly_volume
        .iter()
        .enumerate()
        .filter(|(hour, _)| *hour < 8 || *hour >= 19)
        .map(|(_, count)| *count)
        .sum();
    off as f64 / total as f64
}

/// ROI readiness from projected annual savings (EUR), logistic around
/// `roi_x0`.
pub fn roi_score(annual_savings: f64, thresholds: &NormalizationThresholds) -> f64 {
    10.0 / (1.0 + (-thresholds.roi_k * (annual_savings - thresholds.roi_x0)).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t() -> NormalizationThresholds {
        NormalizationThresholds::default()
    }

    #[test]
    fn predictability_anchors() {
        let t = t();
        assert!((predictability(0.3, None, &t) - 10.0).abs() < 1e-9);
        assert!((predictability(0.9, None, &t) - 5.0).abs() < 1e-9);
        assert!(predictability(1.5, None, &t).abs() < 1e-9);
        // Clamped outside the ramp.
        assert_eq!(predictability(0.0, None, &t), 10.0);
        assert_eq!(predictability(3.0, None, &t), 0.0);
    }

    #[test]
    fn predictability_escalation_blend() {
        let t = t();
        // cv 0.3 alone is 10; a 10% escalation rate scores
        // 10 * (1 - 0.10/0.20) = 5, so the blend lands at 7.5.
        let blended = predictability(0.3, Some(0.10), &t);
        assert!((blended - 7.5).abs() < 1e-9);
        // Escalation at or beyond the floor contributes nothing.
        assert!((predictability(0.3, Some(0.25), &t) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn transfer_complexity_anchors() {
        let t = t();
        assert!((transfer_complexity(5.0, &t) - 10.0).abs() < 1e-9);
        assert!(transfer_complexity(30.0, &t).abs() < 1e-9);
        assert!((transfer_complexity(17.5, &t) - 5.0).abs() < 1e-9);
        assert_eq!(transfer_complexity(0.0, &t), 10.0);
        assert_eq!(transfer_complexity(100.0, &t), 0.0);
    }

    #[test]
    fn exception_complexity_anchors() {
        let t = t();
        assert!((exception_complexity(0.0, &t) - 10.0).abs() < 1e-9);
        assert!((exception_complexity(0.15, &t) - 5.0).abs() < 1e-9);
        assert!(exception_complexity(0.30, &t).abs() < 1e-9);
        assert_eq!(exception_complexity(0.50, &t), 0.0);
    }

    #[test]
    fn repetitiveness_logistic() {
        let t = t();
        assert!((repetitiveness(250, &t) - 5.0).abs() < 1e-9);
        assert!(repetitiveness(0, &t) < 5.0);
        assert!(repetitiveness(10_000, &t) > 9.99);
        // Monotone in volume.
        assert!(repetitiveness(100, &t) < repetitiveness(500, &t));
    }

    #[test]
    fn structuring_scales_linearly() {
        assert!((structuring(0.9) - 9.0).abs() < 1e-9);
        assert_eq!(structuring(0.0), 0.0);
        assert_eq!(structuring(1.5), 10.0);
    }

    #[test]
    fn reason_code_ladder() {
        assert_eq!(structuring_pct_from_reason_codes(3), 0.90);
        assert_eq!(structuring_pct_from_reason_codes(5), 0.90);
        assert_eq!(structuring_pct_from_reason_codes(6), 0.70);
        assert_eq!(structuring_pct_from_reason_codes(20), 0.70);
        assert_eq!(structuring_pct_from_reason_codes(50), 0.50);
        assert!((structuring_pct_from_reason_codes(60) - 0.45).abs() < 1e-9);
        // The ladder never drops below 0.30.
        assert_eq!(structuring_pct_from_reason_codes(500), 0.30);
    }

    #[test]
    fn stability_uniform_demand_maxes_out() {
        let t = t();
        let uniform = [10u64; 24];
        // Flat distribution: full entropy, and 13 of 24 hours are
        // off-hours so that term saturates too.
        assert!((stability(&uniform, &t) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn stability_single_spike_is_zero() {
        let t = t();
        let mut spike = [0u64; 24];
        spike[10] = 500;
        assert_eq!(stability(&spike, &t), 0.0);
    }

    #[test]
    fn stability_empty_is_zero() {
        assert_eq!(stability(&[0u64; 24], &t()), 0.0);
    }

    #[test]
    fn off_hours_window() {
        let mut hourly = [0u64; 24];
        hourly[7] = 1; // off
        hourly[8] = 1; // business
        hourly[18] = 1; // business
        hourly[19] = 1; // off
        assert!((off_hours_fraction(&hourly) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn roi_logistic() {
        let t = t();
        assert!((roi_score(125_000.0, &t) - 5.0).abs() < 1e-9);
        assert!(roi_score(0.0, &t) < 1.0);
        assert!(roi_score(500_000.0, &t) > 9.9);
        assert!(roi_score(50_000.0, &t) < roi_score(200_000.0, &t));
    }

    #[test]
    fn all_factors_stay_in_range() {
        let t = t();
        for cv in [0.0, 0.5, 1.0, 2.0, 10.0] {
            let p = predictability(cv, Some(0.5), &t);
            assert!((0.0..=10.0).contains(&p));
        }
        for v in [0usize, 1, 250, 100_000] {
            assert!((0.0..=10.0).contains(&repetitiveness(v, &t)));
        }
        for s in [-1e6, 0.0, 1e6, 1e9] {
            assert!((0.0..=10.0).contains(&roi_score(s, &t)));
        }
    }
}
