//! Business-value segment classification for processes, driven by the
//! customer-supplied queue mapping.

use skillscope_core::{Segment, SegmentMapping};
use skillscope_rules::name_matches;

/// Classify a process against the queue mapping.
///
/// Fuzzy name matching; high-value entries are checked first, then
/// low-value, then medium, so a name matching both "VIP Support" and
/// "Support" lands in the more specific bucket. Unmapped processes,
/// and runs without a mapping, default to medium.
pub fn classify_segment(process_name: &str, mapping: Option<&SegmentMapping>) -> Segment {
    let Some(mapping) = mapping else {
        return Segment::Medium;
    };

    if matches_any(process_name, &mapping.high_value_queues) {
        Segment::High
    } else if matches_any(process_name, &mapping.low_value_queues) {
        Segment::Low
    } else {
        Segment::Medium
    }
}

fn matches_any(name: &str, queues: &[String]) -> bool {
    queues.iter().any(|q| name_matches(name, q))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> SegmentMapping {
        SegmentMapping {
            high_value_queues: vec!["VIP".to_string(), "Enterprise".to_string()],
            medium_value_queues: vec!["Support".to_string()],
            low_value_queues: vec!["Info".to_string()],
        }
    }

    #[test]
    fn high_value_match() {
        let m = mapping();
        assert_eq!(classify_segment("VIP Support", Some(&m)), Segment::High);
        assert_eq!(classify_segment("enterprise sales", Some(&m)), Segment::High);
    }

    #[test]
    fn high_wins_over_low() {
        // "VIP Info Desk" matches both a high and a low entry.
        let m = mapping();
        assert_eq!(classify_segment("VIP Info Desk", Some(&m)), Segment::High);
    }

    #[test]
    fn low_wins_over_medium() {
        let m = mapping();
        assert_eq!(classify_segment("Info Support", Some(&m)), Segment::Low);
    }

    #[test]
    fn unmapped_defaults_to_medium() {
        let m = mapping();
        assert_eq!(classify_segment("Billing", Some(&m)), Segment::Medium);
        assert_eq!(classify_segment("Billing", None), Segment::Medium);
    }

    #[test]
    fn matching_is_case_insensitive_and_bidirectional() {
        let m = mapping();
        // The queue entry is a fragment of the process name and vice versa.
        assert_eq!(classify_segment("vip", Some(&m)), Segment::High);
        assert_eq!(classify_segment("Retention", Some(&m)), Segment::Medium);
    }
}
