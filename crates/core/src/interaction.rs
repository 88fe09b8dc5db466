use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single contact-center interaction record.
///
/// Produced by an external collaborator (file decoder or synthetic
/// generator) and consumed read-only by the scoring pipeline. All time
/// fields are in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub start_time: DateTime<Utc>,
    /// Queue / skill the interaction was routed to.
    pub process_name: String,
    pub channel: String,
    pub talk_seconds: f64,
    pub hold_seconds: f64,
    pub wrapup_seconds: f64,
    pub agent_id: String,
    pub transferred: bool,
    pub caller_id: Option<String>,
}

impl Interaction {
    /// Total handle time: talk + hold + wrap-up.
    pub fn handle_time(&self) -> f64 {
        self.talk_seconds + self.hold_seconds + self.wrapup_seconds
    }
}

/// Service tier governing which composite formula applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Gold,
    Silver,
    Bronze,
}

/// Customer-value segment assigned to a process via name matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    High,
    Medium,
    Low,
}

impl Default for Segment {
    fn default() -> Self {
        Segment::Medium
    }
}

/// How much the data volume behind a score can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_time_sums_components() {
        let i = Interaction {
            id: "INT-001".to_string(),
            start_time: Utc::now(),
            process_name: "Billing".to_string(),
            channel: "voice".to_string(),
            talk_seconds: 320.0,
            hold_seconds: 45.0,
            wrapup_seconds: 15.0,
            agent_id: "AGT-0234".to_string(),
            transferred: false,
            caller_id: None,
        };
        assert_eq!(i.handle_time(), 380.0);
    }

    #[test]
    fn segment_defaults_to_medium() {
        assert_eq!(Segment::default(), Segment::Medium);
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&Tier::Gold).unwrap();
        assert_eq!(json, "\"gold\"");
    }
}
