//! Skill consolidation map — collapses raw queue/skill names into a
//! small set of reporting categories, matched with the same fuzzy rule
//! as the segment classifier. Immutable configuration data; the
//! pipeline never mutates it.

use serde::{Deserialize, Serialize};

use crate::matching::name_matches;

/// One consolidated reporting category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsolidationCategory {
    pub id: String,
    pub display_name: String,
    /// Raw skill names (or fragments) that map into this category.
    pub source_names: Vec<String>,
    /// Lower is more important; categories are checked in priority order.
    pub priority: u32,
}

impl ConsolidationCategory {
    fn new(id: &str, display_name: &str, priority: u32, source_names: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            source_names: source_names.iter().map(|s| s.to_string()).collect(),
            priority,
        }
    }
}

/// The full consolidation table, kept sorted by priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ConsolidationMap {
    pub categories: Vec<ConsolidationCategory>,
}

impl Default for ConsolidationMap {
    fn default() -> Self {
        Self {
            categories: vec![
                ConsolidationCategory::new(
                    "information_requests",
                    "Information Requests",
                    1,
                    &["informacion", "information", "consulta", "inquiry"],
                ),
                ConsolidationCategory::new(
                    "billing_payments",
                    "Billing & Payments",
                    2,
                    &["facturacion", "billing", "cobro", "payment", "pagos"],
                ),
                ConsolidationCategory::new(
                    "technical_support",
                    "Technical Support",
                    3,
                    &["soporte", "support", "averia", "incident", "tecnico"],
                ),
                ConsolidationCategory::new(
                    "account_management",
                    "Account Management",
                    4,
                    &["cuenta", "account", "titular", "cambio"],
                ),
                ConsolidationCategory::new(
                    "contracts",
                    "Contracts & Changes",
                    5,
                    &["contrato", "contract", "contratacion", "baja", "alta"],
                ),
                ConsolidationCategory::new(
                    "other_operations",
                    "Other Operations",
                    6,
                    &["otras operaciones", "diversos"],
                ),
            ],
        }
    }
}

impl ConsolidationMap {
    /// Category for a raw process name, checked in ascending priority
    /// order. Returns `None` for names no category claims.
    pub fn categorize(&self, process_name: &str) -> Option<&ConsolidationCategory> {
        let mut ordered: Vec<&ConsolidationCategory> = self.categories.iter().collect();
        ordered.sort_by_key(|c| c.priority);
        ordered.into_iter().find(|category| {
            category
                .source_names
                .iter()
                .any(|source| name_matches(process_name, source))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_by_fragment() {
        let map = ConsolidationMap::default();
        let cat = map.categorize("Informacion Facturacion");
        // "informacion" (priority 1) wins over "facturacion" (priority 2).
        assert_eq!(cat.unwrap().id, "information_requests");
    }

    #[test]
    fn billing_queue_consolidates() {
        let map = ConsolidationMap::default();
        assert_eq!(map.categorize("FACTURACION").unwrap().id, "billing_payments");
        assert_eq!(
            map.categorize("billing disputes").unwrap().id,
            "billing_payments"
        );
    }

    #[test]
    fn unknown_name_unclaimed() {
        let map = ConsolidationMap::default();
        assert!(map.categorize("Fleet Telemetry").is_none());
    }

    #[test]
    fn priority_breaks_ties() {
        let map = ConsolidationMap {
            categories: vec![
                ConsolidationCategory::new("b", "B", 2, &["renewals"]),
                ConsolidationCategory::new("a", "A", 1, &["renewals"]),
            ],
        };
        assert_eq!(map.categorize("Renewals Desk").unwrap().id, "a");
    }

    #[test]
    fn empty_map_claims_nothing() {
        let map = ConsolidationMap { categories: vec![] };
        assert!(map.categorize("anything").is_none());
    }
}
