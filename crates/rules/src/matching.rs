//! Fuzzy name matching shared by the segment classifier and the skill
//! consolidation map.

/// Case-insensitive bidirectional substring containment.
///
/// `"VIP_Support"` matches candidate `"vip"`, and `"Billing"` matches
/// candidate `"Billing and Payments N1"`. Empty strings never match.
pub fn name_matches(name: &str, candidate: &str) -> bool {
    let name = name.trim().to_lowercase();
    let candidate = candidate.trim().to_lowercase();
    if name.is_empty() || candidate.is_empty() {
        return false;
    }
    name.contains(&candidate) || candidate.contains(&name)
}

/// First candidate in `candidates` that fuzzy-matches `name`.
pub fn first_match<'a>(name: &str, candidates: &'a [String]) -> Option<&'a str> {
    candidates
        .iter()
        .map(String::as_str)
        .find(|c| name_matches(name, c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_both_directions() {
        assert!(name_matches("VIP_Support", "VIP"));
        assert!(name_matches("VIP", "VIP_Support"));
    }

    #[test]
    fn case_insensitive() {
        assert!(name_matches("BILLING", "billing"));
        assert!(name_matches("Soporte_General_N1", "soporte_general"));
    }

    #[test]
    fn whitespace_trimmed() {
        assert!(name_matches("  Retention ", "retention"));
    }

    #[test]
    fn empty_never_matches() {
        assert!(!name_matches("", "VIP"));
        assert!(!name_matches("VIP", ""));
        assert!(!name_matches("", ""));
    }

    #[test]
    fn unrelated_names_do_not_match() {
        assert!(!name_matches("Billing", "Retention"));
    }

    #[test]
    fn first_match_respects_order() {
        let candidates = vec!["Premium".to_string(), "VIP".to_string()];
        assert_eq!(first_match("vip premium desk", &candidates), Some("Premium"));
        assert_eq!(first_match("nothing", &candidates), None);
    }
}
