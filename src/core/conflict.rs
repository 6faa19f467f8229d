use std::collections::BTreeSet;

/// Check one donor chain against the recipient's excluded-antibody
/// groups.
///
/// Returns a human-readable reason when the chain's group is excluded.
/// An absent donor group never conflicts: risk cannot be assessed on
/// missing data.
pub fn check_chain(
    donor_group: Option<u32>,
    slot_label: &str,
    excluded: &BTreeSet<u32>,
) -> Option<String> {
    let group = donor_group?;
    if excluded.contains(&group) {
        Some(format!(
            "{} (group {}) carries an excluded antigen",
            slot_label, group
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_group_conflicts() {
        let excluded = BTreeSet::from([2, 24]);
        let reason = check_chain(Some(2), "HLA-A1", &excluded).unwrap();
        assert!(reason.contains("HLA-A1"));
        assert!(reason.contains("group 2"));
    }

    #[test]
    fn test_non_excluded_group_passes() {
        let excluded = BTreeSet::from([2, 24]);
        assert_eq!(check_chain(Some(7), "HLA-B1", &excluded), None);
    }

    #[test]
    fn test_absent_donor_group_never_conflicts() {
        let excluded = BTreeSet::from([2]);
        assert_eq!(check_chain(None, "HLA-A2", &excluded), None);
    }

    #[test]
    fn test_empty_exclusion_set() {
        let excluded = BTreeSet::new();
        assert_eq!(check_chain(Some(2), "HLA-A1", &excluded), None);
    }
}
