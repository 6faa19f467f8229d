use crate::models::{AlleleCode, HlaProfile};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    // First digit run is the group; a second run counts as the specific
    // code only when separated from the first by colons or spaces.
    static ref ALLELE_RE: Regex = Regex::new(r"(\d+)(?:[: ]*(\d+))?").unwrap();
    // Antibody lists arrive comma-, fullwidth-comma-, whitespace- or
    // newline-separated.
    static ref GROUP_SEP_RE: Regex = Regex::new(r"[,，\s]+").unwrap();
}

/// Normalize a raw allele string into its numeric code.
///
/// Tolerates the common laboratory spellings: "HLA-A*02:01", "A*24",
/// "02:01", "2", "HLA-A02", with either ASCII or full-width colons.
/// Returns `None` when no digit run is present or a run overflows -
/// an unparsed slot is a legitimate outcome, not an error.
pub fn parse_allele(raw: &str) -> Option<AlleleCode> {
    let cleaned = raw.trim().replace('：', ":").replace('*', "");
    let caps = ALLELE_RE.captures(&cleaned)?;
    let group = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let specific = match caps.get(2) {
        Some(m) => Some(m.as_str().parse::<u32>().ok()?),
        None => None,
    };
    Some(AlleleCode { group, specific })
}

/// Parse a free-text antibody exclusion list into the set of excluded
/// allele groups. Only the group field of each token is kept; duplicates
/// collapse. Empty or unparsable input yields an empty set.
pub fn parse_excluded_groups(raw: &str) -> BTreeSet<u32> {
    GROUP_SEP_RE
        .split(raw.trim())
        .filter_map(parse_allele)
        .map(|code| code.group)
        .collect()
}

/// Parse the four raw HLA chain strings of a record into split fields.
pub fn parse_hla_profile(
    a1: Option<&str>,
    a2: Option<&str>,
    b1: Option<&str>,
    b2: Option<&str>,
) -> HlaProfile {
    HlaProfile {
        a1: a1.and_then(parse_allele),
        a2: a2.and_then(parse_allele),
        b1: b1.and_then(parse_allele),
        b2: b2.and_then(parse_allele),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_nomenclature() {
        let code = parse_allele("HLA-A*02:01").unwrap();
        assert_eq!(code.group, 2);
        assert_eq!(code.specific, Some(1));
    }

    #[test]
    fn test_parse_group_only() {
        let code = parse_allele("A*24").unwrap();
        assert_eq!(code.group, 24);
        assert_eq!(code.specific, None);
    }

    #[test]
    fn test_parse_bare_number() {
        let code = parse_allele("2").unwrap();
        assert_eq!(code.group, 2);
        assert_eq!(code.specific, None);
    }

    #[test]
    fn test_parse_prefixed_group() {
        let code = parse_allele("HLA-A02").unwrap();
        assert_eq!(code.group, 2);
        assert_eq!(code.specific, None);
    }

    #[test]
    fn test_parse_fullwidth_colon() {
        let code = parse_allele("A*02：01").unwrap();
        assert_eq!(code.group, 2);
        assert_eq!(code.specific, Some(1));
    }

    #[test]
    fn test_parse_space_separated_fields() {
        let code = parse_allele("02 01").unwrap();
        assert_eq!(code.group, 2);
        assert_eq!(code.specific, Some(1));
    }

    #[test]
    fn test_parse_no_digits() {
        assert_eq!(parse_allele(""), None);
        assert_eq!(parse_allele("unknown"), None);
        assert_eq!(parse_allele("  "), None);
    }

    #[test]
    fn test_parse_overflow_is_none() {
        assert_eq!(parse_allele("99999999999999999999"), None);
        assert_eq!(parse_allele("2:99999999999999999999"), None);
    }

    #[test]
    fn test_excluded_groups_comma_separated() {
        let groups = parse_excluded_groups("02,24");
        assert_eq!(groups, BTreeSet::from([2, 24]));
    }

    #[test]
    fn test_excluded_groups_mixed_separators() {
        let groups = parse_excluded_groups("A*02:01，B7\n24 15");
        assert_eq!(groups, BTreeSet::from([2, 7, 24, 15]));
    }

    #[test]
    fn test_excluded_groups_duplicates_collapse() {
        let groups = parse_excluded_groups("2, 02, A*02");
        assert_eq!(groups, BTreeSet::from([2]));
    }

    #[test]
    fn test_excluded_groups_empty_input() {
        assert!(parse_excluded_groups("").is_empty());
        assert!(parse_excluded_groups("  \n ").is_empty());
        assert!(parse_excluded_groups("no antigens listed").is_empty());
    }

    #[test]
    fn test_parse_hla_profile_mixed() {
        let profile = parse_hla_profile(Some("A*02:01"), Some("24"), None, Some("garbage"));

        assert_eq!(
            profile.a1,
            Some(AlleleCode {
                group: 2,
                specific: Some(1)
            })
        );
        assert_eq!(
            profile.a2,
            Some(AlleleCode {
                group: 24,
                specific: None
            })
        );
        assert_eq!(profile.b1, None);
        assert_eq!(profile.b2, None);
    }
}
