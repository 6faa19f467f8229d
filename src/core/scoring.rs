use crate::core::policy::MatchPolicy;
use crate::models::{DonorRecord, RecipientProfile};

/// Weighted-locus scoring outcome for one donor.
///
/// `points` feeds the raw score; `rate` is the percentage of achievable
/// weight actually achieved, used for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedScore {
    pub points: f64,
    pub rate: f64,
    pub matched: Vec<String>,
    pub compatible: Vec<String>,
    pub mismatched: Vec<String>,
    pub unknown: Vec<String>,
}

/// Score the weighted single-allele loci the recipient supplied.
///
/// Loci are evaluated in policy order. A locus the donor has no value
/// for lands in `unknown` and still counts toward the achievable
/// maximum, lowering the rate without touching the raw score. An
/// incompatible category withholds points but is never deducted; the
/// antibody-conflict path is the only active penalty.
pub fn score_weighted_loci(
    recipient: &RecipientProfile,
    donor: &DonorRecord,
    policy: &MatchPolicy,
) -> WeightedScore {
    let mut out = WeightedScore::default();
    let mut max_weight = 0.0;

    for locus in policy.loci() {
        let p_val = match recipient.genotype(locus) {
            Some(v) => v,
            None => continue,
        };

        let full = policy.full_units() * policy.weight(locus);
        max_weight += full;

        match donor.genotype(locus) {
            None => out.unknown.push(locus.clone()),
            Some(d_val) => match policy.category_score(p_val, d_val) {
                2 => {
                    out.matched.push(locus.clone());
                    out.points += full;
                }
                1 => {
                    out.compatible.push(locus.clone());
                    out.points += policy.partial_units() * policy.weight(locus);
                }
                _ => out.mismatched.push(locus.clone()),
            },
        }
    }

    out.rate = if max_weight > 0.0 {
        ((out.points / max_weight) * 100.0).min(100.0)
    } else {
        0.0
    };
    out
}
