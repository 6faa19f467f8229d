use crate::core::{
    conflict::check_chain, pairing::best_pairing, policy::MatchPolicy,
    scoring::score_weighted_loci,
};
use crate::models::{DonorMatch, DonorRecord, Grade, RecipientProfile};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Ranked result set for one matching request
#[derive(Debug)]
pub struct RankedMatches {
    pub matches: Vec<DonorMatch>,
    pub total_candidates: usize,
}

/// Matching orchestrator: scores every candidate against the recipient,
/// sorts by score descending, and optionally caps the result set.
///
/// # Per-candidate stages
/// 1. Antibody conflict screen over all four HLA chains
/// 2. Best-pairing chain matching for the A and B loci
/// 3. Grade assignment from the chain-match count
/// 4. Weighted-locus compatibility scoring
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: MatchPolicy,
}

impl Matcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: MatchPolicy::default(),
        }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Rank a candidate pool against a recipient profile.
    ///
    /// Candidates score independently, so the pool is fanned out across
    /// worker threads and merged back in input order before the sort.
    /// The stable sort keeps input order among equal scores. `cap`
    /// truncates only after the full sort: conflict penalties can push
    /// any candidate to the back.
    pub fn rank(
        &self,
        recipient: &RecipientProfile,
        candidates: Vec<DonorRecord>,
        cap: Option<usize>,
    ) -> RankedMatches {
        let total_candidates = candidates.len();

        let mut matches: Vec<DonorMatch> = candidates
            .into_par_iter()
            .map(|donor| self.score_donor(recipient, donor))
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if let Some(cap) = cap {
            matches.truncate(cap);
        }

        RankedMatches {
            matches,
            total_candidates,
        }
    }

    /// Score a single (recipient, donor) pair. Pure over its inputs.
    fn score_donor(&self, recipient: &RecipientProfile, donor: DonorRecord) -> DonorMatch {
        // The antibody screen always runs on all four chains, whatever
        // HLA input the recipient supplied.
        let chains = [
            (donor.hla.a1_group(), "HLA-A1"),
            (donor.hla.a2_group(), "HLA-A2"),
            (donor.hla.b1_group(), "HLA-B1"),
            (donor.hla.b2_group(), "HLA-B2"),
        ];
        let conflict_reasons: Vec<String> = chains
            .iter()
            .filter_map(|&(group, label)| check_chain(group, label, &recipient.excluded_groups))
            .collect();
        let conflict_count = conflict_reasons.len() as u32;

        let a = best_pairing(
            recipient.hla.a1_group(),
            recipient.hla.a2_group(),
            donor.hla.a1_group(),
            donor.hla.a2_group(),
        );
        let b = best_pairing(
            recipient.hla.b1_group(),
            recipient.hla.b2_group(),
            donor.hla.b1_group(),
            donor.hla.b2_group(),
        );
        let chain_matches = a.count + b.count;

        let mut highlighted_alleles = BTreeSet::new();
        if a.slot1_hit {
            highlighted_alleles.insert("HLA-A1".to_string());
        }
        if a.slot2_hit {
            highlighted_alleles.insert("HLA-A2".to_string());
        }
        if b.slot1_hit {
            highlighted_alleles.insert("HLA-B1".to_string());
        }
        if b.slot2_hit {
            highlighted_alleles.insert("HLA-B2".to_string());
        }

        let weighted = score_weighted_loci(recipient, &donor, &self.policy);

        let mut matched_loci = Vec::new();
        if a.count > 0 {
            matched_loci.push("HLA-A".to_string());
        }
        if b.count > 0 {
            matched_loci.push("HLA-B".to_string());
        }
        matched_loci.extend(weighted.matched);

        let score = f64::from(chain_matches) * 100.0 + weighted.points
            - f64::from(conflict_count) * 1000.0;

        DonorMatch {
            donor,
            score,
            grade: Grade::from_chain_matches(chain_matches),
            matched_loci,
            compatible_loci: weighted.compatible,
            mismatched_loci: weighted.mismatched,
            unknown_loci: weighted.unknown,
            highlighted_alleles,
            conflict_count,
            conflict_reasons,
            compatibility_rate: weighted.rate,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_policy()
    }
}
