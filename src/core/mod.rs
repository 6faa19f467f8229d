// Core algorithm exports
pub mod conflict;
pub mod genotype;
pub mod matcher;
pub mod pairing;
pub mod policy;
pub mod scoring;

pub use conflict::check_chain;
pub use genotype::{parse_allele, parse_excluded_groups, parse_hla_profile};
pub use matcher::{Matcher, RankedMatches};
pub use pairing::{best_pairing, PairingOutcome};
pub use policy::MatchPolicy;
pub use scoring::{score_weighted_loci, WeightedScore};
