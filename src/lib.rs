//! Crossmatch - donor compatibility ranking service
//!
//! This library provides the compatibility-scoring engine used to rank a
//! pool of donor genetic profiles against a recipient profile. It covers
//! genotype normalization, antibody conflict screening, dual-allele locus
//! pairing, weighted-locus scoring and grade assignment.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{parse_allele, parse_excluded_groups, MatchPolicy, Matcher, RankedMatches};
pub use crate::models::{
    AlleleCode, DonorMatch, DonorRecord, Grade, HlaProfile, RankMatchesRequest,
    RankMatchesResponse, RecipientProfile,
};
