use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Parsed allele identity: the leading group number plus an optional
/// second-field refinement code.
///
/// Only `group` participates in match comparisons; `specific` is carried
/// through for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlleleCode {
    pub group: u32,
    #[serde(default)]
    pub specific: Option<u32>,
}

/// The four HLA chain slots (two chains per locus) shared by recipient
/// and donor records. A slot is `None` when the source text was absent
/// or unparsable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HlaProfile {
    #[serde(default)]
    pub a1: Option<AlleleCode>,
    #[serde(default)]
    pub a2: Option<AlleleCode>,
    #[serde(default)]
    pub b1: Option<AlleleCode>,
    #[serde(default)]
    pub b2: Option<AlleleCode>,
}

impl HlaProfile {
    pub fn a1_group(&self) -> Option<u32> {
        self.a1.map(|c| c.group)
    }

    pub fn a2_group(&self) -> Option<u32> {
        self.a2.map(|c| c.group)
    }

    pub fn b1_group(&self) -> Option<u32> {
        self.b1.map(|c| c.group)
    }

    pub fn b2_group(&self) -> Option<u32> {
        self.b2.map(|c| c.group)
    }
}

/// Recipient profile built once per matching request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipientProfile {
    #[serde(rename = "bloodType", default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub genotypes: HashMap<String, String>,
    #[serde(default)]
    pub hla: HlaProfile,
    #[serde(rename = "excludedGroups", default)]
    pub excluded_groups: BTreeSet<u32>,
}

impl RecipientProfile {
    /// Supplied genotype category for a weighted locus, if non-empty.
    pub fn genotype(&self, locus: &str) -> Option<&str> {
        self.genotypes
            .get(locus)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Read-only projection of a stored donor, supplied by the caller.
/// The engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorRecord {
    pub id: String,
    #[serde(rename = "bloodType", default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub genotypes: HashMap<String, String>,
    #[serde(default)]
    pub hla: HlaProfile,
}

impl DonorRecord {
    /// Stored genotype category for a weighted locus, if non-empty.
    pub fn genotype(&self, locus: &str) -> Option<&str> {
        self.genotypes
            .get(locus)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Coarse letter summary of the HLA chain-match count, independent of
/// weighted-locus results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Grade ladder over the 0-4 chain-match count.
    pub fn from_chain_matches(count: u8) -> Self {
        match count {
            4 => Grade::A,
            3 => Grade::B,
            1 | 2 => Grade::C,
            _ => Grade::D,
        }
    }
}

/// Scored match result for a single (recipient, donor) pair.
///
/// Assembled once per candidate and returned by value; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorMatch {
    pub donor: DonorRecord,
    pub score: f64,
    pub grade: Grade,
    #[serde(rename = "matchedLoci")]
    pub matched_loci: Vec<String>,
    #[serde(rename = "compatibleLoci")]
    pub compatible_loci: Vec<String>,
    #[serde(rename = "mismatchedLoci")]
    pub mismatched_loci: Vec<String>,
    #[serde(rename = "unknownLoci")]
    pub unknown_loci: Vec<String>,
    #[serde(rename = "highlightedAlleles")]
    pub highlighted_alleles: BTreeSet<String>,
    #[serde(rename = "conflictCount")]
    pub conflict_count: u32,
    #[serde(rename = "conflictReasons")]
    pub conflict_reasons: Vec<String>,
    #[serde(rename = "compatibilityRate")]
    pub compatibility_rate: f64,
}
