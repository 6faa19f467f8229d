use crate::core::genotype::{parse_excluded_groups, parse_hla_profile};
use crate::models::{DonorRecord, RecipientProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Request to rank a donor pool against a recipient profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankMatchesRequest {
    #[validate(length(max = 10))]
    #[serde(alias = "blood_type", rename = "bloodType", default)]
    pub blood_type: Option<String>,
    /// Weighted-locus genotype categories, keyed by locus name.
    #[serde(default)]
    pub genotypes: HashMap<String, String>,
    #[serde(alias = "hla_a1", rename = "hlaA1", default)]
    pub hla_a1: Option<String>,
    #[serde(alias = "hla_a2", rename = "hlaA2", default)]
    pub hla_a2: Option<String>,
    #[serde(alias = "hla_b1", rename = "hlaB1", default)]
    pub hla_b1: Option<String>,
    #[serde(alias = "hla_b2", rename = "hlaB2", default)]
    pub hla_b2: Option<String>,
    /// Free-text antibody exclusion list.
    #[validate(length(max = 4000))]
    #[serde(default)]
    pub antibodies: Option<String>,
    pub donors: Vec<DonorRecord>,
    /// Truncate the response to the configured result cap.
    #[serde(default)]
    pub limit: bool,
}

impl RankMatchesRequest {
    /// Build the immutable recipient profile the engine consumes.
    pub fn recipient_profile(&self) -> RecipientProfile {
        RecipientProfile {
            blood_type: sanitize(self.blood_type.as_deref()).map(String::from),
            genotypes: self
                .genotypes
                .iter()
                .filter_map(|(locus, value)| {
                    sanitize(Some(value.as_str())).map(|v| (locus.clone(), v.to_string()))
                })
                .collect(),
            hla: parse_hla_profile(
                sanitize(self.hla_a1.as_deref()),
                sanitize(self.hla_a2.as_deref()),
                sanitize(self.hla_b1.as_deref()),
                sanitize(self.hla_b2.as_deref()),
            ),
            excluded_groups: self
                .antibodies
                .as_deref()
                .map(parse_excluded_groups)
                .unwrap_or_default(),
        }
    }
}

/// Normalize the placeholder spellings upstream systems use for "no
/// data" so they never reach the parser.
fn sanitize(value: Option<&str>) -> Option<&str> {
    let v = value?.trim();
    if v.is_empty() || v == "-" || v == "/" || v.eq_ignore_ascii_case("null") {
        None
    } else {
        Some(v)
    }
}
