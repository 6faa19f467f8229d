use std::collections::{BTreeSet, HashMap};

/// Immutable matching policy: the recognized weighted loci, the critical
/// subset, the per-locus weight table, and the genotype-category
/// compatibility matrix.
///
/// Built once at startup and passed by reference into the engine. The
/// weight table is kept separate from the category matrix so policy
/// changes (non-uniform weights, new loci) do not touch the matching
/// algorithm.
#[derive(Debug, Clone)]
pub struct MatchPolicy {
    loci: Vec<String>,
    critical: BTreeSet<String>,
    weights: HashMap<String, f64>,
    matrix: HashMap<String, HashMap<String, u8>>,
    full_units: f64,
    partial_units: f64,
}

const RECOGNIZED_LOCI: [&str; 9] = [
    "HPA-1", "HPA-2", "HPA-3", "HPA-4", "HPA-5", "HPA-6", "HPA-10", "HPA-15", "HPA-21",
];

const CRITICAL_LOCI: [&str; 3] = ["HPA-1", "HPA-5", "HPA-15"];

impl MatchPolicy {
    /// Build the policy with the given scoring units (points granted for
    /// a full category match and for a compatible category).
    pub fn new(full_units: f64, partial_units: f64) -> Self {
        let loci: Vec<String> = RECOGNIZED_LOCI.iter().map(|s| s.to_string()).collect();
        let critical: BTreeSet<String> = CRITICAL_LOCI.iter().map(|s| s.to_string()).collect();

        // Weighting is currently uniform across loci.
        let weights: HashMap<String, f64> = loci.iter().map(|l| (l.clone(), 1.0)).collect();

        // Biallelic category matrix: 0 = incompatible, 1 = compatible,
        // 2 = full match.
        let mut matrix = HashMap::new();
        matrix.insert("aa".to_string(), row(&[("aa", 2), ("ab", 1), ("bb", 0)]));
        matrix.insert("ab".to_string(), row(&[("aa", 1), ("ab", 2), ("bb", 1)]));
        matrix.insert("bb".to_string(), row(&[("aa", 0), ("ab", 1), ("bb", 2)]));

        Self {
            loci,
            critical,
            weights,
            matrix,
            full_units,
            partial_units,
        }
    }

    /// Recognized weighted loci, in evaluation order.
    pub fn loci(&self) -> &[String] {
        &self.loci
    }

    /// Whether a locus is flagged critical. Reserved for future policy;
    /// not consumed by current scoring.
    pub fn is_critical(&self, locus: &str) -> bool {
        self.critical.contains(locus)
    }

    /// Per-locus weight multiplier. Unknown loci weigh 1.0.
    pub fn weight(&self, locus: &str) -> f64 {
        self.weights.get(locus).copied().unwrap_or(1.0)
    }

    /// Compatibility score for a (recipient, donor) category pair.
    /// A pair missing from the matrix scores 0.
    pub fn category_score(&self, recipient: &str, donor: &str) -> u8 {
        self.matrix
            .get(recipient)
            .and_then(|r| r.get(donor))
            .copied()
            .unwrap_or(0)
    }

    pub fn full_units(&self) -> f64 {
        self.full_units
    }

    pub fn partial_units(&self) -> f64 {
        self.partial_units
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::new(5.0, 2.0)
    }
}

fn row(cells: &[(&str, u8)]) -> HashMap<String, u8> {
    cells.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}
