/// Winning assignment for one two-allele locus.
///
/// `count` is the number of group-equal comparisons in the winning
/// pairing; the slot flags mark which donor chain satisfied a match and
/// drive presentation highlighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairingOutcome {
    pub count: u8,
    pub slot1_hit: bool,
    pub slot2_hit: bool,
}

/// Find the best pairing between a recipient's two chains and a donor's
/// two chains at one locus, comparing allele groups only.
///
/// With two unordered alleles per side there are exactly two possible
/// assignments, so the direct pairing (p1-d1, p2-d2) and the crossed
/// pairing (p1-d2, p2-d1) are scored and the better one taken. Direct
/// wins ties.
pub fn best_pairing(
    p1: Option<u32>,
    p2: Option<u32>,
    d1: Option<u32>,
    d2: Option<u32>,
) -> PairingOutcome {
    // Recipient did not supply this locus at all.
    if p1.is_none() && p2.is_none() {
        return PairingOutcome::default();
    }

    let hit = |p: Option<u32>, d: Option<u32>| matches!((p, d), (Some(a), Some(b)) if a == b);

    let direct = (hit(p1, d1), hit(p2, d2));
    let crossed = (hit(p1, d2), hit(p2, d1));

    let direct_count = direct.0 as u8 + direct.1 as u8;
    let crossed_count = crossed.0 as u8 + crossed.1 as u8;

    if direct_count >= crossed_count {
        PairingOutcome {
            count: direct_count,
            slot1_hit: direct.0,
            slot2_hit: direct.1,
        }
    } else {
        // Crossed assignment: p2 matched donor slot 1, p1 matched slot 2.
        PairingOutcome {
            count: crossed_count,
            slot1_hit: crossed.1,
            slot2_hit: crossed.0,
        }
    }
}
