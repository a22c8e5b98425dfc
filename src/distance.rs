//! Distances between codes and bit-sets of arbitrary width.
//!
//! Operands are [`BigUint`]s so codes of any length compare directly; a shorter
//! operand is implicitly zero-extended.

use num_bigint::BigUint;

/// Number of differing bits (`popcount(a ^ b)`).
pub fn hamming_distance(a: &BigUint, b: &BigUint) -> u64 {
    (a ^ b).count_ones()
}

/// Jaccard similarity of two bit-sets (`popcount(a & b) / popcount(a | b)`).
///
/// Equal operands, including two zeros, are identical sets and score 1.0.
/// Disjoint operands score 0.0.
pub fn jaccard_similarity(a: &BigUint, b: &BigUint) -> f64 {
    if a == b {
        return 1.0;
    }
    let intersection = (a & b).count_ones();
    let union = (a | b).count_ones();
    intersection as f64 / union as f64
}
