//! Majority-vote similarity hashing.
//!
//! SimHash (Charikar, 2002) folds many feature hashes into one bitstring such that
//! similar feature sets have small Hamming distance. Here every feature hash has
//! unit weight, so each output bit is a plain majority vote.

use crate::error::{Error, Result};

/// Fold equal-length bit vectors into one vector by per-bit majority vote.
///
/// An output bit is set when at least half of the inputs (`ceil(n / 2)`) have it
/// set; ties go to 1. The output has the same length as the inputs.
pub fn similarity_hash<V: AsRef<[u8]>>(vectors: &[V]) -> Result<Vec<u8>> {
    let first = vectors.first().ok_or(Error::EmptyInput)?;
    let n_bytes = first.as_ref().len();

    let mut votes = BitVotes::new(n_bytes);
    for v in vectors {
        let bytes = v.as_ref();
        if bytes.len() != n_bytes {
            return Err(Error::DimensionMismatch {
                expected: n_bytes,
                got: bytes.len(),
            });
        }
        votes.add(bytes);
    }
    Ok(votes.majority())
}

/// [`similarity_hash`] over fixed-size digests, where lengths cannot disagree.
///
/// An empty slice folds to all zeros.
pub(crate) fn fold_digests<const N: usize>(digests: &[[u8; N]]) -> [u8; N] {
    let mut votes = BitVotes::new(N);
    for digest in digests {
        votes.add(digest);
    }
    let mut out = [0u8; N];
    if !digests.is_empty() {
        out.copy_from_slice(&votes.majority());
    }
    out
}

/// Per-bit set counts over vectors of one fixed length.
#[derive(Debug, Clone)]
struct BitVotes {
    acc: Vec<usize>,
    voters: usize,
}

impl BitVotes {
    fn new(n_bytes: usize) -> Self {
        Self {
            acc: vec![0; n_bytes * 8],
            voters: 0,
        }
    }

    fn add(&mut self, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            for bit in 0..8 {
                if (byte >> bit) & 1 == 1 {
                    self.acc[i * 8 + bit] += 1;
                }
            }
        }
        self.voters += 1;
    }

    fn majority(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.acc.len() / 8];
        for (i, &count) in self.acc.iter().enumerate() {
            if 2 * count >= self.voters {
                out[i / 8] |= 1 << (i % 8);
            }
        }
        out
    }
}
