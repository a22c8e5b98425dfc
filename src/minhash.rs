//! MinHash for Jaccard similarity estimation.
//!
//! MinHash provides locality-sensitive hashing for set similarity by estimating:
//! \(J(A,B) = |A ∩ B| / |A ∪ B|\).
//!
//! Every shingle is reduced to a 32-bit base hash (the first four bytes of its
//! SHA-256 digest) and pushed through the [`MINHASH_PERMUTATIONS`] universal hash
//! functions of a static permutation table.

use sha2::{Digest, Sha256};

use crate::permutations::{MPA, MPB};

/// Number of hash functions (signature length).
pub const MINHASH_PERMUTATIONS: usize = 128;

/// Number of signature slots folded into a component body by
/// [`MinHashSignature::compress`].
pub const MINHASH_COMPRESSED_BITS: usize = 56;

const MERSENNE_PRIME: u64 = (1 << 61) - 1;
const MAX_HASH: u64 = 0xFFFF_FFFF;

/// 32-bit base hash of a shingle.
pub fn feature_hash(shingle: &[u8]) -> u32 {
    let digest = Sha256::digest(shingle);
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// Compute the MinHash signature of a collection of shingles.
///
/// Insensitive to shingle order and multiplicity. An empty collection yields a
/// signature of all `u32::MAX`.
pub fn minimum_hash<I>(shingles: I) -> MinHashSignature
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut hasher = MinHasher::new();
    for shingle in shingles {
        hasher.update(shingle.as_ref());
    }
    hasher.finish()
}

/// Incremental MinHash over shingles that arrive one at a time.
#[derive(Debug, Clone)]
pub struct MinHasher {
    values: [u32; MINHASH_PERMUTATIONS],
    count: usize,
}

impl MinHasher {
    /// Start with an empty shingle set.
    pub fn new() -> Self {
        Self {
            values: [u32::MAX; MINHASH_PERMUTATIONS],
            count: 0,
        }
    }

    /// Add one shingle.
    pub fn update(&mut self, shingle: &[u8]) {
        let x = u64::from(feature_hash(shingle));
        for (i, slot) in self.values.iter_mut().enumerate() {
            let h = (MPA[i].wrapping_mul(x).wrapping_add(MPB[i]) % MERSENNE_PRIME) & MAX_HASH;
            // `h` fits in 32 bits after masking.
            let h = h as u32;
            if h < *slot {
                *slot = h;
            }
        }
        self.count += 1;
    }

    /// Shingles added so far (duplicates included).
    pub fn count(&self) -> usize {
        self.count
    }

    /// The signature of everything added so far.
    pub fn finish(&self) -> MinHashSignature {
        MinHashSignature {
            values: self.values,
        }
    }
}

impl Default for MinHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// A MinHash signature (fingerprint) of a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MinHashSignature {
    /// The min-hash values for each hash function.
    pub values: [u32; MINHASH_PERMUTATIONS],
}

impl MinHashSignature {
    /// Estimate Jaccard similarity from two signatures.
    pub fn jaccard(&self, other: &Self) -> f64 {
        let matches = self
            .values
            .iter()
            .zip(other.values.iter())
            .filter(|(a, b)| a == b)
            .count();
        matches as f64 / MINHASH_PERMUTATIONS as f64
    }

    /// Hamming distance between signatures (positions where values differ).
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.values
            .iter()
            .zip(other.values.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Fold the least significant bit of the first [`MINHASH_COMPRESSED_BITS`]
    /// slots into a 7-byte body, slot 0 in the most significant bit.
    ///
    /// Two signatures agreeing in a fraction `j` of slots differ in about
    /// `(1 - j) / 2` of the folded bits.
    pub fn compress(&self) -> [u8; MINHASH_COMPRESSED_BITS / 8] {
        let mut out = [0u8; MINHASH_COMPRESSED_BITS / 8];
        for (i, v) in self.values[..MINHASH_COMPRESSED_BITS].iter().enumerate() {
            if v & 1 == 1 {
                out[i / 8] |= 0x80 >> (i % 8);
            }
        }
        out
    }
}
