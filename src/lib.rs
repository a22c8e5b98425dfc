//! `iscc`: similarity-preserving content identifiers.
//!
//! A component is a short code (13 Base32 characters) whose Hamming distance to
//! another component of the same kind tracks how similar the inputs are:
//! - Meta-ID: title and creators (majority-vote SimHash over 2-char shingles)
//! - Content-ID: plain text (MinHash over 13-char shingles)
//! - Data-ID: raw bytes (MinHash over content-defined chunks)
//! - Instance-ID: raw bytes (SHA-256d Merkle root; exact identity only)
//!
//! Everything is deterministic and free of global state, so identical input yields
//! identical codes on every platform and build.
//!
//! ```
//! let a = iscc::generate_meta_id("Die Unendliche Geschichte", "Michael Ende");
//! let b = iscc::generate_meta_id("Die Unéndliche Geschichte", "Ende, M.");
//! assert_eq!(a, b);
//! ```

#![warn(missing_docs)]

pub mod cdc;
pub mod codec;
pub mod distance;
pub mod error;
pub mod generate;
pub mod minhash;
mod permutations;
pub mod shingle;
pub mod simhash;
pub mod text;

pub use cdc::{
    data_chunks, slice_chunks, DataChunks, SliceChunks, CDC_BOUNDARY_MASK, CDC_MAX_SIZE,
    CDC_MIN_SIZE, CDC_WINDOW_SIZE,
};
pub use codec::{
    c2d, c2i, encode, Component, ComponentKind, BASE32_ALPHABET, BODY_LEN, CODE_LEN,
    COMPONENT_LEN, HEAD_CID, HEAD_DID, HEAD_IID, HEAD_MID,
};
pub use distance::{hamming_distance, jaccard_similarity};
pub use error::{Error, Result};
pub use generate::{
    content_component_text, data_component, data_component_from_reader,
    generate_content_id_text, generate_data_id, generate_data_id_from_reader,
    generate_instance_id, generate_instance_id_from_reader, generate_meta_id,
    instance_component, instance_hash, instance_hash_from_reader, meta_component,
    CONTENT_NGRAM_SIZE, INSTANCE_LEAF_SIZE, META_FEATURE_LEN, META_FEATURE_SEED,
    META_NGRAM_SIZE,
};
pub use minhash::{
    feature_hash, minimum_hash, MinHashSignature, MinHasher, MINHASH_COMPRESSED_BITS,
    MINHASH_PERMUTATIONS,
};
pub use shingle::sliding_window;
pub use simhash::similarity_hash;
pub use text::{
    normalize_creators, normalize_text, trim, trim_default, CREATOR_SEPARATOR, INPUT_TRIM,
};
