//! Identifier generators.
//!
//! Each generator is a pure function of its input and the static tables:
//! - Meta-ID: majority-vote hash of normalized title and creators
//! - Content-ID: MinHash of normalized text shingles
//! - Data-ID: MinHash of content-defined chunks
//! - Instance-ID: SHA-256d Merkle root of the raw bytes
//!
//! The `*_component` functions return the typed [`Component`]; the `generate_*`
//! functions return its 13-character code.

use std::io::{self, Read};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::cdc::{data_chunks, slice_chunks};
use crate::codec::{Component, ComponentKind, BODY_LEN};
use crate::error::Result;
use crate::minhash::MinHasher;
use crate::shingle::char_windows;
use crate::simhash::fold_digests;
use crate::text::{normalize_creators, normalize_text, trim_default};

/// Characters per Meta-ID shingle.
pub const META_NGRAM_SIZE: usize = 2;

/// Bytes of each Meta-ID shingle digest and of their fold.
pub const META_FEATURE_LEN: usize = 8;

/// Big-endian prefix hashed in front of every Meta-ID shingle (feature table
/// version 1). Changing it changes every Meta-ID.
pub const META_FEATURE_SEED: u32 = 0x2F30;

/// Characters per Content-ID shingle.
pub const CONTENT_NGRAM_SIZE: usize = 13;

/// Leaf size of the Instance-ID Merkle tree.
pub const INSTANCE_LEAF_SIZE: usize = 64 * 1024;

const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;

/// Meta-ID code for a title and a `;`-separated creator list (may be empty).
pub fn generate_meta_id(title: &str, creators: &str) -> String {
    meta_component(title, creators).code()
}

/// Meta-ID as a typed component.
///
/// Title and creators are normalized, trimmed to the input budget and joined with
/// one space. The joined text is cut into [`META_NGRAM_SIZE`]-character shingles,
/// each shingle is hashed to [`META_FEATURE_LEN`] bytes and the hashes are folded
/// by majority vote. The body is the first [`BODY_LEN`] bytes of the fold.
pub fn meta_component(title: &str, creators: &str) -> Component {
    let title = normalize_text(title);
    let creators = normalize_creators(creators);
    let (title, title_len) = trim_default(&title);
    let (creators, creators_len) = trim_default(&creators);
    let text = format!("{title} {creators}");
    let text = text.trim();

    let digests: Vec<[u8; META_FEATURE_LEN]> = char_windows(text, META_NGRAM_SIZE)
        .iter()
        .map(|shingle| meta_feature(shingle))
        .collect();
    let folded = fold_digests(&digests);

    let mut body = [0u8; BODY_LEN];
    body.copy_from_slice(&folded[..BODY_LEN]);

    debug!(
        title_len,
        creators_len,
        shingles = digests.len(),
        "computed meta-id"
    );
    Component::new(ComponentKind::Meta, body)
}

fn meta_feature(shingle: &str) -> [u8; META_FEATURE_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(META_FEATURE_SEED.to_be_bytes());
    hasher.update(shingle.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; META_FEATURE_LEN];
    out.copy_from_slice(&digest[..META_FEATURE_LEN]);
    out
}

/// Content-ID code for plain text.
pub fn generate_content_id_text(text: &str) -> String {
    content_component_text(text).code()
}

/// Content-ID of plain text as a typed component.
pub fn content_component_text(text: &str) -> Component {
    let normalized = normalize_text(text);
    let mut hasher = MinHasher::new();
    for shingle in char_windows(&normalized, CONTENT_NGRAM_SIZE) {
        hasher.update(shingle.as_bytes());
    }
    debug!(shingles = hasher.count(), "computed content-id");
    Component::new(ComponentKind::Content, hasher.finish().compress())
}

/// Data-ID code for an in-memory buffer.
pub fn generate_data_id(data: &[u8]) -> String {
    data_component(data).code()
}

/// Data-ID of an in-memory buffer as a typed component.
pub fn data_component(data: &[u8]) -> Component {
    let mut hasher = MinHasher::new();
    for chunk in slice_chunks(data) {
        hasher.update(chunk);
    }
    finish_data(hasher)
}

/// Data-ID code for a stream, read incrementally.
pub fn generate_data_id_from_reader<R: Read>(reader: R) -> Result<String> {
    Ok(data_component_from_reader(reader)?.code())
}

/// Data-ID of a stream as a typed component.
pub fn data_component_from_reader<R: Read>(reader: R) -> Result<Component> {
    let mut hasher = MinHasher::new();
    for chunk in data_chunks(reader) {
        hasher.update(&chunk?);
    }
    Ok(finish_data(hasher))
}

fn finish_data(mut hasher: MinHasher) -> Component {
    // Empty data hashes as a single empty chunk.
    if hasher.count() == 0 {
        hasher.update(b"");
    }
    debug!(chunks = hasher.count(), "computed data-id");
    Component::new(ComponentKind::Data, hasher.finish().compress())
}

/// Instance-ID code for an in-memory buffer.
pub fn generate_instance_id(data: &[u8]) -> String {
    instance_component(data).code()
}

/// Instance-ID of an in-memory buffer as a typed component.
pub fn instance_component(data: &[u8]) -> Component {
    instance_from_hash(&instance_hash(data))
}

/// Instance-ID code for a stream, read incrementally.
pub fn generate_instance_id_from_reader<R: Read>(reader: R) -> Result<String> {
    Ok(instance_from_hash(&instance_hash_from_reader(reader)?).code())
}

/// Full 32-byte Merkle root behind an Instance-ID.
pub fn instance_hash(data: &[u8]) -> [u8; 32] {
    let leaves: Vec<[u8; 32]> = if data.is_empty() {
        vec![leaf_hash(b"")]
    } else {
        data.chunks(INSTANCE_LEAF_SIZE).map(leaf_hash).collect()
    };
    merkle_root(leaves)
}

/// [`instance_hash`] over a stream.
pub fn instance_hash_from_reader<R: Read>(mut reader: R) -> Result<[u8; 32]> {
    let mut buf = vec![0u8; INSTANCE_LEAF_SIZE];
    let mut leaves = Vec::new();
    loop {
        let n = read_full(&mut reader, &mut buf)?;
        if n == 0 {
            break;
        }
        leaves.push(leaf_hash(&buf[..n]));
        if n < buf.len() {
            break;
        }
    }
    if leaves.is_empty() {
        leaves.push(leaf_hash(b""));
    }
    Ok(merkle_root(leaves))
}

fn instance_from_hash(hash: &[u8; 32]) -> Component {
    let mut body = [0u8; BODY_LEN];
    body.copy_from_slice(&hash[..BODY_LEN]);
    Component::new(ComponentKind::Instance, body)
}

/// `SHA-256(SHA-256(prefix || parts...))`.
fn sha256d(prefix: u8, parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([prefix]);
    for part in parts {
        hasher.update(part);
    }
    Sha256::digest(hasher.finalize()).into()
}

fn leaf_hash(leaf: &[u8]) -> [u8; 32] {
    sha256d(LEAF_PREFIX, &[leaf])
}

fn node_hash(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    sha256d(NODE_PREFIX, &[left.as_slice(), right.as_slice()])
}

fn merkle_root(mut level: Vec<[u8; 32]>) -> [u8; 32] {
    let leaves = level.len();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => node_hash(left, right),
                // An odd node is carried up unchanged.
                _ => pair[0],
            })
            .collect();
    }
    debug!(leaves, "computed instance merkle root");
    level.first().copied().unwrap_or_else(|| leaf_hash(b""))
}

/// Fill `buf` from `reader` until it is full or the stream ends.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
