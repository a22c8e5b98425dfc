//! Component format and its Base32 text encoding.
//!
//! A component is one header byte followed by a [`BODY_LEN`]-byte digest:
//!
//! ```text
//! +------------+-------------+----------------------+
//! | type (4b)  | version (4b)| body (56 bits)       |
//! +------------+-------------+----------------------+
//! ```
//!
//! Its textual form (the *code*) is RFC 4648 Base32 without `=` padding: 8 bytes
//! become 13 characters, the last character carrying one zero pad bit. Codes are
//! emitted upper-case and accepted in any case.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::error::{Error, Result};

/// RFC 4648 Base32 alphabet.
pub const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Digest bytes following the header.
pub const BODY_LEN: usize = 7;

/// Header plus body.
pub const COMPONENT_LEN: usize = 1 + BODY_LEN;

/// Characters in the text form of one component.
pub const CODE_LEN: usize = (COMPONENT_LEN * 8).div_ceil(5);

/// Header byte of a Meta-ID.
pub const HEAD_MID: u8 = 0x00;
/// Header byte of a Content-ID.
pub const HEAD_CID: u8 = 0x10;
/// Header byte of a Data-ID.
pub const HEAD_DID: u8 = 0x20;
/// Header byte of an Instance-ID.
pub const HEAD_IID: u8 = 0x30;

/// Encode bytes as upper-case, unpadded Base32.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut buffer = 0u32;
    let mut bits = 0u32;
    for &byte in bytes {
        buffer = (buffer << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(BASE32_ALPHABET[((buffer >> bits) & 0x1F) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(BASE32_ALPHABET[((buffer << (5 - bits)) & 0x1F) as usize] as char);
    }
    out
}

/// Decode an unpadded Base32 code into raw bytes (case-insensitive).
///
/// Keeps `floor(len * 5 / 8)` bytes and discards the trailing pad bits. Fails on
/// characters outside the alphabet and on lengths no encoder produces.
pub fn c2d(code: &str) -> Result<Vec<u8>> {
    let n_chars = code.chars().count();
    if n_chars == 0 || matches!(n_chars % 8, 1 | 3 | 6) {
        return Err(Error::InvalidLength(n_chars));
    }

    let mut out = Vec::with_capacity(n_chars * 5 / 8);
    let mut buffer = 0u32;
    let mut bits = 0u32;
    for (position, ch) in code.chars().enumerate() {
        let value = decode_char(ch).ok_or(Error::InvalidCharacter { ch, position })?;
        buffer = (buffer << 5) | u32::from(value);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }
    Ok(out)
}

/// Decode a code into the big-endian unsigned integer of its bytes.
pub fn c2i(code: &str) -> Result<BigUint> {
    Ok(BigUint::from_bytes_be(&c2d(code)?))
}

fn decode_char(ch: char) -> Option<u8> {
    match ch.to_ascii_uppercase() {
        c @ 'A'..='Z' => Some(c as u8 - b'A'),
        c @ '2'..='7' => Some(c as u8 - b'2' + 26),
        _ => None,
    }
}

/// The four component types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Similarity hash of normalized title and creators.
    Meta,
    /// MinHash of normalized text content.
    Content,
    /// MinHash of content-defined chunks of raw bytes.
    Data,
    /// Exact-content Merkle hash of raw bytes.
    Instance,
}

impl ComponentKind {
    /// Header byte (type nibble, version 0).
    pub const fn header(self) -> u8 {
        match self {
            Self::Meta => HEAD_MID,
            Self::Content => HEAD_CID,
            Self::Data => HEAD_DID,
            Self::Instance => HEAD_IID,
        }
    }

    /// Parse a header byte.
    pub fn from_header(header: u8) -> Result<Self> {
        match header {
            HEAD_MID => Ok(Self::Meta),
            HEAD_CID => Ok(Self::Content),
            HEAD_DID => Ok(Self::Data),
            HEAD_IID => Ok(Self::Instance),
            other => Err(Error::UnknownComponent(other)),
        }
    }
}

/// One typed component: header plus fixed-length body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Component {
    kind: ComponentKind,
    body: [u8; BODY_LEN],
}

impl Component {
    /// Build a component from its type and body.
    pub const fn new(kind: ComponentKind, body: [u8; BODY_LEN]) -> Self {
        Self { kind, body }
    }

    /// Component type.
    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Digest body (without header).
    pub fn body(&self) -> &[u8; BODY_LEN] {
        &self.body
    }

    /// Header followed by body.
    pub fn to_bytes(&self) -> [u8; COMPONENT_LEN] {
        let mut out = [0u8; COMPONENT_LEN];
        out[0] = self.kind.header();
        out[1..].copy_from_slice(&self.body);
        out
    }

    /// Parse header and body from exactly [`COMPONENT_LEN`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (&header, rest) = bytes.split_first().ok_or(Error::InvalidLength(0))?;
        let body: [u8; BODY_LEN] = rest
            .try_into()
            .map_err(|_| Error::InvalidLength(bytes.len()))?;
        Ok(Self {
            kind: ComponentKind::from_header(header)?,
            body,
        })
    }

    /// Decode a 13-character code.
    pub fn decode(code: &str) -> Result<Self> {
        Self::from_bytes(&c2d(code)?)
    }

    /// Text form of the component.
    pub fn code(&self) -> String {
        encode(&self.to_bytes())
    }

    /// The component as a big-endian integer (header in the top byte).
    pub fn to_u64(&self) -> u64 {
        u64::from_be_bytes(self.to_bytes())
    }

    /// Hamming distance between two components, headers included.
    pub fn distance(&self, other: &Self) -> u32 {
        (self.to_u64() ^ other.to_u64()).count_ones()
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl FromStr for Component {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
