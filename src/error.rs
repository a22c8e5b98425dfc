//! Error type shared by every fallible operation in the crate.

/// Errors for codec, hashing and identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A parameter is out of range or inconsistent.
    #[error("invalid parameter: {0}")]
    InvalidParam(&'static str),
    /// Bit vectors handed to the similarity hasher differ in length.
    #[error("dimension mismatch (expected {expected}, got {got})")]
    DimensionMismatch {
        /// Length of the first vector, in bytes.
        expected: usize,
        /// Length of the offending vector, in bytes.
        got: usize,
    },
    /// An operation that needs at least one input got none.
    #[error("empty input")]
    EmptyInput,
    /// A code contains a character outside the Base32 alphabet.
    #[error("invalid base32 character {ch:?} at position {position}")]
    InvalidCharacter {
        /// The rejected character.
        ch: char,
        /// Character offset within the code.
        position: usize,
    },
    /// A code has a length no Base32 encoder can produce, or decodes to the
    /// wrong number of bytes for a component.
    #[error("invalid code length {0}")]
    InvalidLength(usize),
    /// The header byte names a component type this crate does not know.
    #[error("unknown component header {0:#04x}")]
    UnknownComponent(u8),
    /// Reading from the caller's stream failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
