//! Error taxonomy.
//!
//! The core only ever constructs [`Error::InvalidParameters`],
//! [`Error::InvalidMessageLength`], [`Error::LengthMismatch`] and
//! [`Error::ShortKey`]. The `Io*`/`BadImage` variants exist so that a future
//! CLI or image front-end can report through the same type; this crate
//! never builds one.

use std::path::PathBuf;

/// Everything that can go wrong calling into this crate, or into a file or
/// image front-end built on top of it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `max_count`/`max_hash` out of `1..=16`, or their sum exceeds 16.
    #[error(
        "max_count and max_hash must each be in 1..=16 and sum to at most 16 \
         (got max_count={max_count}, max_hash={max_hash})"
    )]
    InvalidParameters { max_count: u8, max_hash: u8 },

    /// Message length unsuitable for the tail-stealing rule: either empty,
    /// or shorter than the two blocks of context ciphertext stealing needs
    /// for an unaligned tail.
    #[error(
        "message length {0} is invalid: must be nonzero, and at least 17 bytes \
         when not a multiple of 16"
    )]
    InvalidMessageLength(usize),

    /// The caller-supplied output buffer doesn't match the input length.
    #[error("output buffer length ({actual}) does not match input length ({expected})")]
    LengthMismatch { expected: usize, actual: usize },

    /// Fewer than 16 bytes of key material were supplied.
    #[error("key material is too short: need at least 16 bytes, got {0}")]
    ShortKey(usize),

    /// Reserved for a file/image CLI front-end; not raised
    /// by this crate.
    #[error("input file not found: {0:?}")]
    IoNotFound(PathBuf),

    /// Reserved for a file/image CLI front-end; not raised
    /// by this crate.
    #[error("failed to read input")]
    IoRead(#[source] std::io::Error),

    /// Reserved for a file/image CLI front-end; not raised
    /// by this crate.
    #[error("failed to write output")]
    IoWrite(#[source] std::io::Error),

    /// Reserved for a PNG-decoding front-end; not raised by this crate.
    #[error("failed to decode image: {0}")]
    BadImage(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
