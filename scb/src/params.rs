//! Per-message parameters: `max_hash` and `max_count`.

use crate::error::Error;

/// `max_count` and `max_hash`, validated so that `1 <= max_count, max_hash`
/// and `max_count + max_hash <= 16` always holds for a constructed `Params`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    /// Bytes of the block hash used as the fingerprint.
    pub max_hash: u8,
    /// Bytes reserved for the per-fingerprint repetition counter.
    pub max_count: u8,
}

impl Params {
    /// Construct and validate in one step.
    pub fn new(max_count: u8, max_hash: u8) -> Result<Self, Error> {
        let params = Params {
            max_count,
            max_hash,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validate `1 <= max_count, max_hash <= 16` and `max_count + max_hash
    /// <= 16`. Callers should check this before any block work begins.
    pub fn validate(&self) -> Result<(), Error> {
        let in_range = |v: u8| (1..=16).contains(&v);
        if !in_range(self.max_count)
            || !in_range(self.max_hash)
            || self.max_count as u16 + self.max_hash as u16 > 16
        {
            return Err(Error::InvalidParameters {
                max_count: self.max_count,
                max_hash: self.max_hash,
            });
        }
        Ok(())
    }

    /// Number of zero-prefix bytes in the redirection payload:
    /// `16 - max_count - max_hash`.
    pub(crate) fn zero_prefix_len(&self) -> usize {
        16 - self.max_count as usize - self.max_hash as usize
    }

    /// Whether a message of `len` bytes stays in the secure regime: the
    /// per-fingerprint counter cannot wrap within the message, i.e. the
    /// message's block count is at most `2^(8 * max_count)`.
    pub fn is_secure_for(&self, len: usize) -> bool {
        let blocks = (len as u128 + 15) / 16;
        match 1u128.checked_shl(8 * self.max_count as u32) {
            Some(bound) => blocks <= bound,
            None => true, // max_count == 16: bound is 2^128, always secure
        }
    }
}
