//! The 16-byte key: the sole cryptographic secret for a message.

use core::fmt;

use zeroize::Zeroize;

use crate::error::Error;

/// A fixed 16-byte key, immutable for the duration of a message.
///
/// Zeroized on drop; `Debug` never prints the key material.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Key([u8; 16]);

impl Key {
    /// Build a key directly from 16 bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Key(bytes)
    }

    /// Build a key from the first 16 bytes of `bytes`; any further bytes
    /// are ignored.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < 16 {
            return Err(Error::ShortKey(bytes.len()));
        }
        let mut key = [0u8; 16];
        key.copy_from_slice(&bytes[..16]);
        Ok(Key(key))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Key").field(&"..").finish()
    }
}
