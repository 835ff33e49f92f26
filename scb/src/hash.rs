//! The block hash: truncated SHA-256 (default) or MD4.
//!
//! Exactly one profile is used per message. Mixing profiles between the
//! encryptor and decryptor of a message is enforced at compile time:
//! `Encryptor<C, H>` and `Decryptor<C, H>` are generic over the same `H`, so
//! swapping profiles mid-message doesn't type-check rather than merely
//! failing at runtime.

use crate::block::Block;

/// Hashes a 16-byte block to a 16-byte digest. The first 16 bytes of the
/// underlying hash function's output are used.
pub trait HashProfile {
    fn block_hash(input: &Block) -> Block;

    /// Human-readable profile name, useful for diagnostics.
    fn name() -> &'static str;
}

/// Default profile: SHA-256, truncated to 16 bytes.
pub struct Sha256Profile;

impl HashProfile for Sha256Profile {
    fn block_hash(input: &Block) -> Block {
        use sha2::{Digest, Sha256};
        let digest = Sha256::digest(input);
        let mut out = [0u8; 16];
        out.copy_from_slice(&digest[..16]);
        out
    }

    fn name() -> &'static str {
        "sha256-truncated"
    }
}

/// Alternative profile: MD4 (faster, weaker).
#[cfg(feature = "md4")]
pub struct Md4Profile;

#[cfg(feature = "md4")]
impl HashProfile for Md4Profile {
    fn block_hash(input: &Block) -> Block {
        use md4::{Digest, Md4};
        let digest = Md4::digest(input);
        let mut out = [0u8; 16];
        out.copy_from_slice(digest.as_slice());
        out
    }

    fn name() -> &'static str {
        "md4"
    }
}
