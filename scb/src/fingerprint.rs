//! Fingerprint extraction.
//!
//! The fingerprint is the big-endian integer formed from the last
//! `max_hash` bytes of a 16-byte digest: `h[16 - max_hash .. 16]`.

use crate::block::Block;

/// Extract the fingerprint integer from a digest, using the last
/// `max_hash` bytes.
pub(crate) fn fingerprint(digest: &Block, max_hash: u8) -> u128 {
    let max_hash = max_hash as usize;
    let mut buf = [0u8; 16];
    buf[16 - max_hash..].copy_from_slice(&digest[16 - max_hash..]);
    u128::from_be_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_only_trailing_bytes() {
        let mut digest = [0xAAu8; 16];
        digest[15] = 0x01;
        assert_eq!(fingerprint(&digest, 1), 0x01);
        digest[14] = 0x02;
        assert_eq!(fingerprint(&digest, 2), 0x0201);
    }

    #[test]
    fn max_hash_16_uses_whole_digest() {
        let mut digest = [0u8; 16];
        digest[15] = 1;
        let fp = fingerprint(&digest, 16);
        assert_eq!(fp, 1);
    }
}
