//! Block primitives: a 16-byte block cipher under a 128-bit key.
//!
//! Kept behind a narrow trait rather than calling AES directly from the
//! encryptor/decryptor, so tests can exercise the table bookkeeping with a
//! trivial fake cipher instead of real AES.

use cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};

use crate::key::Key;

/// A block is exactly 16 bytes.
pub type Block = [u8; 16];

/// `encode`/`decode` over 16-byte blocks under a 128-bit key.
pub trait BlockCipher128 {
    /// Expand the key once; reused for every block of a message.
    fn new(key: &Key) -> Self;

    /// AES-128 single-block encryption.
    fn encode(&self, block: &Block) -> Block;

    /// AES-128 single-block decryption (inverse of `encode`).
    fn decode(&self, block: &Block) -> Block;
}

/// The default [`BlockCipher128`]: raw AES-128 via the `aes` crate.
pub struct AesBlockCipher(aes::Aes128);

impl BlockCipher128 for AesBlockCipher {
    fn new(key: &Key) -> Self {
        let key = GenericArray::from_slice(&key.as_bytes()[..]);
        AesBlockCipher(aes::Aes128::new(key))
    }

    fn encode(&self, block: &Block) -> Block {
        let mut buf = GenericArray::clone_from_slice(&block[..]);
        self.0.encrypt_block(&mut buf);
        let mut out = [0u8; 16];
        out.copy_from_slice(buf.as_slice());
        out
    }

    fn decode(&self, block: &Block) -> Block {
        let mut buf = GenericArray::clone_from_slice(&block[..]);
        self.0.decrypt_block(&mut buf);
        let mut out = [0u8; 16];
        out.copy_from_slice(buf.as_slice());
        out
    }
}

/// Byte-wise XOR of two blocks.
pub(crate) fn xor_block(a: &Block, b: &Block) -> Block {
    let mut out = [0u8; 16];
    for i in 0..16 {
        out[i] = a[i] ^ b[i];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_inverts_encode() {
        let key = Key::new([0x2bu8, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c]);
        let cipher = AesBlockCipher::new(&key);
        let ptx = [0x6bu8, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a];
        let ctx = cipher.encode(&ptx);
        assert_eq!(cipher.decode(&ctx), ptx);
    }

    #[test]
    fn xor_is_involution() {
        let a = [1u8; 16];
        let b = [2u8; 16];
        let x = xor_block(&a, &b);
        assert_eq!(xor_block(&x, &b), a);
    }
}
