//! Per-block decryptor.

use core::marker::PhantomData;

use crate::{
    block::{xor_block, Block, BlockCipher128},
    fingerprint::fingerprint,
    hash::HashProfile,
    key::Key,
    params::Params,
    table::DecryptTable,
};

/// Owns the key, an instantiated cipher, and the decryption occurrence
/// table for a single message.
pub struct Decryptor<C: BlockCipher128, H: HashProfile> {
    cipher: C,
    key: Key,
    table: DecryptTable,
    params: Params,
    _hash: PhantomData<H>,
}

impl<C: BlockCipher128, H: HashProfile> Decryptor<C, H> {
    pub fn new(key: Key, params: Params) -> Self {
        let cipher = C::new(&key);
        Decryptor {
            cipher,
            key,
            table: DecryptTable::new(),
            params,
            _hash: PhantomData,
        }
    }

    /// Decrypt one 16-byte ciphertext block, updating the occurrence table.
    pub fn decrypt_block(&mut self, ctx: &Block) -> Block {
        let decoded = self.cipher.decode(ctx);
        let x = xor_block(&decoded, self.key.as_bytes());

        let zero_len = self.params.zero_prefix_len();
        let is_redirect = x[..zero_len].iter().all(|&b| b == 0);
        let candidate_fp = fingerprint(&x, self.params.max_hash);

        // Both the zero-prefix shape and a known fingerprint must hold to
        // take the redirection path; either alone is not enough.
        if is_redirect {
            if let Some(block) = self.table.lookup(candidate_fp) {
                return block;
            }
        }

        // Either not a redirection, or a redirection to an unknown
        // fingerprint: the decoded block is itself the plaintext.
        let plaintext = decoded;
        let digest = H::block_hash(&plaintext);
        let fp = fingerprint(&digest, self.params.max_hash);
        self.table.insert(fp, plaintext);
        plaintext
    }
}
