//! Message driver: full-block iteration plus ciphertext stealing for an
//! unaligned tail.

use crate::{
    block::{AesBlockCipher, Block, BlockCipher128},
    decrypt::Decryptor,
    encrypt::Encryptor,
    error::Error,
    hash::{HashProfile, Sha256Profile},
    key::Key,
    params::Params,
};

/// Reject lengths the tail-stealing rule can't handle: zero, or shorter
/// than two blocks while unaligned.
fn validate_message_len(len: usize) -> Result<(), Error> {
    if len == 0 {
        return Err(Error::InvalidMessageLength(len));
    }
    let m = len % 16;
    if m != 0 && len < 17 {
        return Err(Error::InvalidMessageLength(len));
    }
    Ok(())
}

fn read_block(buf: &[u8], offset: usize) -> Block {
    let mut block = [0u8; 16];
    block.copy_from_slice(&buf[offset..offset + 16]);
    block
}

/// Encrypt `plaintext` into the caller-provided `ciphertext` buffer of the
/// same length, using block cipher `C` and hash profile `H`.
pub fn encrypt_into<C: BlockCipher128, H: HashProfile>(
    key: &Key,
    params: &Params,
    plaintext: &[u8],
    ciphertext: &mut [u8],
) -> Result<(), Error> {
    params.validate()?;
    if ciphertext.len() != plaintext.len() {
        return Err(Error::LengthMismatch {
            expected: plaintext.len(),
            actual: ciphertext.len(),
        });
    }
    let len = plaintext.len();
    validate_message_len(len)?;

    let mut enc = Encryptor::<C, H>::new(key.clone(), *params);
    let l = (len + 15) / 16;
    let m = len % 16;

    // Blocks 0 .. l-2 inclusive, full-width, common to both the aligned
    // and unaligned-tail cases.
    for i in 0..l.saturating_sub(1) {
        let off = i * 16;
        let block = read_block(plaintext, off);
        let out = enc.encrypt_block(&block);
        ciphertext[off..off + 16].copy_from_slice(&out);
    }

    if m == 0 {
        // Aligned message: the remaining block is a full block like the rest.
        let off = (l - 1) * 16;
        let block = read_block(plaintext, off);
        let out = enc.encrypt_block(&block);
        ciphertext[off..off + 16].copy_from_slice(&out);
    } else {
        // Unaligned tail: ciphertext stealing. `l >= 2` is guaranteed here
        // by `validate_message_len` (len >= 17 whenever m != 0).
        let prev_off = (l - 2) * 16;
        let last_off = (l - 1) * 16;

        // Read the penultimate ciphertext block (already written by the
        // loop above) before the per-block call below overwrites it.
        let prev_ctx = read_block(ciphertext, prev_off);

        ciphertext[last_off..last_off + m].copy_from_slice(&prev_ctx[..m]);

        let mut synthetic = [0u8; 16];
        synthetic[..m].copy_from_slice(&plaintext[last_off..last_off + m]);
        synthetic[m..].copy_from_slice(&prev_ctx[m..]);

        let out = enc.encrypt_block(&synthetic);
        ciphertext[prev_off..prev_off + 16].copy_from_slice(&out);
    }

    Ok(())
}

/// Decrypt `ciphertext` into the caller-provided `plaintext` buffer of the
/// same length, mirroring `encrypt_into`.
pub fn decrypt_into<C: BlockCipher128, H: HashProfile>(
    key: &Key,
    params: &Params,
    ciphertext: &[u8],
    plaintext: &mut [u8],
) -> Result<(), Error> {
    params.validate()?;
    if plaintext.len() != ciphertext.len() {
        return Err(Error::LengthMismatch {
            expected: ciphertext.len(),
            actual: plaintext.len(),
        });
    }
    let len = ciphertext.len();
    validate_message_len(len)?;

    let mut dec = Decryptor::<C, H>::new(key.clone(), *params);
    let l = (len + 15) / 16;
    let m = len % 16;

    for i in 0..l.saturating_sub(1) {
        let off = i * 16;
        let block = read_block(ciphertext, off);
        let out = dec.decrypt_block(&block);
        plaintext[off..off + 16].copy_from_slice(&out);
    }

    if m == 0 {
        let off = (l - 1) * 16;
        let block = read_block(ciphertext, off);
        let out = dec.decrypt_block(&block);
        plaintext[off..off + 16].copy_from_slice(&out);
    } else {
        let prev_off = (l - 2) * 16;
        let last_off = (l - 1) * 16;

        let prev_ptx = read_block(plaintext, prev_off);

        plaintext[last_off..last_off + m].copy_from_slice(&prev_ptx[..m]);

        let mut synthetic = [0u8; 16];
        synthetic[..m].copy_from_slice(&ciphertext[last_off..last_off + m]);
        synthetic[m..].copy_from_slice(&prev_ptx[m..]);

        let out = dec.decrypt_block(&synthetic);
        plaintext[prev_off..prev_off + 16].copy_from_slice(&out);
    }

    Ok(())
}

/// Allocate and return the ciphertext, using AES-128 and the default
/// (SHA-256) hash profile.
pub fn encrypt(key: &Key, params: &Params, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    encrypt_with::<AesBlockCipher, Sha256Profile>(key, params, plaintext)
}

/// Allocate and return the plaintext, using AES-128 and the default
/// (SHA-256) hash profile.
pub fn decrypt(key: &Key, params: &Params, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    decrypt_with::<AesBlockCipher, Sha256Profile>(key, params, ciphertext)
}

/// Allocating encrypt, generic over block cipher and hash profile.
pub fn encrypt_with<C: BlockCipher128, H: HashProfile>(
    key: &Key,
    params: &Params,
    plaintext: &[u8],
) -> Result<Vec<u8>, Error> {
    let mut ciphertext = vec![0u8; plaintext.len()];
    encrypt_into::<C, H>(key, params, plaintext, &mut ciphertext)?;
    Ok(ciphertext)
}

/// Allocating decrypt, generic over block cipher and hash profile.
pub fn decrypt_with<C: BlockCipher128, H: HashProfile>(
    key: &Key,
    params: &Params,
    ciphertext: &[u8],
) -> Result<Vec<u8>, Error> {
    let mut plaintext = vec![0u8; ciphertext.len()];
    decrypt_into::<C, H>(key, params, ciphertext, &mut plaintext)?;
    Ok(plaintext)
}
