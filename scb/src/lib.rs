//! SCB ("Subtly Confidential Blocks"): a deterministic AES-128 block-cipher
//! mode that gives repeated plaintext blocks distinct ciphertexts, up to a
//! configurable security bound.
//!
//! SCB is **not** an authenticated encryption mode — it produces no tag and
//! detects no tampering. It is not a streaming mode: the whole message
//! length must be known up front so the tail-stealing rule (ciphertext
//! stealing, used for the final unaligned block of a message) can be
//! applied. Each call to [`encrypt`]/[`decrypt`] starts from an empty
//! per-message occurrence table; no state is carried between messages.
//!
//! The mode works by hashing every plaintext block and tracking, per
//! message, how many times each hash's low-order bits ("fingerprint") have
//! been seen. A block seen for the first time is encrypted directly under
//! AES-128. A repeat is instead encrypted as a payload carrying the
//! fingerprint and a repetition counter, so its ciphertext diverges from
//! the first occurrence's. On decryption, a ciphertext block that decodes
//! to that redirection pattern is resolved by looking up the first-seen
//! plaintext block instead of trusting the raw decode.
//!
//! ```
//! use scb::{decrypt, encrypt, Key, Params};
//!
//! let key = Key::new([0u8; 16]);
//! let params = Params::new(1, 1).unwrap();
//! let plaintext = b"Some secret plaintext, sixteen+".to_vec();
//!
//! let ciphertext = encrypt(&key, &params, &plaintext).unwrap();
//! let recovered = decrypt(&key, &params, &ciphertext).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```

mod block;
mod decrypt;
mod driver;
mod encrypt;
mod error;
mod fingerprint;
mod hash;
mod key;
mod params;
mod table;

pub use block::{AesBlockCipher, Block, BlockCipher128};
pub use decrypt::Decryptor;
pub use driver::{decrypt, decrypt_into, decrypt_with, encrypt, encrypt_into, encrypt_with};
pub use encrypt::Encryptor;
pub use error::{Error, Result};
pub use hash::{HashProfile, Sha256Profile};
pub use key::Key;
pub use params::Params;

#[cfg(feature = "md4")]
pub use hash::Md4Profile;
