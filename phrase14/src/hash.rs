//! Cryptographic primitives shared by the mnemonic codec and key derivation.

use hmac::Hmac;
use sha2::{Digest, Sha256, Sha512};

use crate::error::{Error, Result};

/// Compute SHA-256 hash
#[inline]
pub(crate) fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Stretch `password` with PBKDF2-HMAC-SHA512, filling `key` with the result.
pub(crate) fn pbkdf2_sha512(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    key: &mut [u8],
) -> Result<()> {
    pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, rounds, key)
        .map_err(|_| Error::InvalidInput("PBKDF2 key derivation failed".to_string()))
}
