//! Deterministic key derivation from a validated mnemonic phrase.
//!
//! The decoded 154-character bit string is split into two 77-character
//! halves. Each half is hashed as ASCII text with SHA-256; the first
//! half's digest becomes the PBKDF2 salt after base-58 encoding, the
//! second half's digest becomes the password.

use crate::error::{Error, Result};
use crate::hash::{pbkdf2_sha512, sha256};
use crate::mnemonic::{decode_checksummed_bits, WORD_COUNT};

/// Default PBKDF2 iteration count.
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 210_000;

/// Length of the derived key in bytes.
pub const DERIVED_KEY_LEN: usize = 32;

/// Length of each bit segment hashed by the pipeline.
const SEGMENT_BITS: usize = 77;

/// Derive a 256-bit key from a mnemonic phrase, hex-encoded.
///
/// The phrase is validated first; any codec rejection keeps its specific
/// error kind. `iterations` overrides the PBKDF2 round count when it is
/// non-zero, otherwise the 210000-round default applies.
///
/// PBKDF2 at the default round count blocks the calling thread for a
/// noticeable moment. Callers on a latency-sensitive path should move
/// this onto a worker thread.
pub fn derive_key(phrase: &str, iterations: Option<u32>) -> Result<String> {
    if phrase.is_empty() || phrase.split_whitespace().count() != WORD_COUNT {
        return Err(Error::InvalidInput(
            "exactly 14 words are required".to_string(),
        ));
    }

    let full_bits = decode_checksummed_bits(phrase)?;

    let salt_bits = &full_bits[..SEGMENT_BITS];
    let key_seed_bits = &full_bits[full_bits.len() - SEGMENT_BITS..];

    let key_seed_digest = sha256(key_seed_bits.as_bytes());
    let salt_digest = sha256(salt_bits.as_bytes());
    let salt_text = bs58::encode(salt_digest).into_string();

    let rounds = match iterations {
        Some(n) if n > 0 => n,
        _ => DEFAULT_PBKDF2_ITERATIONS,
    };

    let mut key = [0u8; DERIVED_KEY_LEN];
    pbkdf2_sha512(&key_seed_digest, salt_text.as_bytes(), rounds, &mut key)?;

    Ok(hex::encode(key))
}
