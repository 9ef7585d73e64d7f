//! Bit string helpers for the 14-word codec.
//!
//! Bit strings are plain `String`s of '0' and '1' characters. The checksum
//! is defined over that ASCII text, so nothing here packs bits back into
//! bytes before hashing.

use crate::hash::sha256;

use super::{BITS_PER_WORD, CHECKSUM_BITS, CHECKSUMMED_BITS, ENTROPY_BITS};

/// Expand raw bytes into their bit string form, 8 characters per byte.
pub(super) fn bytes_to_bit_string(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{:08b}", byte)).collect()
}

/// Compute the 5-bit checksum of a 149-character entropy bit string.
///
/// The digest input is the ASCII text of the bit string itself, one byte
/// per '0' or '1' character.
pub(super) fn checksum_bits(entropy_bits: &str) -> String {
    let digest = sha256(entropy_bits.as_bytes());
    let mut bits = bytes_to_bit_string(&digest);
    bits.truncate(CHECKSUM_BITS);
    bits
}

/// Check a full 154-character bit string against its trailing checksum.
pub(super) fn verify_checksum(bits: &str) -> bool {
    if bits.len() != CHECKSUMMED_BITS {
        return false;
    }
    let (entropy, checksum) = bits.split_at(ENTROPY_BITS);
    checksum_bits(entropy) == checksum
}

/// Split a bit string into 11-bit wordlist indices.
pub(super) fn bit_string_to_indices(bits: &str) -> Vec<u16> {
    bits.as_bytes()
        .chunks(BITS_PER_WORD)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit == b'1'))
        })
        .collect()
}

/// Join 11-bit wordlist indices back into a bit string.
pub(super) fn indices_to_bit_string(indices: &[u16]) -> String {
    indices
        .iter()
        .map(|index| format!("{:011b}", index))
        .collect()
}
