//! 14-word mnemonic phrase generation, validation, and decoding.
//!
//! A phrase encodes 154 bits: 149 entropy bits followed by a 5-bit
//! checksum, split into fourteen 11-bit wordlist indices. The checksum
//! hashes the ASCII '0'/'1' text of the entropy bits, so phrases are only
//! interchangeable with codecs that share that convention.

mod bits;
mod wordlist;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::hash::sha256;

use self::wordlist::Wordlist;

/// Number of words in a phrase.
pub const WORD_COUNT: usize = 14;

/// Number of entropy bits carried by a phrase.
pub const ENTROPY_BITS: usize = 149;

/// Number of checksum bits appended to the entropy.
pub const CHECKSUM_BITS: usize = 5;

/// Total bits encoded by a phrase, entropy plus checksum.
pub const CHECKSUMMED_BITS: usize = ENTROPY_BITS + CHECKSUM_BITS;

/// Bits encoded by a single word.
pub(crate) const BITS_PER_WORD: usize = 11;

/// Minimum number of hex characters accepted as caller-supplied entropy.
const MIN_ENTROPY_HEX_LEN: usize = 39;

/// Number of random bytes drawn before the whitening hash.
const RANDOM_ENTROPY_LEN: usize = 32;

/// Generate a new 14-word mnemonic phrase.
///
/// With `provided_entropy` the phrase is built from the given hex string,
/// which must be at least 39 hex characters. Without it, 32 bytes are
/// drawn from the operating system RNG and whitened through SHA-256.
///
/// # Example
/// ```
/// let phrase = phrase14::generate_mnemonic(None).unwrap();
/// assert!(phrase14::validate_mnemonic(&phrase).unwrap());
/// ```
pub fn generate_mnemonic(provided_entropy: Option<&str>) -> Result<String> {
    generate_mnemonic_with_rng(provided_entropy, &mut OsRng)
}

/// Generate a 14-word mnemonic phrase using the caller's RNG.
///
/// [`generate_mnemonic`] is the `OsRng` shorthand; this entry point lets
/// tests substitute a deterministic generator.
pub fn generate_mnemonic_with_rng<R>(provided_entropy: Option<&str>, rng: &mut R) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    let entropy = match provided_entropy {
        Some(hex_str) => decode_entropy_hex(hex_str)?,
        None => random_entropy(rng),
    };

    let mut entropy_bits = bits::bytes_to_bit_string(&entropy);
    entropy_bits.truncate(ENTROPY_BITS);

    let checksum = bits::checksum_bits(&entropy_bits);
    let full_bits = format!("{}{}", entropy_bits, checksum);

    let wordlist = Wordlist::english();
    let words: Vec<&str> = bits::bit_string_to_indices(&full_bits)
        .iter()
        .map(|&index| wordlist.word(index))
        .collect();

    // Self-check before handing the phrase out.
    if !bits::verify_checksum(&full_bits) {
        return Err(Error::InternalChecksumMismatch);
    }

    Ok(words.join(" "))
}

/// Decode a phrase back to its 149-character entropy bit string.
///
/// The phrase must contain exactly 14 known words and carry a matching
/// checksum. The returned string holds the verified entropy bits only.
pub fn mnemonic_to_entropy(phrase: &str) -> Result<String> {
    let mut full_bits = decode_checksummed_bits(phrase)?;
    full_bits.truncate(ENTROPY_BITS);
    Ok(full_bits)
}

/// Validate a mnemonic phrase, returning `true` on success.
///
/// Failures keep their specific kind so callers can tell a wrong word
/// count from an unknown word from a checksum mismatch.
pub fn validate_mnemonic(phrase: &str) -> Result<bool> {
    decode_checksummed_bits(phrase)?;
    Ok(true)
}

/// Decode a phrase to its full 154-character checksummed bit string,
/// verifying word count, wordlist membership, and checksum on the way.
pub(crate) fn decode_checksummed_bits(phrase: &str) -> Result<String> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() != WORD_COUNT {
        return Err(Error::InvalidWordCount(words.len()));
    }

    let wordlist = Wordlist::english();
    let mut indices = Vec::with_capacity(WORD_COUNT);
    for word in words {
        let index = wordlist
            .index_of(word)
            .ok_or_else(|| Error::UnknownWord(word.to_string()))?;
        indices.push(index);
    }

    let full_bits = bits::indices_to_bit_string(&indices);
    if !bits::verify_checksum(&full_bits) {
        return Err(Error::ChecksumMismatch);
    }

    Ok(full_bits)
}

/// Validate and decode caller-supplied entropy hex.
///
/// Odd-length input loses its trailing lone nibble rather than being
/// rejected, so the 39-character minimum decodes to 19 bytes.
fn decode_entropy_hex(hex_str: &str) -> Result<Vec<u8>> {
    if hex_str.len() < MIN_ENTROPY_HEX_LEN || !hex_str.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidEntropy(
            "must provide at least 39 hex characters".to_string(),
        ));
    }

    let even = &hex_str[..hex_str.len() - hex_str.len() % 2];
    hex::decode(even).map_err(|e| Error::InvalidEntropy(e.to_string()))
}

/// Draw fresh entropy: 32 random bytes whitened through SHA-256.
fn random_entropy<R>(rng: &mut R) -> Vec<u8>
where
    R: RngCore + CryptoRng,
{
    let mut buffer = [0u8; RANDOM_ENTROPY_LEN];
    rng.fill_bytes(&mut buffer);
    sha256(&buffer).to_vec()
}
