//! Phrase14 - 14-word mnemonic codec and deterministic key derivation
//!
//! This library encodes entropy into 14-word mnemonic phrases with an
//! embedded 5-bit checksum, validates and decodes such phrases, and
//! stretches a validated phrase into a 256-bit key with PBKDF2-HMAC-SHA512.
//!
//! The scheme is deliberately not BIP-39: phrases carry 149 entropy bits,
//! and the checksum is computed over the ASCII text of the bit string
//! rather than over packed entropy bytes.
//!
//! # Example
//! ```
//! let phrase = phrase14::generate_mnemonic(Some(
//!     "00000401003008014030070100240500b0180000",
//! )).unwrap();
//! assert_eq!(
//!     phrase,
//!     "abandon ability able about above absent absorb abstract \
//!      absurd abuse access accident account adjust"
//! );
//! assert!(phrase14::validate_mnemonic(&phrase).unwrap());
//! ```

pub mod error;
mod hash;
pub mod key;
pub mod mnemonic;

// Re-export commonly used types for convenience
pub use error::{Error, Result};
pub use key::{derive_key, DEFAULT_PBKDF2_ITERATIONS, DERIVED_KEY_LEN};
pub use mnemonic::{
    generate_mnemonic, generate_mnemonic_with_rng, mnemonic_to_entropy, validate_mnemonic,
    CHECKSUM_BITS, CHECKSUMMED_BITS, ENTROPY_BITS, WORD_COUNT,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn version_is_set() {
        assert!(!super::VERSION.is_empty());
    }
}
