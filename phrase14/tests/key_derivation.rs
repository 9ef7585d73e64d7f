//! Tests for key derivation

use phrase14::{derive_key, generate_mnemonic_with_rng, Error, DEFAULT_PBKDF2_ITERATIONS};
use rand::{CryptoRng, RngCore};

const ZERO_PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon actor";
const LADDER_PHRASE: &str = "abandon ability able about above absent absorb abstract absurd abuse access accident account adjust";

/// RNG that only ever produces zero bytes.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        dest.fill(0);
        Ok(())
    }
}

impl CryptoRng for ZeroRng {}

#[test]
fn test_derive_key_zero_phrase_default_rounds() {
    let key = derive_key(ZERO_PHRASE, None).unwrap();
    assert_eq!(
        key,
        "b452cf837b75e32fce76db79e4bf598092cbd017a9f163d100d19b8188811f69"
    );
}

#[test]
fn test_derive_key_ladder_phrase_default_rounds() {
    let key = derive_key(LADDER_PHRASE, None).unwrap();
    assert_eq!(
        key,
        "0eed663107fbe3b242683480c235f5fb6d517d07df0d4becf40c406a38d6f168"
    );
}

#[test]
fn test_default_matches_explicit_rounds() {
    let implicit = derive_key(ZERO_PHRASE, None).unwrap();
    let explicit = derive_key(ZERO_PHRASE, Some(DEFAULT_PBKDF2_ITERATIONS)).unwrap();
    assert_eq!(implicit, explicit);
}

#[test]
fn test_zero_rounds_fall_back_to_default() {
    let implicit = derive_key(ZERO_PHRASE, None).unwrap();
    let zero = derive_key(ZERO_PHRASE, Some(0)).unwrap();
    assert_eq!(implicit, zero);
}

#[test]
fn test_iteration_override_changes_key() {
    let low = derive_key(ZERO_PHRASE, Some(1000)).unwrap();
    assert_eq!(
        low,
        "75b9a40af52615971cc5573ab5ea9a66382736ced981254320126506b80ac6f6"
    );
    assert_ne!(low, derive_key(ZERO_PHRASE, None).unwrap());
}

#[test]
fn test_derive_key_from_generated_phrase() {
    let phrase = generate_mnemonic_with_rng(None, &mut ZeroRng).unwrap();
    let key = derive_key(&phrase, None).unwrap();
    assert_eq!(
        key,
        "a9910799d48f52f129d2e957bf2f502e4ba42258c2c35551fe24639d07247ed9"
    );
}

#[test]
fn test_empty_phrase_rejected() {
    let err = derive_key("", None).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_wrong_word_count_rejected() {
    let err = derive_key("abandon abandon", None).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_codec_errors_propagate_unchanged() {
    let unknown = ZERO_PHRASE.replace("actor", "blorp");
    assert!(matches!(
        derive_key(&unknown, Some(1000)).unwrap_err(),
        Error::UnknownWord(_)
    ));

    let tampered = ZERO_PHRASE.replace("actor", "actress");
    assert!(matches!(
        derive_key(&tampered, Some(1000)).unwrap_err(),
        Error::ChecksumMismatch
    ));
}
