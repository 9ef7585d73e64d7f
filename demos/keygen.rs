//! Key generation walkthrough for the phrase14 library.
//!
//! Generates a 14-word mnemonic phrase (or encodes caller-supplied entropy
//! hex), validates it, and derives the 256-bit key.
//!
//! Usage: keygen [entropy-hex] [iterations]

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let entropy = args.next();
    let iterations = args
        .next()
        .map(|raw| raw.parse::<u32>().context("iterations must be a number"))
        .transpose()?;

    let phrase = phrase14::generate_mnemonic(entropy.as_deref())?;
    tracing::info!(
        words = phrase.split_whitespace().count(),
        from_provided_entropy = entropy.is_some(),
        "generated mnemonic phrase"
    );
    println!("mnemonic: {}", phrase);

    let valid = phrase14::validate_mnemonic(&phrase)?;
    tracing::info!(valid, "validated phrase");

    let entropy_bits = phrase14::mnemonic_to_entropy(&phrase)?;
    println!("entropy:  {} bits", entropy_bits.len());

    let rounds = iterations
        .filter(|&n| n > 0)
        .unwrap_or(phrase14::DEFAULT_PBKDF2_ITERATIONS);
    tracing::info!(rounds, "deriving key");
    let key = phrase14::derive_key(&phrase, iterations)?;
    println!("key:      {}", key);

    Ok(())
}
