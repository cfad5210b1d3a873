//! BIP39 mnemonic codec.
//!
//! - **Bit codec**: bytes and 11-bit word indices as binary-digit strings
//! - **Normalizer**: NFKD + ASCII-space splitting + word-count check
//! - **Checksum**: first ENT/32 bits of SHA-256(entropy)
//! - **Mnemonic codec**: entropy ↔ mnemonic, validation, generation
//! - **Seed derivation**: PBKDF2-HMAC-SHA512, 2048 rounds, 64-byte seed
//!
//! Every operation is a pure function of its inputs (plus the entropy source,
//! for generation). Word lists come from `mnemo-wordlist`.

pub mod bits;
pub mod checksum;
pub mod mnemonic;
pub mod normalize;
pub mod seed;

pub use checksum::derive_checksum_bits;
pub use mnemonic::{
    entropy_to_mnemonic, entropy_to_mnemonic_in, generate_mnemonic, generate_mnemonic_in,
    generate_mnemonic_with, mnemonic_to_entropy, mnemonic_to_entropy_in, validate_mnemonic,
    validate_mnemonic_in,
};
pub use normalize::{nfkd, nfkd_bytes, normalize, Normalized};
pub use seed::{mnemonic_to_seed, PBKDF2_ROUNDS, SALT_PREFIX};

pub use mnemo_crypto::{EntropySource, OsEntropy};
pub use mnemo_types::{Entropy, MnemonicError, Seed, Strength, WordCount};
pub use mnemo_wordlist::{Language, Wordlist, WordlistError};
