//! Cryptographic primitives behind the BIP39 codec.
//!
//! - **SHA-256** for the mnemonic checksum
//! - **PBKDF2-HMAC-SHA512** for seed derivation
//! - **OS entropy** (`getrandom`) behind the [`EntropySource`] trait

pub mod hash;
pub mod kdf;
pub mod random;

pub use hash::sha256;
pub use kdf::pbkdf2_hmac_sha512;
pub use random::{random_bytes, EntropySource, OsEntropy};
