//! Fundamental types for BIP39 mnemonics.
//!
//! This crate defines the value types shared across every other crate in the workspace:
//! validated entropy, generation strength, mnemonic word counts, the derived seed,
//! and the error type every codec operation reports.

pub mod entropy;
pub mod error;
pub mod seed;

pub use entropy::{Entropy, Strength, WordCount};
pub use error::MnemonicError;
pub use seed::Seed;
