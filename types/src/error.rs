//! Error type shared by the codec, seed derivation and generation paths.

use thiserror::Error;

/// Errors arising from mnemonic operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MnemonicError {
    #[error("invalid strength: {0} bits (must be a positive multiple of 32, at most 256)")]
    InvalidStrength(u32),

    #[error("invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("invalid mnemonic: word {position} is not in the word list")]
    UnknownWord { position: usize },

    #[error("invalid mnemonic: checksum mismatch")]
    InvalidChecksum,

    #[error("invalid entropy: {0} bytes (must be 16, 20, 24, 28 or 32)")]
    InvalidEntropy(usize),

    #[error("invalid mnemonic type: {0}")]
    InvalidType(String),

    #[error("entropy source failed: {0}")]
    Entropy(String),

    #[error("seed derivation failed: {0}")]
    Derivation(String),
}

impl MnemonicError {
    /// Whether this error means the phrase itself is not a valid mnemonic.
    ///
    /// Unknown words and checksum mismatches are reported with their own
    /// variants but belong to the same caller-facing category.
    pub fn is_invalid_mnemonic(&self) -> bool {
        matches!(
            self,
            Self::InvalidMnemonic(_) | Self::UnknownWord { .. } | Self::InvalidChecksum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mnemonic_category_covers_word_and_checksum_failures() {
        assert!(MnemonicError::InvalidMnemonic("11 words".into()).is_invalid_mnemonic());
        assert!(MnemonicError::UnknownWord { position: 3 }.is_invalid_mnemonic());
        assert!(MnemonicError::InvalidChecksum.is_invalid_mnemonic());
        assert!(!MnemonicError::InvalidEntropy(15).is_invalid_mnemonic());
        assert!(!MnemonicError::InvalidStrength(100).is_invalid_mnemonic());
    }

    #[test]
    fn display_mentions_offending_value() {
        let err = MnemonicError::InvalidEntropy(17);
        assert!(err.to_string().contains("17 bytes"));
        let err = MnemonicError::InvalidStrength(129);
        assert!(err.to_string().contains("129 bits"));
    }
}
