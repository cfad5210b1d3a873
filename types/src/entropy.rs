//! Entropy, generation strength and mnemonic word counts.
//!
//! BIP39 ties the three together: ENT bits of entropy carry CS = ENT / 32
//! checksum bits, and (ENT + CS) / 11 words encode both.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::MnemonicError;

/// Allowed entropy lengths in bytes (128 to 256 bits in 32-bit steps).
pub const ALLOWED_ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

/// Validated mnemonic entropy.
///
/// The length is always one of [`ALLOWED_ENTROPY_LENGTHS`]. Bytes are zeroized
/// on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy(Vec<u8>);

impl Entropy {
    /// Wrap `bytes` after checking the length.
    pub fn new(bytes: Vec<u8>) -> Result<Self, MnemonicError> {
        check_entropy_len(bytes.len())?;
        Ok(Self(bytes))
    }

    /// Copy `bytes` after checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MnemonicError> {
        check_entropy_len(bytes.len())?;
        Ok(Self(bytes.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// ENT: entropy length in bits.
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// Number of words the entropy encodes to.
    pub fn word_count(&self) -> WordCount {
        match self.0.len() {
            16 => WordCount::Words12,
            20 => WordCount::Words15,
            24 => WordCount::Words18,
            28 => WordCount::Words21,
            _ => WordCount::Words24,
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl TryFrom<Vec<u8>> for Entropy {
    type Error = MnemonicError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for Entropy {
    type Error = MnemonicError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entropy(<{} bytes>)", self.0.len())
    }
}

/// Fail with [`MnemonicError::InvalidEntropy`] unless `len` is an allowed byte length.
pub fn check_entropy_len(len: usize) -> Result<(), MnemonicError> {
    if ALLOWED_ENTROPY_LENGTHS.contains(&len) {
        Ok(())
    } else {
        Err(MnemonicError::InvalidEntropy(len))
    }
}

/// Entropy size requested for mnemonic generation, in bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Strength(u32);

impl Strength {
    /// 128 bits, a 12-word mnemonic.
    pub const DEFAULT: Strength = Strength(128);

    /// Accepts any positive multiple of 32 up to 256.
    pub fn new(bits: u32) -> Result<Self, MnemonicError> {
        if bits > 0 && bits <= 256 && bits % 32 == 0 {
            Ok(Self(bits))
        } else {
            Err(MnemonicError::InvalidStrength(bits))
        }
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    /// Number of random bytes to draw.
    pub fn byte_len(self) -> usize {
        (self.0 / 8) as usize
    }
}

impl Default for Strength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Strength {
    type Error = MnemonicError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits", self.0)
    }
}

/// Number of words in a well-formed mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordCount {
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

impl WordCount {
    pub const ALL: [WordCount; 5] = [
        WordCount::Words12,
        WordCount::Words15,
        WordCount::Words18,
        WordCount::Words21,
        WordCount::Words24,
    ];

    /// Returns `None` for any count outside {12, 15, 18, 21, 24}.
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            12 => Some(Self::Words12),
            15 => Some(Self::Words15),
            18 => Some(Self::Words18),
            21 => Some(Self::Words21),
            24 => Some(Self::Words24),
            _ => None,
        }
    }

    pub fn count(self) -> usize {
        match self {
            Self::Words12 => 12,
            Self::Words15 => 15,
            Self::Words18 => 18,
            Self::Words21 => 21,
            Self::Words24 => 24,
        }
    }

    /// Entropy bytes encoded by this many words.
    pub fn entropy_len(self) -> usize {
        self.count() * 11 / 33 * 4
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} words", self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_accepts_allowed_lengths() {
        for len in ALLOWED_ENTROPY_LENGTHS {
            let entropy = Entropy::new(vec![0u8; len]).unwrap();
            assert_eq!(entropy.len(), len);
            assert_eq!(entropy.bit_len(), len * 8);
        }
    }

    #[test]
    fn entropy_rejects_other_lengths() {
        for len in [0, 1, 12, 15, 17, 31, 33, 64] {
            assert_eq!(
                Entropy::new(vec![0u8; len]).unwrap_err(),
                MnemonicError::InvalidEntropy(len)
            );
        }
    }

    #[test]
    fn entropy_debug_hides_bytes() {
        let entropy = Entropy::new(vec![0x7f; 16]).unwrap();
        assert_eq!(format!("{entropy:?}"), "Entropy(<16 bytes>)");
    }

    #[test]
    fn word_count_matches_entropy_length() {
        for wc in WordCount::ALL {
            let entropy = Entropy::new(vec![1u8; wc.entropy_len()]).unwrap();
            assert_eq!(entropy.word_count(), wc);
        }
    }

    #[test]
    fn word_count_from_count() {
        assert_eq!(WordCount::from_count(12), Some(WordCount::Words12));
        assert_eq!(WordCount::from_count(24), Some(WordCount::Words24));
        assert_eq!(WordCount::from_count(13), None);
        assert_eq!(WordCount::from_count(0), None);
    }

    #[test]
    fn strength_bounds() {
        assert!(Strength::new(32).is_ok());
        assert!(Strength::new(128).is_ok());
        assert!(Strength::new(256).is_ok());
        assert_eq!(Strength::new(0), Err(MnemonicError::InvalidStrength(0)));
        assert_eq!(Strength::new(100), Err(MnemonicError::InvalidStrength(100)));
        assert_eq!(Strength::new(288), Err(MnemonicError::InvalidStrength(288)));
    }

    #[test]
    fn strength_default_is_128() {
        assert_eq!(Strength::default().bits(), 128);
        assert_eq!(Strength::default().byte_len(), 16);
    }
}
