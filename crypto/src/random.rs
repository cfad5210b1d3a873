//! Secure random bytes for mnemonic generation.

use mnemo_types::MnemonicError;
use zeroize::Zeroizing;

/// A source of random bytes used to seed mnemonic generation.
///
/// Production code uses [`OsEntropy`]; tests substitute a deterministic source.
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), MnemonicError>;

    fn name(&self) -> &str;
}

/// The operating system's CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), MnemonicError> {
        getrandom::getrandom(dest).map_err(|e| MnemonicError::Entropy(e.to_string()))
    }

    fn name(&self) -> &str {
        "os"
    }
}

/// Draw `len` bytes from `source` into a buffer that is wiped on drop.
pub fn random_bytes<S: EntropySource + ?Sized>(
    source: &mut S,
    len: usize,
) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
    let mut buf = Zeroizing::new(vec![0u8; len]);
    source.fill_bytes(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_entropy_fills_requested_length() {
        let bytes = random_bytes(&mut OsEntropy, 32).unwrap();
        assert_eq!(bytes.len(), 32);
    }

    #[test]
    fn os_entropy_is_not_constant() {
        let a = random_bytes(&mut OsEntropy, 32).unwrap();
        let b = random_bytes(&mut OsEntropy, 32).unwrap();
        assert_ne!(*a, *b);
    }

    #[test]
    fn zero_length_request_is_empty() {
        let bytes = random_bytes(&mut OsEntropy, 0).unwrap();
        assert!(bytes.is_empty());
    }
}
