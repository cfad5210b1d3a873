//! Nullable random — deterministic entropy for tests.

use mnemo_crypto::EntropySource;
use mnemo_types::MnemonicError;

/// A deterministic entropy source for testing.
///
/// Returns pre-configured byte strings in order, cycling when exhausted. Each
/// request is served from the start of the next configured value, repeated as
/// needed to fill the buffer.
pub struct NullEntropy {
    outputs: Vec<Vec<u8>>,
    index: usize,
    fail_with: Option<String>,
}

impl NullEntropy {
    /// Create with a sequence of deterministic outputs.
    pub fn new(outputs: Vec<Vec<u8>>) -> Self {
        Self {
            outputs,
            index: 0,
            fail_with: None,
        }
    }

    /// Create with a single value returned for every call.
    pub fn constant(value: impl Into<Vec<u8>>) -> Self {
        Self::new(vec![value.into()])
    }

    /// Create a source whose every call fails, for error-path tests.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outputs: Vec::new(),
            index: 0,
            fail_with: Some(reason.into()),
        }
    }

    /// Number of requests served so far.
    pub fn calls(&self) -> usize {
        self.index
    }
}

impl EntropySource for NullEntropy {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), MnemonicError> {
        if let Some(reason) = &self.fail_with {
            return Err(MnemonicError::Entropy(reason.clone()));
        }
        let current = match self.outputs.get(self.index % self.outputs.len().max(1)) {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return Err(MnemonicError::Entropy("no scripted output".into())),
        };
        for (dst, src) in dest.iter_mut().zip(current.iter().cycle()) {
            *dst = *src;
        }
        self.index += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "null-entropy"
    }
}
