//! Unicode normalization and word splitting for mnemonic text.
//!
//! Words are split on ASCII space after NFKD. U+3000 IDEOGRAPHIC SPACE has a
//! compatibility decomposition to U+0020, so Japanese mnemonics joined with it
//! split the same way.

use mnemo_types::{MnemonicError, WordCount};
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// NFKD-normalized mnemonic text and its words.
///
/// Both copies are wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Normalized {
    nfkd: String,
    words: Vec<String>,
    #[zeroize(skip)]
    word_count: WordCount,
}

impl Normalized {
    /// The whole normalized text.
    pub fn as_str(&self) -> &str {
        &self.nfkd
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }
}

/// Apply NFKD to `text`.
pub fn nfkd(text: &str) -> String {
    text.nfkd().collect()
}

/// Decode UTF-8 and apply NFKD.
///
/// Fails with [`MnemonicError::InvalidType`] when `bytes` is not text.
pub fn nfkd_bytes(bytes: &[u8]) -> Result<String, MnemonicError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| MnemonicError::InvalidType(format!("expected UTF-8 text: {e}")))?;
    Ok(nfkd(text))
}

/// Normalize `text` and split it into words, requiring 12, 15, 18, 21 or 24 of them.
///
/// Splitting is on single ASCII spaces with no trimming: leading, trailing or
/// doubled spaces produce empty words, which count towards the total.
pub fn normalize(text: &str) -> Result<Normalized, MnemonicError> {
    let mut nfkd = nfkd(text);
    let mut words: Vec<String> = nfkd.split(' ').map(str::to_owned).collect();
    let count = words.len();
    let Some(word_count) = WordCount::from_count(count) else {
        nfkd.zeroize();
        words.zeroize();
        return Err(MnemonicError::InvalidMnemonic(format!(
            "expected 12, 15, 18, 21 or 24 words, got {count}"
        )));
    };
    Ok(Normalized {
        nfkd,
        words,
        word_count,
    })
}
