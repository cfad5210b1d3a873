//! The word list type and its reverse index.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::WordlistError;

/// Number of words in every BIP39 word list.
pub const WORDLIST_LEN: usize = 2048;

/// First entry of the Japanese list. Its presence selects the ideographic separator.
pub const JAPANESE_FIRST_WORD: &str = "\u{3042}\u{3044}\u{3053}\u{304f}\u{3057}\u{3093}";

/// Separator used when joining Japanese mnemonics.
pub const IDEOGRAPHIC_SPACE: &str = "\u{3000}";

/// An immutable list of 2048 words with a reverse index.
///
/// The index is keyed by the NFKD form of each word, so lookups must be made
/// with NFKD-normalized input (which is what the mnemonic normalizer produces).
#[derive(Clone)]
pub struct Wordlist {
    words: Vec<String>,
    index: HashMap<String, u16>,
    japanese: bool,
}

impl Wordlist {
    /// Build a word list, checking length, word shape and uniqueness.
    pub fn new(words: Vec<String>) -> Result<Self, WordlistError> {
        if words.len() != WORDLIST_LEN {
            return Err(WordlistError::WrongLength(words.len()));
        }

        let mut index = HashMap::with_capacity(WORDLIST_LEN);
        for (i, word) in words.iter().enumerate() {
            // Mnemonics are split after NFKD, so the shape check runs on that form.
            let key: String = word.nfkd().collect();
            if key.is_empty() || key.contains(' ') {
                return Err(WordlistError::InvalidWord {
                    word: word.clone(),
                    index: i,
                });
            }
            if index.insert(key, i as u16).is_some() {
                return Err(WordlistError::DuplicateWord {
                    word: word.clone(),
                    index: i,
                });
            }
        }

        let japanese = words[0] == JAPANESE_FIRST_WORD;
        Ok(Self {
            words,
            index,
            japanese,
        })
    }

    /// Build from a trusted static list (the embedded BIP39 lists).
    pub(crate) fn from_static(words: &[&'static str; WORDLIST_LEN]) -> Self {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.nfkd().collect::<String>(), i as u16))
            .collect();
        let japanese = words[0] == JAPANESE_FIRST_WORD;
        Self {
            words,
            index,
            japanese,
        }
    }

    /// Parse a JSON array of strings.
    pub fn from_json_str(json: &str) -> Result<Self, WordlistError> {
        let words: Vec<String> =
            serde_json::from_str(json).map_err(|e| WordlistError::Json(e.to_string()))?;
        Self::new(words)
    }

    /// Load a JSON word list file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, WordlistError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| WordlistError::Io(format!("{}: {e}", path.display())))?;
        let list = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), japanese = list.japanese, "loaded word list");
        Ok(list)
    }

    /// Word at `index`, or `None` past the end.
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(index as usize).map(String::as_str)
    }

    /// Position of an NFKD-normalized word.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_japanese(&self) -> bool {
        self.japanese
    }

    /// Separator placed between words of a generated mnemonic.
    pub fn separator(&self) -> &'static str {
        if self.japanese {
            IDEOGRAPHIC_SPACE
        } else {
            " "
        }
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("first", &self.words.first())
            .field("len", &self.words.len())
            .field("japanese", &self.japanese)
            .finish()
    }
}
