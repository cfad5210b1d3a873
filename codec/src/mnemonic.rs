//! Conversion between entropy and mnemonic phrases.
//!
//! Encoding: ENT entropy bits followed by CS = ENT / 32 checksum bits, split
//! into 11-bit groups, each group an index into the word list. Decoding runs
//! the same steps backwards and rejects the phrase unless the recomputed
//! checksum matches.

use mnemo_crypto::{random_bytes, EntropySource, OsEntropy};
use mnemo_types::{Entropy, MnemonicError, Strength};
use mnemo_wordlist::{Language, Wordlist};
use zeroize::Zeroizing;

use crate::bits::{bits_to_bytes, bits_to_indices, bytes_to_bits, index_to_bits, BITS_PER_WORD};
use crate::checksum::derive_checksum_bits;
use crate::normalize::normalize;

/// Encode `entropy` as a mnemonic using `wordlist`.
///
/// Words are joined with the list's separator: U+3000 for the Japanese list,
/// ASCII space otherwise.
pub fn entropy_to_mnemonic(entropy: &[u8], wordlist: &Wordlist) -> Result<String, MnemonicError> {
    let entropy = Entropy::from_slice(entropy)?;

    let mut bits = Zeroizing::new(bytes_to_bits(entropy.as_bytes()));
    bits.push_str(&derive_checksum_bits(entropy.as_bytes()));

    let words = bits_to_indices(&bits)
        .into_iter()
        .map(|index| wordlist.word(index))
        .collect::<Option<Vec<&str>>>()
        .ok_or_else(|| MnemonicError::InvalidMnemonic("word index out of range".into()))?;

    tracing::trace!(
        entropy_len = entropy.len(),
        words = %entropy.word_count(),
        "encoded mnemonic"
    );
    Ok(words.join(wordlist.separator()))
}

/// Decode a mnemonic back into its entropy, verifying word count and checksum.
pub fn mnemonic_to_entropy(mnemonic: &str, wordlist: &Wordlist) -> Result<Entropy, MnemonicError> {
    let normalized = normalize(mnemonic)?;
    let word_count = normalized.word_count();
    let words = normalized.words();
    if words.len() % 3 != 0 {
        return Err(MnemonicError::InvalidMnemonic(format!(
            "word count {} is not a multiple of 3",
            words.len()
        )));
    }

    let mut bits = Zeroizing::new(String::with_capacity(words.len() * BITS_PER_WORD));
    for (position, word) in words.iter().enumerate() {
        let index = wordlist
            .index_of(word)
            .ok_or(MnemonicError::UnknownWord { position })?;
        bits.push_str(&index_to_bits(index));
    }

    // ENT = 32 * (bits / 33); the remaining bits are the checksum.
    let divider = word_count.entropy_len() * 8;
    let (entropy_bits, checksum_bits) = bits.split_at(divider);

    let entropy = Entropy::new(bits_to_bytes(entropy_bits))?;
    if derive_checksum_bits(entropy.as_bytes()) != checksum_bits {
        tracing::debug!(words = %word_count, "mnemonic checksum mismatch");
        return Err(MnemonicError::InvalidChecksum);
    }

    Ok(entropy)
}

/// `true` iff [`mnemonic_to_entropy`] would succeed. Never fails.
pub fn validate_mnemonic(mnemonic: &str, wordlist: &Wordlist) -> bool {
    match mnemonic_to_entropy(mnemonic, wordlist) {
        Ok(_) => true,
        Err(e) => {
            tracing::trace!(error = %e, "mnemonic rejected");
            false
        }
    }
}

/// Generate a mnemonic from `strength_bits` of OS randomness.
pub fn generate_mnemonic(wordlist: &Wordlist, strength_bits: u32) -> Result<String, MnemonicError> {
    generate_mnemonic_with(&mut OsEntropy, wordlist, strength_bits)
}

/// Generate a mnemonic drawing randomness from `source`.
///
/// `strength_bits` must be a positive multiple of 32 no larger than 256.
/// Strengths below 128 pass that check but yield entropy shorter than 16
/// bytes, which encoding rejects with [`MnemonicError::InvalidEntropy`].
pub fn generate_mnemonic_with<S: EntropySource + ?Sized>(
    source: &mut S,
    wordlist: &Wordlist,
    strength_bits: u32,
) -> Result<String, MnemonicError> {
    let strength = Strength::new(strength_bits)?;
    let entropy = random_bytes(source, strength.byte_len())?;
    tracing::debug!(strength = %strength, source = source.name(), "generating mnemonic");
    entropy_to_mnemonic(&entropy, wordlist)
}

/// [`entropy_to_mnemonic`] with a built-in word list.
pub fn entropy_to_mnemonic_in(entropy: &[u8], language: Language) -> Result<String, MnemonicError> {
    entropy_to_mnemonic(entropy, language.wordlist())
}

/// [`mnemonic_to_entropy`] with a built-in word list.
pub fn mnemonic_to_entropy_in(mnemonic: &str, language: Language) -> Result<Entropy, MnemonicError> {
    mnemonic_to_entropy(mnemonic, language.wordlist())
}

/// [`validate_mnemonic`] with a built-in word list.
pub fn validate_mnemonic_in(mnemonic: &str, language: Language) -> bool {
    validate_mnemonic(mnemonic, language.wordlist())
}

/// [`generate_mnemonic`] with a built-in word list.
pub fn generate_mnemonic_in(language: Language, strength_bits: u32) -> Result<String, MnemonicError> {
    generate_mnemonic(language.wordlist(), strength_bits)
}
