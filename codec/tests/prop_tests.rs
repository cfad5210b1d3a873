use proptest::prelude::*;

use mnemo_codec::bits::{bits_to_bytes, bits_to_indices, bytes_to_bits, index_to_bits};
use mnemo_codec::{
    entropy_to_mnemonic, mnemonic_to_entropy, validate_mnemonic, Language, MnemonicError,
};

fn entropy_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

fn language_strategy() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Decoding an encoded mnemonic returns the original entropy, in every language.
    #[test]
    fn entropy_roundtrip(entropy in entropy_strategy(), lang in language_strategy()) {
        let list = lang.wordlist();
        let mnemonic = entropy_to_mnemonic(&entropy, list).unwrap();
        let decoded = mnemonic_to_entropy(&mnemonic, list).unwrap();
        prop_assert_eq!(decoded.as_bytes(), entropy.as_slice());
    }

    /// Encoding is a pure function of its inputs.
    #[test]
    fn encoding_is_deterministic(entropy in entropy_strategy()) {
        let list = Language::English.wordlist();
        prop_assert_eq!(
            entropy_to_mnemonic(&entropy, list).unwrap(),
            entropy_to_mnemonic(&entropy, list).unwrap()
        );
    }

    /// Word count follows entropy length: (ENT + ENT/32) / 11.
    #[test]
    fn word_count_follows_entropy(entropy in entropy_strategy()) {
        let mnemonic = entropy_to_mnemonic(&entropy, Language::English.wordlist()).unwrap();
        let expected = (entropy.len() * 8 + entropy.len() / 4) / 11;
        prop_assert_eq!(mnemonic.split(' ').count(), expected);
    }

    /// Flipping any checksum bit of the last word makes decoding fail with a checksum error.
    #[test]
    fn checksum_bit_flip_detected(entropy in entropy_strategy(), bit in 0usize..8) {
        let list = Language::English.wordlist();
        let mnemonic = entropy_to_mnemonic(&entropy, list).unwrap();
        let mut words: Vec<&str> = mnemonic.split(' ').collect();

        let checksum_len = entropy.len() / 4;
        let flip = bit % checksum_len;
        let last = list.index_of(words[words.len() - 1]).unwrap();
        let tampered = list.word(last ^ (1 << flip)).unwrap();
        let n = words.len();
        words[n - 1] = tampered;

        let result = mnemonic_to_entropy(&words.join(" "), list);
        prop_assert_eq!(result.unwrap_err(), MnemonicError::InvalidChecksum);
    }

    /// validate_mnemonic agrees with mnemonic_to_entropy on arbitrary word sequences.
    #[test]
    fn validate_matches_decode(
        indices in prop::collection::vec(0u16..2048, 11..=25),
    ) {
        let list = Language::English.wordlist();
        let text = indices
            .iter()
            .map(|&i| list.word(i).unwrap())
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(
            validate_mnemonic(&text, list),
            mnemonic_to_entropy(&text, list).is_ok()
        );
    }

    /// Arbitrary text never panics the decoder.
    #[test]
    fn arbitrary_text_never_panics(text in "\\PC{0,200}") {
        let _ = validate_mnemonic(&text, Language::English.wordlist());
    }

    /// Byte and index bit renderings invert each other.
    #[test]
    fn bit_codec_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..64), index in 0u16..2048) {
        prop_assert_eq!(bits_to_bytes(&bytes_to_bits(&bytes)), bytes);
        prop_assert_eq!(bits_to_indices(&index_to_bits(index)), vec![index]);
    }
}
