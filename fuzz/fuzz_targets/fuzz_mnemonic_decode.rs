#![no_main]

use libfuzzer_sys::fuzz_target;
use mnemo_codec::{mnemonic_to_entropy, mnemonic_to_seed, nfkd_bytes, validate_mnemonic, Language};

fuzz_target!(|data: &[u8]| {
    // Decoding must never panic on malformed input, and validation must agree with it.
    let Ok(text) = nfkd_bytes(data) else {
        return;
    };

    for lang in [Language::English, Language::Japanese, Language::Spanish] {
        let list = lang.wordlist();
        let decoded = mnemonic_to_entropy(&text, list);
        assert_eq!(decoded.is_ok(), validate_mnemonic(&text, list));
    }

    // Seed derivation only checks the word count.
    if text.split(' ').count() == 12 {
        assert!(mnemonic_to_seed(&text, "").is_ok());
    }
});
