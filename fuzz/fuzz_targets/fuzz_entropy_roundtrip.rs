#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mnemo_codec::{entropy_to_mnemonic, mnemonic_to_entropy, Language};

#[derive(Debug, Arbitrary)]
struct Input {
    language: u8,
    entropy: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let lang = Language::ALL[input.language as usize % Language::ALL.len()];
    let list = lang.wordlist();

    match entropy_to_mnemonic(&input.entropy, list) {
        Ok(mnemonic) => {
            let decoded = mnemonic_to_entropy(&mnemonic, list).expect("encoded mnemonic must decode");
            assert_eq!(decoded.as_bytes(), input.entropy.as_slice());
        }
        Err(_) => assert!(![16, 20, 24, 28, 32].contains(&input.entropy.len())),
    }
});
