use std::io::Write;

use mnemo_wordlist::{Language, Wordlist, WordlistError};

fn write_json(words: &[String]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(words).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn load_custom_wordlist_from_file() {
    let words: Vec<String> = (0..2048).map(|i| format!("custom{i}")).collect();
    let file = write_json(&words);

    let list = Wordlist::from_json_file(file.path()).unwrap();
    assert_eq!(list.word(0), Some("custom0"));
    assert_eq!(list.index_of("custom2047"), Some(2047));
    assert!(!list.is_japanese());
}

#[test]
fn builtin_list_survives_json_roundtrip() {
    let english = Language::English.wordlist();
    let file = write_json(english.words());

    let loaded = Wordlist::from_json_file(file.path()).unwrap();
    assert_eq!(loaded.words(), english.words());
}

#[test]
fn japanese_json_list_keeps_separator() {
    let japanese = Language::Japanese.wordlist();
    let file = write_json(japanese.words());

    let loaded = Wordlist::from_json_file(file.path()).unwrap();
    assert!(loaded.is_japanese());
    assert_eq!(loaded.separator(), "\u{3000}");
}

#[test]
fn missing_file_is_io_error() {
    let result = Wordlist::from_json_file("/nonexistent/wordlist.json");
    assert!(matches!(result, Err(WordlistError::Io(_))));
}
