//! BIP39 word lists.
//!
//! A [`Wordlist`] is an immutable sequence of exactly 2048 unique words with a
//! reverse index for O(1) word-to-position lookups. Built-in lists for every
//! BIP39 language are available through [`Language::wordlist`]; custom lists can
//! be loaded from the JSON array format used by wordlist files.

pub mod error;
pub mod language;
pub mod wordlist;

pub use error::WordlistError;
pub use language::Language;
pub use wordlist::{Wordlist, IDEOGRAPHIC_SPACE, JAPANESE_FIRST_WORD, WORDLIST_LEN};
