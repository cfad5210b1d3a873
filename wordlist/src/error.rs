use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("word list must contain exactly 2048 words, got {0}")]
    WrongLength(usize),

    #[error("duplicate word {word:?} at index {index}")]
    DuplicateWord { word: String, index: usize },

    #[error("invalid word {word:?} at index {index}: words must be non-empty and contain no spaces")]
    InvalidWord { word: String, index: usize },

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("failed to read word list: {0}")]
    Io(String),

    #[error("failed to parse word list JSON: {0}")]
    Json(String),
}
