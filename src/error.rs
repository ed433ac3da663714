//! Error types for the solver core and dictionary loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::WORD_LENGTH;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("word {word:?} has {len} letters, expected {}", WORD_LENGTH)]
    WordLength { word: String, len: usize },
    #[error("word {word:?} contains {ch:?}, only ASCII letters are allowed")]
    WordCharacter { word: String, ch: char },
    #[error("feedback {feedback:?} has {len} symbols, expected {}", WORD_LENGTH)]
    FeedbackLength { feedback: String, len: usize },
    #[error("feedback {feedback:?} contains {symbol:?}, expected one of '_', 'G', 'Y'")]
    FeedbackSymbol { feedback: String, symbol: char },
    #[error("no candidate words remain")]
    EmptyCandidateSet,
}

impl SolverError {
    /// True for the malformed guess/feedback family of errors.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, SolverError::EmptyCandidateSet)
    }
}

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("could not read dictionary {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read dictionary")]
    Read(#[from] std::io::Error),
    #[error("dictionary contains no {}-letter words", WORD_LENGTH)]
    Empty,
}
