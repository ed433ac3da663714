//! # Wordle Reducer
//!
//! A Wordle solver built on two pure operations over a word list:
//!
//! - a constraint filter that keeps only the words consistent with a guess and
//!   its feedback (or with a guess played against a hypothetical answer), and
//! - a guess evaluator that ranks every candidate by the expected number of
//!   candidates left after playing it.
//!
//! Lower expected size is better. The guess space is the candidate set itself.

pub mod dictionary;
pub mod error;
pub mod evaluator;
pub mod feedback;
pub mod filter;
pub mod session;
pub mod word;

pub use dictionary::{load_dictionary, parse_dictionary};
pub use error::{DictionaryError, SolverError};
pub use evaluator::{rank, rank_with_progress, score_guess, ScoredGuess};
pub use feedback::{Feedback, Mark};
pub use filter::{filter_by_feedback, filter_by_hypothetical_answer};
pub use session::{Round, Session};
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// An ordered list of dictionary words. Duplicates are kept.
pub type WordList = Vec<Word>;
