//! Feedback for a guess.
//!
//! This module handles parsing the `_`/`G`/`Y` feedback alphabet, deriving the
//! feedback a guess would receive against a known answer, and packing feedback
//! into a compact pattern index.

use std::fmt;
use std::str::FromStr;

use crate::error::SolverError;
use crate::word::{letter_index, Word, ALPHABET_SIZE};
use crate::WORD_LENGTH;

/// The verdict for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter not in the answer beyond what other marks already account for (gray)
    Miss,
    /// Letter in the answer, but not at this position (yellow)
    Present,
    /// Correct letter in correct position (green)
    Exact,
}

impl Mark {
    /// Symbol in the feedback alphabet
    pub fn to_char(self) -> char {
        match self {
            Mark::Miss => '_',
            Mark::Present => 'Y',
            Mark::Exact => 'G',
        }
    }

    /// Parse an uppercase feedback symbol
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '_' => Some(Mark::Miss),
            'Y' => Some(Mark::Present),
            'G' => Some(Mark::Exact),
            _ => None,
        }
    }

    pub fn to_emoji(self) -> char {
        match self {
            Mark::Miss => '⬛',
            Mark::Present => '🟨',
            Mark::Exact => '🟩',
        }
    }

    fn digit(self) -> usize {
        match self {
            Mark::Miss => 0,
            Mark::Present => 1,
            Mark::Exact => 2,
        }
    }
}

/// The marks for a whole guess, aligned by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// Feedback for a solved puzzle
    pub const ALL_EXACT: Self = Self([Mark::Exact; WORD_LENGTH]);

    /// Number of distinct feedback patterns (3^WORD_LENGTH)
    pub const NUM_PATTERNS: usize = 3usize.pow(WORD_LENGTH as u32);

    pub fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Parse user feedback such as `"_G_G_"`.
    ///
    /// Input is uppercased first, so `"_g_y_"` is accepted too.
    pub fn parse(s: &str) -> Result<Self, SolverError> {
        let normalized: String = s.chars().map(|c| c.to_ascii_uppercase()).collect();
        let len = normalized.chars().count();
        if len != WORD_LENGTH {
            return Err(SolverError::FeedbackLength {
                feedback: s.to_string(),
                len,
            });
        }

        let mut marks = [Mark::Miss; WORD_LENGTH];
        for (slot, symbol) in marks.iter_mut().zip(normalized.chars()) {
            *slot = Mark::from_char(symbol).ok_or_else(|| SolverError::FeedbackSymbol {
                feedback: s.to_string(),
                symbol,
            })?;
        }
        Ok(Self(marks))
    }

    /// Derive the feedback `guess` receives when the answer is `answer`.
    ///
    /// Exact matches are resolved first. The remaining guess letters are then
    /// marked Present left to right for as long as unmatched copies of the
    /// letter remain in the answer, and Miss after that.
    pub fn derive(guess: &Word, answer: &Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();

        let mut marks = [Mark::Miss; WORD_LENGTH];
        let mut answer_remaining = [0u8; ALPHABET_SIZE];

        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                marks[i] = Mark::Exact;
            } else {
                answer_remaining[letter_index(answer[i])] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if marks[i] != Mark::Exact {
                let idx = letter_index(guess[i]);
                if answer_remaining[idx] > 0 {
                    marks[i] = Mark::Present;
                    answer_remaining[idx] -= 1;
                }
            }
        }

        Self(marks)
    }

    pub fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Pack into a single number in `0..NUM_PATTERNS`.
    /// Position 0 is the least significant base-3 digit.
    pub fn index(&self) -> usize {
        let mut pattern = 0;
        let mut multiplier = 1;
        for mark in self.0 {
            pattern += mark.digit() * multiplier;
            multiplier *= 3;
        }
        pattern
    }

    /// Inverse of [`Feedback::index`]. Returns `None` when out of range.
    pub fn from_index(mut pattern: usize) -> Option<Self> {
        if pattern >= Self::NUM_PATTERNS {
            return None;
        }
        let mut marks = [Mark::Miss; WORD_LENGTH];
        for mark in marks.iter_mut() {
            *mark = match pattern % 3 {
                0 => Mark::Miss,
                1 => Mark::Present,
                _ => Mark::Exact,
            };
            pattern /= 3;
        }
        Some(Self(marks))
    }

    pub fn is_win(&self) -> bool {
        *self == Self::ALL_EXACT
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}
