//! Fixed-length dictionary words.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::SolverError;
use crate::WORD_LENGTH;

/// Number of distinct letters a word may contain.
pub const ALPHABET_SIZE: usize = 26;

/// A dictionary word of exactly [`WORD_LENGTH`] ASCII letters.
///
/// The text is kept exactly as it appeared in the dictionary so results can be
/// shown in the dictionary's own case. Comparisons between guesses and
/// candidates always go through the lowercased `letters`.
///
/// Ordering is case-insensitive, falling back to the text to separate words
/// that differ only in case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

impl Word {
    pub fn parse(text: &str) -> Result<Self, SolverError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(SolverError::WordLength {
                word: text.to_string(),
                len,
            });
        }
        if let Some(ch) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(SolverError::WordCharacter {
                word: text.to_string(),
                ch,
            });
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte.to_ascii_lowercase();
        }

        Ok(Self {
            text: text.to_string(),
            letters,
        })
    }

    /// The word as it appeared in the dictionary.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lowercased letters used for every comparison.
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    pub fn letter(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Occurrences of each letter `a..=z`, indexed from 0.
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in &self.letters {
            counts[letter_index(letter)] += 1;
        }
        counts
    }
}

/// Index of a lowercase ASCII letter into a per-letter table.
pub(crate) fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.letters
            .cmp(&other.letters)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_dictionary_case() {
        let word: Word = "Crane".parse().unwrap();
        assert_eq!(word.as_str(), "Crane");
        assert_eq!(word.letters(), b"crane");
    }

    #[test]
    fn orders_ignoring_case() {
        let mut words: Vec<Word> = ["Vouch", "couch", "Couch", "BOUGH"]
            .iter()
            .map(|s| Word::parse(s).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
        assert_eq!(texts, ["BOUGH", "Couch", "couch", "Vouch"]);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            Word::parse("cranes"),
            Err(SolverError::WordLength {
                word: "cranes".to_string(),
                len: 6
            })
        );
        assert!(Word::parse("").is_err());
    }

    #[test]
    fn rejects_non_letters() {
        assert!(matches!(
            Word::parse("cr4ne"),
            Err(SolverError::WordCharacter { ch: '4', .. })
        ));
        assert!(Word::parse("crâne").is_err());
    }

    #[test]
    fn counts_repeated_letters() {
        let counts = Word::parse("geese").unwrap().letter_counts();
        assert_eq!(counts[letter_index(b'e')], 3);
        assert_eq!(counts[letter_index(b'g')], 1);
        assert_eq!(counts[letter_index(b's')], 1);
        assert_eq!(counts.iter().map(|&c| c as usize).sum::<usize>(), WORD_LENGTH);
    }
}
