//! Constraint filtering.
//!
//! A candidate is checked against a guess and its feedback in two passes. Exact
//! marks are resolved first, each consuming one occurrence of its letter from
//! the candidate. Present and Miss marks are then applied left to right against
//! what is still unconsumed, so a repeated guess letter is judged by how many
//! copies the candidate has left rather than by whether it contains the letter
//! at all.

use log::debug;

use crate::feedback::{Feedback, Mark};
use crate::word::{letter_index, Word, ALPHABET_SIZE};
use crate::{WordList, WORD_LENGTH};

/// Unconsumed letter occurrences of one candidate during a single check.
struct LetterLedger {
    remaining: [u8; ALPHABET_SIZE],
}

impl LetterLedger {
    fn new(candidate: &Word) -> Self {
        Self {
            remaining: candidate.letter_counts(),
        }
    }

    fn has(&self, letter: u8) -> bool {
        self.remaining[letter_index(letter)] > 0
    }

    /// Returns false when nothing is left to consume.
    fn consume(&mut self, letter: u8) -> bool {
        let slot = &mut self.remaining[letter_index(letter)];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

/// Whether `candidate` could be the answer given that `guess` received `feedback`.
pub fn is_consistent(guess: &Word, feedback: &Feedback, candidate: &Word) -> bool {
    let marks = feedback.marks();
    let mut ledger = LetterLedger::new(candidate);

    for i in 0..WORD_LENGTH {
        if marks[i] == Mark::Exact {
            if candidate.letter(i) != guess.letter(i) {
                return false;
            }
            ledger.consume(guess.letter(i));
        }
    }

    for i in 0..WORD_LENGTH {
        let x = guess.letter(i);
        match marks[i] {
            Mark::Exact => {}
            // A candidate with x in this slot would have earned Exact here.
            _ if candidate.letter(i) == x => return false,
            Mark::Present => {
                if !ledger.consume(x) {
                    return false;
                }
            }
            Mark::Miss => {
                if ledger.has(x) {
                    return false;
                }
            }
        }
    }

    true
}

/// Keep the candidates consistent with `guess` having received `feedback`.
///
/// Order is preserved and the input is left untouched. An empty result means no
/// word in the list agrees with the feedback.
pub fn filter_by_feedback(guess: &Word, feedback: &Feedback, candidates: &[Word]) -> WordList {
    let reduced: WordList = candidates
        .iter()
        .filter(|candidate| is_consistent(guess, feedback, candidate))
        .cloned()
        .collect();

    debug!(
        "{} {}: {} -> {} candidates",
        guess,
        feedback,
        candidates.len(),
        reduced.len()
    );
    reduced
}

/// Keep the candidates that would remain if `answer` were the hidden word.
pub fn filter_by_hypothetical_answer(guess: &Word, answer: &Word, candidates: &[Word]) -> WordList {
    let feedback = Feedback::derive(guess, answer);
    filter_by_feedback(guess, &feedback, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    #[test]
    fn ledger_consumes_one_copy_at_a_time() {
        let mut ledger = LetterLedger::new(&word("eerie"));
        assert!(ledger.consume(b'e'));
        assert!(ledger.consume(b'e'));
        assert!(ledger.has(b'e'));
        assert!(ledger.consume(b'e'));
        assert!(!ledger.has(b'e'));
        assert!(!ledger.consume(b'e'));
        assert!(!ledger.consume(b'z'));
    }

    #[test]
    fn miss_after_exact_allows_no_extra_copy() {
        // "speed" vs "abide": the second e is Exact, the first is Miss,
        // so candidates may hold exactly one e, at position 3.
        let guess = word("speed");
        let feedback = Feedback::parse("___G_").unwrap();
        assert!(is_consistent(&guess, &feedback, &word("abiex")));
        assert!(!is_consistent(&guess, &feedback, &word("eblex")));
    }

    #[test]
    fn present_rejects_the_guessed_slot() {
        let guess = word("crane");
        let feedback = Feedback::parse("Y____").unwrap();
        assert!(is_consistent(&guess, &feedback, &word("music")));
        assert!(!is_consistent(&guess, &feedback, &word("clump")));
    }
}
