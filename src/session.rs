//! A solving session: the candidate list carried from one round to the next.

use log::info;

use crate::error::SolverError;
use crate::evaluator::{rank, ScoredGuess};
use crate::feedback::Feedback;
use crate::filter::filter_by_feedback;
use crate::word::Word;
use crate::WordList;

/// One guess played and what it left behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub guess: Word,
    pub feedback: Feedback,
    pub remaining: usize,
}

#[derive(Debug, Clone)]
pub struct Session {
    all_words: WordList,
    candidates: WordList,
    history: Vec<Round>,
}

impl Session {
    pub fn new(words: WordList) -> Self {
        Self {
            candidates: words.clone(),
            all_words: words,
            history: Vec::new(),
        }
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn all_words(&self) -> &[Word] {
        &self.all_words
    }

    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Exactly one candidate is left.
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// No word in the dictionary agrees with the feedback so far.
    pub fn is_contradiction(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Narrow the candidates by a guess and its feedback. Returns how many remain.
    pub fn apply(&mut self, guess: Word, feedback: Feedback) -> usize {
        self.candidates = filter_by_feedback(&guess, &feedback, &self.candidates);
        let remaining = self.candidates.len();
        self.history.push(Round {
            guess,
            feedback,
            remaining,
        });
        remaining
    }

    /// Parse raw user input and apply it. Nothing changes if either part is invalid.
    pub fn apply_str(&mut self, guess: &str, feedback: &str) -> Result<usize, SolverError> {
        let guess = Word::parse(guess)?;
        let feedback = Feedback::parse(feedback)?;
        Ok(self.apply(guess, feedback))
    }

    pub fn suggest(&self, top_k: usize) -> Result<Vec<ScoredGuess>, SolverError> {
        rank(&self.candidates, top_k)
    }

    pub fn reset(&mut self) {
        self.candidates = self.all_words.clone();
        self.history.clear();
    }

    /// Play against a known answer, always taking the best-ranked guess.
    ///
    /// Stops on an all-Exact feedback or after `max_turns` guesses. Fails if the
    /// candidates run out, which happens when `answer` is not in the dictionary.
    /// On failure the candidates and history are left as they were before the call.
    pub fn play(&mut self, answer: &Word, max_turns: usize) -> Result<Vec<Round>, SolverError> {
        let start = self.history.len();
        let saved = self.candidates.clone();

        match self.play_rounds(answer, max_turns) {
            Ok(()) => Ok(self.history[start..].to_vec()),
            Err(err) => {
                self.candidates = saved;
                self.history.truncate(start);
                Err(err)
            }
        }
    }

    fn play_rounds(&mut self, answer: &Word, max_turns: usize) -> Result<(), SolverError> {
        for _ in 0..max_turns {
            let best = self
                .suggest(1)?
                .into_iter()
                .next()
                .ok_or(SolverError::EmptyCandidateSet)?;

            let feedback = Feedback::derive(&best.word, answer);
            info!("played {} -> {}", best.word, feedback);
            self.apply(best.word, feedback);

            if feedback.is_win() {
                break;
            }
        }
        Ok(())
    }
}
