//! Guess evaluation.
//!
//! A guess is worth the expected number of candidates left after playing it,
//! with the answer drawn uniformly from the current candidates. For a fixed
//! guess, every answer that produces the same feedback pattern leaves exactly
//! the same candidates behind (the ones sharing that pattern), so the expected
//! size is `Σ count² / n` over the pattern histogram. That replaces one filter
//! pass per answer with a single pass over the candidates.

use std::cmp::Ordering;

use log::{debug, trace};
use rayon::prelude::*;

use crate::error::SolverError;
use crate::feedback::Feedback;
use crate::word::Word;

/// A candidate guess and the expected candidate count after playing it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredGuess {
    pub word: Word,
    pub score: f64,
}

impl ScoredGuess {
    /// Ascending by score, then alphabetically ignoring case.
    fn rank_order(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

fn expected_remaining(guess: &Word, candidates: &[Word]) -> f64 {
    let mut pattern_counts = [0u32; Feedback::NUM_PATTERNS];
    for answer in candidates {
        pattern_counts[Feedback::derive(guess, answer).index()] += 1;
    }

    let sum_of_squares: u64 = pattern_counts
        .iter()
        .map(|&count| count as u64 * count as u64)
        .sum();
    sum_of_squares as f64 / candidates.len() as f64
}

/// Expected number of candidates left after playing `guess`.
///
/// Equal to the mean, over every candidate taken as the answer, of
/// `filter_by_hypothetical_answer(guess, answer, candidates).len()`.
pub fn score_guess(guess: &Word, candidates: &[Word]) -> Result<f64, SolverError> {
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }
    Ok(expected_remaining(guess, candidates))
}

/// Rank every candidate as a guess and return the best `top_k`.
pub fn rank(candidates: &[Word], top_k: usize) -> Result<Vec<ScoredGuess>, SolverError> {
    rank_with_progress(candidates, top_k, || {})
}

/// Like [`rank`], calling `on_scored` once for every guess scored.
///
/// Guesses are scored in parallel, so `on_scored` runs on worker threads.
/// Results are sorted after collection and do not depend on scheduling.
pub fn rank_with_progress<F>(
    candidates: &[Word],
    top_k: usize,
    on_scored: F,
) -> Result<Vec<ScoredGuess>, SolverError>
where
    F: Fn() + Sync,
{
    if candidates.is_empty() {
        return Err(SolverError::EmptyCandidateSet);
    }
    if top_k == 0 {
        return Ok(vec![]);
    }

    // Already solved: the only candidate leaves nothing to narrow down.
    if candidates.len() == 1 {
        on_scored();
        return Ok(vec![ScoredGuess {
            word: candidates[0].clone(),
            score: 0.0,
        }]);
    }

    let mut scored: Vec<ScoredGuess> = candidates
        .par_iter()
        .map(|guess| {
            let score = expected_remaining(guess, candidates);
            trace!("{}: {:.3}", guess, score);
            on_scored();
            ScoredGuess {
                word: guess.clone(),
                score,
            }
        })
        .collect();

    scored.sort_by(ScoredGuess::rank_order);
    scored.truncate(top_k);

    if let Some(best) = scored.first() {
        debug!(
            "ranked {} guesses, best {} ({:.3})",
            candidates.len(),
            best.word,
            best.score
        );
    }
    Ok(scored)
}
