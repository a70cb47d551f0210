//! Minimax number calculation
//!
//! Given a guess and a set of candidate secrets, computes the worst-case
//! number of candidates that could remain after playing it.

use crate::core::{Code, Score};
use rustc_hash::FxHashMap;

/// Calculate the minimax number of a guess
///
/// For each score the guess could receive, count how many candidates would
/// produce it, and return the largest count.
///
/// # Examples
/// ```
/// use mastermind_solver::codespace::generate;
/// use mastermind_solver::core::{Code, GameSettings};
/// use mastermind_solver::solver::minimax::max_bucket_size;
///
/// let settings = GameSettings::new(6, 4, 10).unwrap();
/// let codes = generate(&settings);
///
/// // Knuth's opener leaves at most 256 candidates
/// let opener = Code::opening(&settings);
/// assert_eq!(max_bucket_size(&opener, &codes), 256);
/// ```
#[must_use]
pub fn max_bucket_size(guess: &Code, candidates: &[Code]) -> usize {
    group_by_score(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Count candidates per score they would give `guess`
fn group_by_score(guess: &Code, candidates: &[Code]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let score = Score::between(guess, candidate);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}
