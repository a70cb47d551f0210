//! Minimax guess selection
//!
//! Finds every guess that minimizes the worst-case remaining candidates.

use super::calculator::max_bucket_size;
use crate::core::Code;
use rayon::prelude::*;

/// Select the guesses with the lowest minimax number
///
/// Returns the minimal guesses in `guess_pool` order together with their
/// minimax number, or `None` if the guess pool is empty. Pools kept sorted
/// therefore yield lexicographically sorted guesses, independent of how the
/// parallel sweep is scheduled.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, GameSettings};
/// use mastermind_solver::solver::minimax::minimal_guesses;
///
/// let settings = GameSettings::new(6, 4, 10).unwrap();
/// let parse = |t: &str| Code::parse(t, &settings).unwrap();
///
/// let pool = vec![parse("AAAA"), parse("FFFF")];
/// let candidates = vec![parse("AAAA"), parse("BBBB")];
///
/// let (best, max_remaining) = minimal_guesses(&pool, &candidates).unwrap();
/// assert_eq!(best, vec![&pool[0]]);
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn minimal_guesses<'a>(
    guess_pool: &'a [Code],
    candidates: &[Code],
) -> Option<(Vec<&'a Code>, usize)> {
    let scored: Vec<(&'a Code, usize)> = guess_pool
        .par_iter()
        .map(|guess| (guess, max_bucket_size(guess, candidates)))
        .collect();

    let best = scored.iter().map(|&(_, max)| max).min()?;
    let guesses = scored
        .into_iter()
        .filter(|&(_, max)| max == best)
        .map(|(guess, _)| guess)
        .collect();

    Some((guesses, best))
}
