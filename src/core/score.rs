//! Peg scoring for Mastermind guesses
//!
//! A score counts white pegs (right symbol, right position) and black pegs
//! (right symbol, wrong position). Repeated symbols are matched at most once
//! per occurrence on each side.

use super::Code;
use super::settings::MAX_COLORS;
use std::fmt;
use thiserror::Error;

/// Error raised when scoring codes of different lengths
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("guess has {guess} symbols but the secret has {secret}")]
    LengthMismatch { guess: usize, secret: usize },
}

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    white: usize,
    black: usize,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(white: usize, black: usize) -> Self {
        Self { white, black }
    }

    /// The all-white score for codes of `length` symbols
    #[inline]
    #[must_use]
    pub const fn winning(length: usize) -> Self {
        Self::new(length, 0)
    }

    /// Exact position matches
    #[inline]
    #[must_use]
    pub const fn white(self) -> usize {
        self.white
    }

    /// Symbol matches in the wrong position
    #[inline]
    #[must_use]
    pub const fn black(self) -> usize {
        self.black
    }

    /// Check if this score solves a code of `length` symbols
    #[inline]
    #[must_use]
    pub const fn is_winning(self, length: usize) -> bool {
        self.white == length && self.black == 0
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Count positions where the symbols agree (white pegs)
    /// 2. Tally the remaining guess symbols and secret symbols per value
    /// 3. Black pegs are the sum over symbols of the smaller tally
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the codes differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameSettings, Score};
    ///
    /// let settings = GameSettings::new(2, 3, 10).unwrap();
    /// let guess = Code::parse("AAB", &settings).unwrap();
    /// let secret = Code::parse("ABA", &settings).unwrap();
    ///
    /// let score = Score::calculate(&guess, &secret).unwrap();
    /// assert_eq!(score, Score::new(1, 2));
    /// ```
    pub fn calculate(guess: &Code, secret: &Code) -> Result<Self, ScoreError> {
        if guess.len() != secret.len() {
            return Err(ScoreError::LengthMismatch {
                guess: guess.len(),
                secret: secret.len(),
            });
        }
        Ok(Self::between(guess, secret))
    }

    /// Score two codes already known to share a length
    ///
    /// The solvers call this in their inner loops, where every code comes
    /// from the same code space.
    #[must_use]
    pub(crate) fn between(guess: &Code, secret: &Code) -> Self {
        debug_assert_eq!(guess.len(), secret.len());

        let mut white = 0;
        let mut guess_unmatched = [0usize; MAX_COLORS];
        let mut secret_unmatched = [0usize; MAX_COLORS];

        for (&g, &s) in guess.symbols().iter().zip(secret.symbols()) {
            if g == s {
                white += 1;
            } else {
                guess_unmatched[usize::from(g)] += 1;
                secret_unmatched[usize::from(s)] += 1;
            }
        }

        let black = guess_unmatched
            .iter()
            .zip(&secret_unmatched)
            .map(|(&g, &s)| g.min(s))
            .sum();

        Self { white, black }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.white, self.black)
    }
}
