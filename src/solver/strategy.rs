//! Solver capability and runtime selection
//!
//! Defines the Solver trait, the result it produces and the enum wrapper used
//! to pick a solver by name.

use super::{KnuthSolver, RandomSolver};
use crate::core::Code;
use crate::game::{GameError, GameSession};
use rand::rngs::StdRng;
use thiserror::Error;

/// Outcome of a solve attempt
///
/// Running out of rounds is a normal outcome with `succeeded == false`, not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub succeeded: bool,
    /// The winning code, or the solver's best answer if the game was not
    /// solved
    pub final_answer: Code,
    pub rounds_used: usize,
}

/// Errors that abort a solve
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// No code is consistent with the scores received; the session scored
    /// inconsistently or pruning is broken
    #[error("no candidate codes remain after round {round}")]
    NoCandidates { round: usize },
    #[error("game session rejected a guess: {0}")]
    Game(#[from] GameError),
    #[error("unknown solver '{0}' (expected knuth or random)")]
    UnknownSolver(String),
}

/// A strategy that plays a game session until it is solved or out of rounds
pub trait Solver {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Play `game` to completion
    ///
    /// # Errors
    /// Returns `SolverError` if the session rejects a guess or no candidate
    /// codes remain while the game is unsolved.
    fn solve<G: GameSession>(&mut self, game: &mut G) -> Result<GameResult, SolverError>;
}

/// Enum wrapper for all solver types
///
/// Allows runtime selection of a solver while keeping static dispatch.
pub enum SolverType {
    /// Knuth's minimax five-guess algorithm (default)
    Knuth(KnuthSolver),
    /// Random choice among consistent codes
    Random(RandomSolver<StdRng>),
}

impl Solver for SolverType {
    fn name(&self) -> &'static str {
        match self {
            Self::Knuth(s) => s.name(),
            Self::Random(s) => s.name(),
        }
    }

    fn solve<G: GameSession>(&mut self, game: &mut G) -> Result<GameResult, SolverError> {
        match self {
            Self::Knuth(s) => s.solve(game),
            Self::Random(s) => s.solve(game),
        }
    }
}

impl SolverType {
    /// Create a solver from its name
    ///
    /// Supported names: "knuth", "minimax", "random". The random solver is
    /// seeded with `seed` when given, otherwise from the operating system.
    ///
    /// # Errors
    /// Returns `SolverError::UnknownSolver` for any other name.
    pub fn from_name(name: &str, seed: Option<u64>) -> Result<Self, SolverError> {
        match name.to_ascii_lowercase().as_str() {
            "knuth" | "minimax" => Ok(Self::Knuth(KnuthSolver)),
            "random" => Ok(Self::Random(
                seed.map_or_else(RandomSolver::from_os_rng, RandomSolver::seeded),
            )),
            _ => Err(SolverError::UnknownSolver(name.to_string())),
        }
    }
}
