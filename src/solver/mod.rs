//! Mastermind solving algorithms
//!
//! Two solvers share the same opener and consistency pruning:
//! - [`KnuthSolver`]: minimax guess selection (five-guess algorithm)
//! - [`RandomSolver`]: random choice among consistent codes

mod knuth;
pub mod minimax;
pub mod pruning;
mod random;
mod strategy;

pub use knuth::KnuthSolver;
pub use random::RandomSolver;
pub use strategy::{GameResult, Solver, SolverError, SolverType};
