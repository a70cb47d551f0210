//! Game sessions
//!
//! A session holds the secret and scores guesses against it. Solvers only see
//! the [`GameSession`] trait.

mod session;

pub use session::{GameError, GameSession, MastermindGame};
