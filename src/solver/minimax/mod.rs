//! Minimax worst-case analysis
//!
//! Scores guesses by the size of the largest group of candidates that would
//! share a score, and picks the guesses that minimize it.

mod calculator;
mod selector;

pub use calculator::max_bucket_size;
pub use selector::minimal_guesses;
