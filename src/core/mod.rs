//! Core domain types for Mastermind
//!
//! Settings, codes and peg scores. Everything here is pure and immutable.

mod code;
mod score;
mod settings;

pub use code::{Code, CodeError};
pub use score::{Score, ScoreError};
pub use settings::{GameSettings, MAX_CODE_SPACE, MAX_COLORS, SettingsError};
