//! Guess analysis command
//!
//! Scores a guess against a secret and rates it as an opening move.

use crate::codespace::generate;
use crate::core::{Code, GameSettings, Score};
use crate::solver::minimax::max_bucket_size;
use anyhow::{Context, Result};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub secret: Code,
    pub score: Score,
    pub solved: bool,
    /// Worst-case candidates left if the guess opens the game
    pub minimax_number: usize,
    pub code_space: usize,
}

/// Analyze `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code does not parse under `settings`.
pub fn analyze_guess(guess: &str, secret: &str, settings: &GameSettings) -> Result<AnalysisResult> {
    let guess =
        Code::parse(guess, settings).with_context(|| format!("invalid guess '{guess}'"))?;
    let secret =
        Code::parse(secret, settings).with_context(|| format!("invalid secret '{secret}'"))?;

    let score = Score::calculate(&guess, &secret)?;
    let all_codes = generate(settings);

    Ok(AnalysisResult {
        minimax_number: max_bucket_size(&guess, &all_codes),
        code_space: all_codes.len(),
        solved: score.is_winning(settings.digits()),
        guess,
        secret,
        score,
    })
}
