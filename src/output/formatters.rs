//! Formatting utilities for terminal output

use crate::core::Score;

/// Format a score as pegs: `●` exact, `○` misplaced, `·` empty
///
/// # Examples
/// ```
/// use mastermind_solver::core::Score;
/// use mastermind_solver::output::formatters::score_to_pegs;
///
/// assert_eq!(score_to_pegs(Score::new(2, 1), 4), "●●○·");
/// ```
#[must_use]
pub fn score_to_pegs(score: Score, digits: usize) -> String {
    let empty = digits.saturating_sub(score.white() + score.black());

    format!(
        "{}{}{}",
        "●".repeat(score.white()),
        "○".repeat(score.black()),
        "·".repeat(empty)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
