//! Code solving command
//!
//! Solves a specific secret and returns the guess sequence.

use crate::codespace::generate;
use crate::core::{Code, GameSettings, Score};
use crate::game::MastermindGame;
use crate::solver::pruning::filter_candidates;
use crate::solver::{GameResult, Solver};
use anyhow::{Context, Result};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub settings: GameSettings,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String, settings: GameSettings) -> Self {
        Self { secret, settings }
    }
}

/// Result of solving a code
pub struct SolveReport {
    pub solver: &'static str,
    pub secret: Code,
    pub result: GameResult,
    pub steps: Vec<GuessStep>,
}

/// A single guess in the solution
pub struct GuessStep {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret with the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not parse under the configured settings
/// - The solver aborts (no candidates remain or the session rejects a guess)
pub fn solve_code<S: Solver>(config: &SolveConfig, solver: &mut S) -> Result<SolveReport> {
    let secret = Code::parse(&config.secret, &config.settings)
        .with_context(|| format!("invalid secret '{}'", config.secret))?;

    let mut game = MastermindGame::new(secret.clone(), config.settings)?;
    let result = solver
        .solve(&mut game)
        .with_context(|| format!("{} solver failed on {secret}", solver.name()))?;

    // Replay the history to report how each round narrowed the field
    let all_codes = generate(&config.settings);
    let history = game.history();
    let steps = history
        .iter()
        .enumerate()
        .map(|(i, (guess, score))| GuessStep {
            guess: guess.clone(),
            score: *score,
            candidates_before: filter_candidates(&all_codes, &history[..i]).len(),
            candidates_after: filter_candidates(&all_codes, &history[..=i]).len(),
        })
        .collect();

    Ok(SolveReport {
        solver: solver.name(),
        secret,
        result,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{KnuthSolver, RandomSolver};

    fn settings(round_limit: usize) -> GameSettings {
        GameSettings::new(6, 4, round_limit).unwrap()
    }

    #[test]
    fn solve_code_succeeds() {
        let config = SolveConfig::new("BFEA".to_string(), settings(6));
        let report = solve_code(&config, &mut KnuthSolver).unwrap();

        assert!(report.result.succeeded);
        assert_eq!(report.solver, "knuth");
        assert_eq!(report.steps.len(), report.result.rounds_used);
        assert_eq!(report.steps.last().map(|s| &s.guess), Some(&report.secret));
    }

    #[test]
    fn solve_records_narrowing() {
        let config = SolveConfig::new("CDEF".to_string(), settings(6));
        let report = solve_code(&config, &mut KnuthSolver).unwrap();

        assert_eq!(report.steps[0].candidates_before, 1296);
        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        assert_eq!(report.steps.last().map(|s| s.candidates_after), Some(1));
    }

    #[test]
    fn solve_accepts_numeric_secret() {
        let config = SolveConfig::new("1234".to_string(), settings(6));
        let report = solve_code(&config, &mut KnuthSolver).unwrap();
        assert_eq!(report.secret.to_string(), "ABCD");
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let config = SolveConfig::new("ABCZ".to_string(), settings(6));
        assert!(solve_code(&config, &mut KnuthSolver).is_err());

        let config = SolveConfig::new("ABC".to_string(), settings(6));
        assert!(solve_code(&config, &mut KnuthSolver).is_err());
    }

    #[test]
    fn solve_respects_round_limit() {
        let config = SolveConfig::new("FEDC".to_string(), settings(2));
        let report = solve_code(&config, &mut RandomSolver::seeded(5)).unwrap();

        assert!(report.steps.len() <= 2);
        assert_eq!(report.solver, "random");
    }
}
