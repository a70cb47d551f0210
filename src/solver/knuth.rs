//! Knuth's five-guess minimax solver
//!
//! Keeps two sets of codes for the whole solve:
//! - `possible_keys`: codes consistent with every score so far. The secret
//!   is always a member until it is guessed.
//! - `keys_left`: codes not yet played. Only played guesses are removed, so
//!   it stays a superset of `possible_keys`.
//!
//! Every code in `keys_left` is a potential next guess; it is rated by how
//! it would partition `possible_keys`.

use super::minimax::minimal_guesses;
use super::pruning::{prune, remove_sorted};
use super::strategy::{GameResult, Solver, SolverError};
use crate::codespace::generate;
use crate::core::{Code, GameSettings, Score};
use crate::game::GameSession;
use tracing::{debug, info};

/// Minimax solver after Knuth (1976)
///
/// Fully deterministic: a fixed secret always produces the same guesses.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, GameSettings};
/// use mastermind_solver::game::MastermindGame;
/// use mastermind_solver::solver::{KnuthSolver, Solver};
///
/// let settings = GameSettings::new(6, 4, 6).unwrap();
/// let secret = Code::parse("FEDC", &settings).unwrap();
/// let mut game = MastermindGame::new(secret.clone(), settings).unwrap();
///
/// let result = KnuthSolver.solve(&mut game).unwrap();
/// assert!(result.succeeded);
/// assert_eq!(result.final_answer, secret);
/// assert!(result.rounds_used <= 5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KnuthSolver;

impl Solver for KnuthSolver {
    fn name(&self) -> &'static str {
        "knuth"
    }

    fn solve<G: GameSession>(&mut self, game: &mut G) -> Result<GameResult, SolverError> {
        let mut state = KnuthState::new(game.settings());
        let digits = game.settings().digits();

        while !state.is_finished(digits, game.round_limit()) {
            let score = state.play(game)?;

            if !score.is_winning(digits) {
                state.select_next_guess()?;
            }
        }

        let result = GameResult {
            succeeded: game.is_solved(),
            final_answer: state.guess,
            rounds_used: game.rounds_played(),
        };
        info!(
            solver = self.name(),
            succeeded = result.succeeded,
            rounds = result.rounds_used,
            answer = %result.final_answer,
            "solve finished"
        );
        Ok(result)
    }
}

/// Mutable state of a single Knuth solve
///
/// Created per solve and dropped when it ends. Once the rounds run out
/// without a win, `guess` holds the pick the solver would have played next.
#[derive(Debug, Clone)]
struct KnuthState {
    possible_keys: Vec<Code>,
    keys_left: Vec<Code>,
    round: usize,
    last_score: Option<Score>,
    guess: Code,
}

impl KnuthState {
    /// Fresh state: both sets hold the whole code space and the next guess is
    /// the deterministic opener
    fn new(settings: &GameSettings) -> Self {
        let all_codes = generate(settings);

        Self {
            possible_keys: all_codes.clone(),
            keys_left: all_codes,
            round: 0,
            last_score: None,
            guess: Code::opening(settings),
        }
    }

    fn is_finished(&self, digits: usize, round_limit: usize) -> bool {
        self.round >= round_limit || self.last_score.is_some_and(|s| s.is_winning(digits))
    }

    /// Play the current guess and prune `possible_keys` by its score
    fn play<G: GameSession>(&mut self, game: &mut G) -> Result<Score, SolverError> {
        remove_sorted(&mut self.possible_keys, &self.guess);
        remove_sorted(&mut self.keys_left, &self.guess);

        let score = game.play_round(&self.guess)?;
        self.round += 1;
        self.last_score = Some(score);

        if !score.is_winning(self.guess.len()) {
            prune(&mut self.possible_keys, &self.guess, score);
        }

        debug!(
            round = self.round,
            guess = %self.guess,
            %score,
            possible = self.possible_keys.len(),
            left = self.keys_left.len(),
            "round scored"
        );
        Ok(score)
    }

    /// Pick the next guess by minimax over `keys_left`
    ///
    /// Among the guesses with the smallest worst case, the first that could
    /// still be the secret wins; otherwise the first unplayed one.
    fn select_next_guess(&mut self) -> Result<(), SolverError> {
        let no_candidates = SolverError::NoCandidates { round: self.round };

        if self.possible_keys.is_empty() {
            return Err(no_candidates);
        }

        if let [only] = self.possible_keys.as_slice() {
            self.guess = only.clone();
            return Ok(());
        }

        let (minimal, max_remaining) =
            minimal_guesses(&self.keys_left, &self.possible_keys).ok_or(no_candidates.clone())?;

        let next = minimal
            .iter()
            .find(|code| self.possible_keys.binary_search(code).is_ok())
            .or_else(|| minimal.first())
            .copied()
            .ok_or(no_candidates)?;

        debug!(
            round = self.round,
            next = %next,
            max_remaining,
            ties = minimal.len(),
            "next guess selected"
        );
        self.guess = next.clone();
        Ok(())
    }
}
