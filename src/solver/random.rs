//! Randomized baseline solver
//!
//! Opens like the Knuth solver and prunes the same way, but picks a uniformly
//! random consistent code instead of running minimax.

use super::pruning::{prune, remove_sorted};
use super::strategy::{GameResult, Solver, SolverError};
use crate::codespace::generate;
use crate::core::Code;
use crate::game::GameSession;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Solver that guesses a random consistent code each round
///
/// The source of randomness is injected, so tests can use a seeded
/// generator.
#[derive(Debug, Clone)]
pub struct RandomSolver<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSolver<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSolver<StdRng> {
    /// Reproducible solver seeded with `seed`
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Solver seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Solver for RandomSolver<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn solve<G: GameSession>(&mut self, game: &mut G) -> Result<GameResult, SolverError> {
        let settings = *game.settings();
        let mut candidates = generate(&settings);
        let mut guess = Code::opening(&settings);
        let mut round = 0;

        while round < game.round_limit() {
            let score = game.play_round(&guess)?;
            round += 1;

            if score.is_winning(settings.digits()) {
                break;
            }

            remove_sorted(&mut candidates, &guess);
            prune(&mut candidates, &guess, score);
            debug!(round, %guess, %score, remaining = candidates.len(), "round scored");

            if round >= game.round_limit() {
                break;
            }

            guess = candidates
                .choose(&mut self.rng)
                .cloned()
                .ok_or(SolverError::NoCandidates { round })?;
        }

        let result = GameResult {
            succeeded: game.is_solved(),
            final_answer: guess,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSettings, Score};
    use crate::game::{GameError, MastermindGame};
    use rand::RngCore;

    /// Always yields zero, so every choice picks the first candidate
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    fn game(secret: &str, round_limit: usize) -> MastermindGame {
        let settings = GameSettings::new(6, 4, round_limit).unwrap();
        let secret = Code::parse(secret, &settings).unwrap();
        MastermindGame::new(secret, settings).unwrap()
    }

    #[test]
    fn opens_with_aabb() {
        let mut game = game("FEDC", 10);
        RandomSolver::seeded(1).solve(&mut game).unwrap();
        assert_eq!(game.history()[0].0.to_string(), "AABB");
    }

    #[test]
    fn solves_with_generous_limit() {
        for seed in 0..10 {
            let mut game = game("CFAE", 20);
            let result = RandomSolver::seeded(seed).solve(&mut game).unwrap();

            assert!(result.succeeded, "seed {seed}");
            assert_eq!(result.final_answer.to_string(), "CFAE");
        }
    }

    #[test]
    fn same_seed_same_guesses() {
        let mut first = game("BDFA", 20);
        let mut second = game("BDFA", 20);
        RandomSolver::seeded(42).solve(&mut first).unwrap();
        RandomSolver::seeded(42).solve(&mut second).unwrap();

        assert_eq!(first.history(), second.history());
    }

    #[test]
    fn every_guess_is_consistent_with_earlier_scores() {
        let mut game = game("EEAB", 20);
        RandomSolver::seeded(3).solve(&mut game).unwrap();

        let history = game.history();
        for (i, (guess, _)) in history.iter().enumerate() {
            assert!(crate::solver::pruning::is_consistent(guess, &history[..i]));
        }
    }

    #[test]
    fn round_limit_exhausted() {
        let mut game = game("FEDC", 1);
        let result = RandomSolver::seeded(0).solve(&mut game).unwrap();

        assert!(!result.succeeded);
        assert_eq!(result.rounds_used, 1);
    }

    #[test]
    fn deterministic_source_picks_first_candidate() {
        let mut game = game("FEDC", 20);
        let mut solver = RandomSolver::new(ZeroRng);
        let result = solver.solve(&mut game).unwrap();

        assert!(result.succeeded);
        let history = game.history();
        assert_eq!(history[0].1, Score::new(0, 0));
        // Lowest consistent code after AABB scores 0/0
        assert_eq!(history[1].0.to_string(), "CCCC");
    }

    #[test]
    fn game_errors_propagate() {
        let mut game = game("FEDC", 10);
        // Exhaust the game before the solver starts
        let filler = Code::parse("AAAA", game.settings()).unwrap();
        for _ in 0..10 {
            game.play_round(&filler).unwrap();
        }

        let result = RandomSolver::seeded(0).solve(&mut game);
        assert_eq!(
            result,
            Err(SolverError::Game(GameError::RoundLimitReached(10)))
        );
    }
}
