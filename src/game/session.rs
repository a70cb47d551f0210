//! Mastermind game session

use crate::core::{Code, GameSettings, Score};
use thiserror::Error;
use tracing::trace;

/// Errors raised while playing a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("guess has {actual} symbols but codes are {expected} long")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("guess {guess} uses a symbol outside an alphabet of {colors} colors")]
    InvalidSymbol { guess: Code, colors: usize },
    #[error("round limit of {0} already reached")]
    RoundLimitReached(usize),
}

/// The part of a game a solver interacts with
pub trait GameSession {
    /// Score `guess` against the secret and record the round
    ///
    /// # Errors
    /// Returns `GameError` if the guess does not fit the game's settings or
    /// the round limit has already been reached.
    fn play_round(&mut self, guess: &Code) -> Result<Score, GameError>;

    /// Number of rounds played so far
    fn rounds_played(&self) -> usize;

    fn round_limit(&self) -> usize;

    /// Score of the most recent round, if any
    fn last_score(&self) -> Option<Score>;

    fn settings(&self) -> &GameSettings;

    /// Check if the most recent score is the winning score
    fn is_solved(&self) -> bool {
        self.last_score()
            .is_some_and(|score| score.is_winning(self.settings().digits()))
    }
}

/// A game of Mastermind against a fixed secret
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, GameSettings, Score};
/// use mastermind_solver::game::{GameSession, MastermindGame};
///
/// let settings = GameSettings::new(6, 4, 10).unwrap();
/// let secret = Code::parse("ABCD", &settings).unwrap();
/// let mut game = MastermindGame::new(secret, settings).unwrap();
///
/// let guess = Code::parse("ABDC", &settings).unwrap();
/// assert_eq!(game.play_round(&guess).unwrap(), Score::new(2, 2));
/// assert_eq!(game.rounds_played(), 1);
/// assert!(!game.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct MastermindGame {
    secret: Code,
    settings: GameSettings,
    history: Vec<(Code, Score)>,
}

impl MastermindGame {
    /// Start a game with the given secret
    ///
    /// # Errors
    /// Returns `GameError` if the secret does not fit the settings.
    pub fn new(secret: Code, settings: GameSettings) -> Result<Self, GameError> {
        validate(&secret, &settings)?;

        Ok(Self {
            secret,
            settings,
            history: Vec::with_capacity(settings.round_limit()),
        })
    }

    /// Every guess played so far, paired with its score
    #[must_use]
    pub fn history(&self) -> &[(Code, Score)] {
        &self.history
    }

    /// Guesses played so far, oldest first
    pub fn answers(&self) -> impl Iterator<Item = &Code> {
        self.history.iter().map(|(guess, _)| guess)
    }

    /// Check if the game is over, either solved or out of rounds
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_solved() || self.history.len() >= self.settings.round_limit()
    }
}

impl GameSession for MastermindGame {
    fn play_round(&mut self, guess: &Code) -> Result<Score, GameError> {
        if self.history.len() >= self.settings.round_limit() {
            return Err(GameError::RoundLimitReached(self.settings.round_limit()));
        }
        validate(guess, &self.settings)?;

        let score = Score::between(guess, &self.secret);
        self.history.push((guess.clone(), score));

        trace!(round = self.history.len(), %guess, %score, "round played");
        Ok(score)
    }

    fn rounds_played(&self) -> usize {
        self.history.len()
    }

    fn round_limit(&self) -> usize {
        self.settings.round_limit()
    }

    fn last_score(&self) -> Option<Score> {
        self.history.last().map(|&(_, score)| score)
    }

    fn settings(&self) -> &GameSettings {
        &self.settings
    }
}

fn validate(code: &Code, settings: &GameSettings) -> Result<(), GameError> {
    if code.len() != settings.digits() {
        return Err(GameError::LengthMismatch {
            expected: settings.digits(),
            actual: code.len(),
        });
    }
    if code
        .symbols()
        .iter()
        .any(|&s| usize::from(s) >= settings.colors())
    {
        return Err(GameError::InvalidSymbol {
            guess: code.clone(),
            colors: settings.colors(),
        });
    }
    Ok(())
}
