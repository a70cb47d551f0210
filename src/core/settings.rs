//! Game settings: alphabet size, code length and round limit

use thiserror::Error;

/// Largest alphabet supported; symbols render as the letters `A`..`Z`
pub const MAX_COLORS: usize = 26;

/// Largest code space the solvers will materialize (2^24 codes)
pub const MAX_CODE_SPACE: usize = 1 << 24;

/// Errors raised when constructing invalid settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("alphabet must contain at least one color")]
    NoColors,
    #[error("codes must be at least one position long")]
    NoDigits,
    #[error("round limit must be at least one")]
    NoRounds,
    #[error("alphabet of {0} colors exceeds the maximum of {max}", max = MAX_COLORS)]
    TooManyColors(usize),
    #[error(
        "{colors} colors over {digits} positions exceeds the maximum code space of {max}",
        max = MAX_CODE_SPACE
    )]
    CodeSpaceTooLarge { colors: usize, digits: usize },
}

/// Immutable configuration of a Mastermind game
///
/// - `colors`: alphabet size C, every position draws from the same alphabet
/// - `digits`: code length D
/// - `round_limit`: maximum number of guesses L
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSettings {
    colors: usize,
    digits: usize,
    round_limit: usize,
}

impl GameSettings {
    /// Create validated settings
    ///
    /// # Errors
    /// Returns `SettingsError` if any value is zero, the alphabet is larger
    /// than [`MAX_COLORS`], or C^D exceeds [`MAX_CODE_SPACE`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::GameSettings;
    ///
    /// let settings = GameSettings::new(6, 4, 10).unwrap();
    /// assert_eq!(settings.code_space_size(), 1296);
    ///
    /// assert!(GameSettings::new(0, 4, 10).is_err());
    /// ```
    pub fn new(colors: usize, digits: usize, round_limit: usize) -> Result<Self, SettingsError> {
        if colors == 0 {
            return Err(SettingsError::NoColors);
        }
        if digits == 0 {
            return Err(SettingsError::NoDigits);
        }
        if round_limit == 0 {
            return Err(SettingsError::NoRounds);
        }
        if colors > MAX_COLORS {
            return Err(SettingsError::TooManyColors(colors));
        }

        if checked_space(colors, digits).is_none_or(|size| size > MAX_CODE_SPACE) {
            return Err(SettingsError::CodeSpaceTooLarge { colors, digits });
        }

        Ok(Self {
            colors,
            digits,
            round_limit,
        })
    }

    /// Alphabet size
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> usize {
        self.colors
    }

    /// Code length
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> usize {
        self.digits
    }

    #[inline]
    #[must_use]
    pub const fn round_limit(&self) -> usize {
        self.round_limit
    }

    /// Number of distinct codes, C^D
    #[must_use]
    pub fn code_space_size(&self) -> usize {
        // Bounded by MAX_CODE_SPACE at construction
        checked_space(self.colors, self.digits).unwrap_or(MAX_CODE_SPACE)
    }
}

impl Default for GameSettings {
    /// Classic Mastermind: 6 colors, 4 positions, 10 rounds
    fn default() -> Self {
        Self {
            colors: 6,
            digits: 4,
            round_limit: 10,
        }
    }
}

fn checked_space(colors: usize, digits: usize) -> Option<usize> {
    u32::try_from(digits)
        .ok()
        .and_then(|exp| colors.checked_pow(exp))
}
