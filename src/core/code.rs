//! Mastermind code representation
//!
//! A Code is a fixed-length sequence of symbol ordinals in `[0, colors)`.
//! Symbols display as letters, so ordinal 0 is `A`, 1 is `B` and so on.

use super::GameSettings;
use std::fmt;
use thiserror::Error;

/// An immutable sequence of symbols
///
/// Ordering is lexicographic over the symbol ordinals, most significant
/// position first. This is the order the code space is generated in and the
/// order solvers use to break ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    symbols: Box<[u8]>,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must be exactly {expected} symbols, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("symbol '{symbol}' at position {position} is outside an alphabet of {colors} colors")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        colors: usize,
    },
}

impl Code {
    /// Create a code from symbol ordinals, validated against the settings
    ///
    /// # Errors
    /// Returns `CodeError` if the length differs from `settings.digits()` or a
    /// symbol is not below `settings.colors()`.
    pub fn new(symbols: Vec<u8>, settings: &GameSettings) -> Result<Self, CodeError> {
        if symbols.len() != settings.digits() {
            return Err(CodeError::InvalidLength {
                expected: settings.digits(),
                actual: symbols.len(),
            });
        }

        if let Some((position, &symbol)) = symbols
            .iter()
            .enumerate()
            .find(|&(_, &s)| usize::from(s) >= settings.colors())
        {
            return Err(CodeError::InvalidSymbol {
                symbol: symbol_char(symbol),
                position,
                colors: settings.colors(),
            });
        }

        Ok(Self::from_symbols(symbols))
    }

    /// Parse a code from text
    ///
    /// Accepts letters (`A` is the first symbol, case-insensitive). When the
    /// alphabet has at most nine colors the classic numeric notation is also
    /// accepted, where `1` is the first symbol.
    ///
    /// # Errors
    /// Returns `CodeError` if the text has the wrong length or contains a
    /// character that does not name a symbol of the alphabet.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, GameSettings};
    ///
    /// let settings = GameSettings::new(6, 4, 10).unwrap();
    /// let code = Code::parse("abcd", &settings).unwrap();
    /// assert_eq!(code.to_string(), "ABCD");
    /// assert_eq!(Code::parse("1234", &settings).unwrap(), code);
    ///
    /// assert!(Code::parse("ABCG", &settings).is_err());
    /// assert!(Code::parse("ABC", &settings).is_err());
    /// ```
    pub fn parse(text: &str, settings: &GameSettings) -> Result<Self, CodeError> {
        let chars: Vec<char> = text.trim().chars().collect();

        if chars.len() != settings.digits() {
            return Err(CodeError::InvalidLength {
                expected: settings.digits(),
                actual: chars.len(),
            });
        }

        let symbols = chars
            .iter()
            .enumerate()
            .map(|(position, &ch)| {
                symbol_ordinal(ch, settings.colors())
                    .filter(|&s| usize::from(s) < settings.colors())
                    .ok_or(CodeError::InvalidSymbol {
                        symbol: ch,
                        position,
                        colors: settings.colors(),
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self::from_symbols(symbols))
    }

    /// The deterministic opening guess
    ///
    /// The first ⌈D/2⌉ positions hold the first symbol and the remaining
    /// ⌊D/2⌋ hold the second (`AABB` for four positions). A single-color
    /// alphabet only has the first symbol to offer.
    #[must_use]
    pub fn opening(settings: &GameSettings) -> Self {
        let digits = settings.digits();
        let second = u8::from(settings.colors() > 1);
        let head = digits - digits / 2;

        let symbols: Vec<u8> = (0..digits)
            .map(|i| if i < head { 0 } else { second })
            .collect();

        Self::from_symbols(symbols)
    }

    /// Build a code without validation; callers guarantee the invariants
    pub(crate) fn from_symbols(symbols: Vec<u8>) -> Self {
        Self {
            symbols: symbols.into_boxed_slice(),
        }
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Code length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &symbol in self.symbols.iter() {
            write!(f, "{}", symbol_char(symbol))?;
        }
        Ok(())
    }
}

/// Render a symbol ordinal as its letter
#[inline]
fn symbol_char(symbol: u8) -> char {
    char::from(b'A'.saturating_add(symbol))
}

fn symbol_ordinal(ch: char, colors: usize) -> Option<u8> {
    match ch {
        'A'..='Z' => Some(ch as u8 - b'A'),
        'a'..='z' => Some(ch as u8 - b'a'),
        '1'..='9' if colors <= 9 => Some(ch as u8 - b'1'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(colors: usize, digits: usize) -> GameSettings {
        GameSettings::new(colors, digits, 10).unwrap()
    }

    #[test]
    fn code_from_symbols() {
        let code = Code::new(vec![0, 1, 2, 3], &settings(6, 4)).unwrap();
        assert_eq!(code.symbols(), &[0, 1, 2, 3]);
        assert_eq!(code.len(), 4);
        assert_eq!(code.to_string(), "ABCD");
    }

    #[test]
    fn code_rejects_wrong_length() {
        assert_eq!(
            Code::new(vec![0, 1, 2], &settings(6, 4)),
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn code_rejects_symbol_outside_alphabet() {
        assert_eq!(
            Code::new(vec![0, 6, 0, 0], &settings(6, 4)),
            Err(CodeError::InvalidSymbol {
                symbol: 'G',
                position: 1,
                colors: 6
            })
        );
    }

    #[test]
    fn parse_letters_case_insensitive() {
        let s = settings(6, 4);
        assert_eq!(
            Code::parse("abcd", &s).unwrap(),
            Code::parse("ABCD", &s).unwrap()
        );
        assert_eq!(Code::parse(" FAFA ", &s).unwrap().symbols(), &[5, 0, 5, 0]);
    }

    #[test]
    fn parse_digits_for_small_alphabets() {
        let code = Code::parse("1265", &settings(6, 4)).unwrap();
        assert_eq!(code.symbols(), &[0, 1, 5, 4]);
    }

    #[test]
    fn parse_rejects_digits_for_large_alphabets() {
        assert!(matches!(
            Code::parse("1234", &settings(12, 4)),
            Err(CodeError::InvalidSymbol { symbol: '1', .. })
        ));
    }

    #[test]
    fn parse_rejects_invalid_characters() {
        let s = settings(6, 4);
        assert!(Code::parse("AB!D", &s).is_err());
        assert!(Code::parse("AB D", &s).is_err());
        assert!(Code::parse("ABC7", &s).is_err());
        assert!(Code::parse("", &s).is_err());
    }

    #[test]
    fn opening_even_length() {
        assert_eq!(Code::opening(&settings(6, 4)).to_string(), "AABB");
    }

    #[test]
    fn opening_odd_length() {
        // Ceil half of the first symbol, floor half of the second
        assert_eq!(Code::opening(&settings(6, 5)).to_string(), "AAABB");
        assert_eq!(Code::opening(&settings(6, 1)).to_string(), "A");
    }

    #[test]
    fn opening_single_color() {
        assert_eq!(Code::opening(&settings(1, 3)).to_string(), "AAA");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let s = settings(6, 3);
        let mut codes = vec![
            Code::parse("BAA", &s).unwrap(),
            Code::parse("AAB", &s).unwrap(),
            Code::parse("ABA", &s).unwrap(),
            Code::parse("AAA", &s).unwrap(),
        ];
        codes.sort();
        let texts: Vec<String> = codes.iter().map(ToString::to_string).collect();
        assert_eq!(texts, ["AAA", "AAB", "ABA", "BAA"]);
    }

    #[test]
    fn equality_is_structural() {
        let s = settings(6, 4);
        assert_eq!(
            Code::parse("ABCD", &s).unwrap(),
            Code::new(vec![0, 1, 2, 3], &s).unwrap()
        );
        assert_ne!(Code::parse("ABCD", &s).unwrap(), Code::parse("ABDC", &s).unwrap());
    }
}
