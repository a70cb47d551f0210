//! Code space enumeration
//!
//! Produces every code of a given length over a given alphabet, exactly once,
//! in lexicographic order (most significant position first).

use crate::core::{Code, GameSettings};

/// Lazy, finite iterator over the whole code space
///
/// Works like an odometer: the last position advances fastest. Restart by
/// constructing a new iterator.
///
/// # Examples
/// ```
/// use mastermind_solver::codespace::CodeSpace;
/// use mastermind_solver::core::GameSettings;
///
/// let settings = GameSettings::new(2, 2, 10).unwrap();
/// let codes: Vec<String> = CodeSpace::new(&settings).map(|c| c.to_string()).collect();
/// assert_eq!(codes, ["AA", "AB", "BA", "BB"]);
/// ```
#[derive(Debug, Clone)]
pub struct CodeSpace {
    colors: u8,
    next: Option<Vec<u8>>,
    remaining: usize,
}

impl CodeSpace {
    #[must_use]
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            // Settings cap the alphabet well below u8::MAX
            colors: settings.colors() as u8,
            next: Some(vec![0; settings.digits()]),
            remaining: settings.code_space_size(),
        }
    }

    /// Advance the odometer in place; returns false once it wraps around
    fn advance(colors: u8, symbols: &mut [u8]) -> bool {
        for symbol in symbols.iter_mut().rev() {
            *symbol += 1;
            if *symbol < colors {
                return true;
            }
            *symbol = 0;
        }
        false
    }
}

impl Iterator for CodeSpace {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        let current = self.next.take()?;

        let mut following = current.clone();
        if Self::advance(self.colors, &mut following) {
            self.next = Some(following);
        }
        self.remaining = self.remaining.saturating_sub(1);

        Some(Code::from_symbols(current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for CodeSpace {}

impl std::iter::FusedIterator for CodeSpace {}

/// Materialize the whole code space
///
/// The result is sorted, so callers may `binary_search` it.
#[must_use]
pub fn generate(settings: &GameSettings) -> Vec<Code> {
    CodeSpace::new(settings).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    fn settings(colors: usize, digits: usize) -> GameSettings {
        GameSettings::new(colors, digits, 10).unwrap()
    }

    #[test]
    fn generates_two_by_two() {
        let codes: Vec<String> = generate(&settings(2, 2))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(codes, ["AA", "AB", "BA", "BB"]);
    }

    #[test]
    fn generates_every_code_once() {
        let codes = generate(&settings(6, 4));
        assert_eq!(codes.len(), 1296);

        let unique: FxHashSet<&Code> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn order_is_lexicographic() {
        let codes = generate(&settings(3, 3));
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(codes.first().map(ToString::to_string).as_deref(), Some("AAA"));
        assert_eq!(codes.last().map(ToString::to_string).as_deref(), Some("CCC"));
    }

    #[test]
    fn single_color_has_one_code() {
        let codes = generate(&settings(1, 5));
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].to_string(), "AAAAA");
    }

    #[test]
    fn size_hint_is_exact() {
        let mut space = CodeSpace::new(&settings(3, 2));
        assert_eq!(space.len(), 9);
        space.next();
        space.next();
        assert_eq!(space.len(), 7);
        assert_eq!(space.count(), 7);
    }

    #[test]
    fn iterator_is_fused() {
        let mut space = CodeSpace::new(&settings(1, 1));
        assert!(space.next().is_some());
        assert!(space.next().is_none());
        assert!(space.next().is_none());
    }

    #[test]
    fn restartable_and_deterministic() {
        let s = settings(4, 3);
        let first: Vec<Code> = CodeSpace::new(&s).collect();
        let second: Vec<Code> = CodeSpace::new(&s).collect();
        assert_eq!(first, second);
    }
}
