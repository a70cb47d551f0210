//! Consistency pruning shared by every solver
//!
//! A candidate survives a round only if it would have produced the observed
//! score had it been the secret.

use crate::core::{Code, Score};

/// Keep only candidates consistent with `guess` having scored `observed`
pub fn prune(candidates: &mut Vec<Code>, guess: &Code, observed: Score) {
    candidates.retain(|candidate| Score::between(guess, candidate) == observed);
}

/// Check if `candidate` explains every round in `history`
#[must_use]
pub fn is_consistent(candidate: &Code, history: &[(Code, Score)]) -> bool {
    history
        .iter()
        .all(|(guess, observed)| Score::between(guess, candidate) == *observed)
}

/// Filter codes to those consistent with the guess history
///
/// Returns candidates that would produce the observed scores for all guesses.
pub fn filter_candidates<'a>(codes: &'a [Code], history: &[(Code, Score)]) -> Vec<&'a Code> {
    codes
        .iter()
        .filter(|candidate| is_consistent(candidate, history))
        .collect()
}

/// Remove `code` from a sorted code list, if present
pub(crate) fn remove_sorted(codes: &mut Vec<Code>, code: &Code) {
    if let Ok(index) = codes.binary_search(code) {
        codes.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codespace::generate;
    use crate::core::GameSettings;

    fn setup() -> (GameSettings, Vec<Code>) {
        let settings = GameSettings::new(4, 3, 10).unwrap();
        let codes = generate(&settings);
        (settings, codes)
    }

    #[test]
    fn prune_keeps_secret() {
        let (settings, mut codes) = setup();
        let secret = Code::parse("BCA", &settings).unwrap();

        for guess in ["AAB", "CCD", "BCB"] {
            let guess = Code::parse(guess, &settings).unwrap();
            let observed = Score::between(&guess, &secret);
            prune(&mut codes, &guess, observed);
            assert!(codes.contains(&secret));
        }
    }

    #[test]
    fn prune_removes_inconsistent() {
        let (settings, mut codes) = setup();
        let guess = Code::parse("ABC", &settings).unwrap();

        prune(&mut codes, &guess, Score::new(0, 0));

        // Only codes made entirely of D survive
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[0].to_string(), "DDD");
    }

    #[test]
    fn prune_winning_score_leaves_guess() {
        let (settings, mut codes) = setup();
        let guess = Code::parse("CAD", &settings).unwrap();

        prune(&mut codes, &guess, Score::winning(3));
        assert_eq!(codes, vec![guess]);
    }

    #[test]
    fn prune_preserves_order() {
        let (settings, mut codes) = setup();
        let guess = Code::parse("AAB", &settings).unwrap();

        prune(&mut codes, &guess, Score::new(1, 0));
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn filter_candidates_matches_repeated_pruning() {
        let (settings, codes) = setup();
        let secret = Code::parse("DAB", &settings).unwrap();

        let history: Vec<(Code, Score)> = ["AAB", "BCD"]
            .iter()
            .map(|text| {
                let guess = Code::parse(text, &settings).unwrap();
                let score = Score::between(&guess, &secret);
                (guess, score)
            })
            .collect();

        let mut pruned = codes.clone();
        for (guess, score) in &history {
            prune(&mut pruned, guess, *score);
        }

        let filtered: Vec<Code> = filter_candidates(&codes, &history)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(filtered, pruned);
        assert!(filtered.contains(&secret));
    }

    #[test]
    fn empty_history_is_consistent() {
        let (settings, _) = setup();
        let code = Code::parse("ABC", &settings).unwrap();
        assert!(is_consistent(&code, &[]));
    }

    #[test]
    fn remove_sorted_removes_once() {
        let (settings, mut codes) = setup();
        let code = Code::parse("BBB", &settings).unwrap();

        remove_sorted(&mut codes, &code);
        assert_eq!(codes.len(), 63);
        assert!(!codes.contains(&code));

        remove_sorted(&mut codes, &code);
        assert_eq!(codes.len(), 63);
    }
}
