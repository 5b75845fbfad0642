//! Candidate filtering against the constraint state

use super::constraint::{ConstraintState, LetterStatus};
use crate::core::Word;
use rayon::prelude::*;

/// Whether `word` is consistent with everything in `state`
///
/// A word survives iff it matches every fixed template slot, contains no
/// known-absent letter, and contains every known-present letter away from
/// that letter's excluded positions.
#[must_use]
pub fn matches(word: &Word, state: &ConstraintState) -> bool {
    if !state.template().matches(word) {
        return false;
    }

    state
        .constrained_letters()
        .into_iter()
        .all(|(letter, status)| match status {
            LetterStatus::Unconstrained => true,
            LetterStatus::KnownAbsent => !word.has_letter(letter),
            LetterStatus::KnownPresent(excluded) => {
                word.has_letter(letter) && !excluded.iter().any(|i| word.char_at(i) == letter)
            }
        })
}

/// Keep the candidates consistent with `state`, preserving order
///
/// # Examples
/// ```
/// use wordle_autosolver::core::{Feedback, Word};
/// use wordle_autosolver::solver::{ConstraintState, filter};
///
/// let words: Vec<Word> = ["duvet", "dwelt", "adieu"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let guess = Word::new("adieu").unwrap();
/// let mut state = ConstraintState::new();
/// state.update(&guess, &Feedback::calculate(&guess, &Word::new("duvet").unwrap()));
///
/// let remaining = filter(&words, &state);
/// assert_eq!(remaining, vec![Word::new("duvet").unwrap()]);
/// ```
#[must_use]
pub fn filter(candidates: &[Word], state: &ConstraintState) -> Vec<Word> {
    if state.is_blank() {
        return candidates.to_vec();
    }

    candidates
        .par_iter()
        .filter(|word| matches(word, state))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn observe(state: &ConstraintState, guess: &str, target: &str) -> ConstraintState {
        let guess = word(guess);
        state.updated(&guess, &Feedback::calculate(&guess, &word(target)))
    }

    fn dictionary() -> Vec<Word> {
        words(&[
            "duvet", "dwelt", "debut", "adieu", "sorry", "story", "rorts", "knead", "tease",
            "eerie", "dunce", "deter", "tuned", "ducet",
        ])
    }

    #[test]
    fn blank_state_keeps_everything() {
        let all = dictionary();
        assert_eq!(filter(&all, &ConstraintState::new()), all);
    }

    #[test]
    fn filter_keeps_target_and_drops_guess() {
        let state = observe(&ConstraintState::new(), "adieu", "duvet");
        let remaining = filter(&dictionary(), &state);

        assert!(remaining.contains(&word("duvet")));
        assert!(!remaining.contains(&word("adieu")));
        for candidate in &remaining {
            assert!(!candidate.has_letter(b'a'));
            assert!(!candidate.has_letter(b'i'));
            assert_eq!(candidate.char_at(3), b'e');
        }
    }

    #[test]
    fn excluded_position_rejects_word() {
        let state = observe(&ConstraintState::new(), "adieu", "duvet");
        // d is excluded at 1, u at 4
        assert!(matches(&word("duvet"), &state));
        assert!(matches(&word("tuned"), &state));
        assert!(!matches(&word("udoet"), &state));
        assert!(!matches(&word("doteu"), &state));
    }

    #[test]
    fn duplicate_absent_does_not_exclude_letter_globally() {
        let state = observe(&ConstraintState::new(), "sorry", "story");
        let remaining = filter(&dictionary(), &state);
        assert_eq!(remaining, words(&["story"]));
    }

    #[test]
    fn filter_is_idempotent() {
        let state = observe(&ConstraintState::new(), "tease", "duvet");
        let once = filter(&dictionary(), &state);
        let twice = filter(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn more_information_never_grows_the_set() {
        let targets = ["duvet", "story", "knead", "eerie"];
        let guesses = ["adieu", "sorry", "tease", "dwelt"];

        for target in targets {
            let mut state = ConstraintState::new();
            let mut previous = filter(&dictionary(), &state);
            for guess in guesses {
                state = observe(&state, guess, target);
                let next = filter(&dictionary(), &state);
                assert!(
                    next.iter().all(|w| previous.contains(w)),
                    "target={target} guess={guess}"
                );
                assert!(
                    next.contains(&word(target)),
                    "target={target} guess={guess}"
                );
                previous = next;
            }
        }
    }

    #[test]
    fn filter_preserves_input_order() {
        let state = observe(&ConstraintState::new(), "knead", "duvet");
        let remaining = filter(&dictionary(), &state);
        let positions: Vec<usize> = remaining
            .iter()
            .map(|w| dictionary().iter().position(|d| d == w).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn conflicting_feedback_empties_the_set() {
        let mut state = ConstraintState::new();
        state.update(&word("duvet"), &Feedback::SOLVED);
        state.update(&word("dwelt"), &"-----".parse().unwrap());
        assert!(filter(&dictionary(), &state).is_empty());
    }
}
