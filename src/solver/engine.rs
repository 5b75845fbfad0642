//! Shared solver configuration and dictionary
//!
//! A [`Solver`] is immutable once built and may be shared by any number of
//! games. Each game gets its own [`GameSession`] with fresh state.

use super::frequency::LetterWeights;
use super::oracle::RetryPolicy;
use super::scorer::ScoringConfig;
use super::session::GameSession;
use crate::core::Word;

/// Standard Wordle attempt limit
pub const MAX_ATTEMPTS: usize = 6;

/// Everything a session needs besides the dictionary
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    pub scoring: ScoringConfig,
    pub retry: RetryPolicy,
    pub max_attempts: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            retry: RetryPolicy::default(),
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

/// Main Wordle solver
///
/// Holds the dictionary, the effective letter weights and the configuration.
pub struct Solver<'a> {
    dictionary: &'a [Word],
    weights: LetterWeights,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver over `dictionary`
    ///
    /// With `invert_weights` set, `weights` is replaced by its reciprocal here
    /// once rather than on every score.
    #[must_use]
    pub fn new(dictionary: &'a [Word], weights: &LetterWeights, config: SolverConfig) -> Self {
        let weights = if config.scoring.invert_weights {
            weights.inverted()
        } else {
            weights.clone()
        };
        Self {
            dictionary,
            weights,
            config,
        }
    }

    /// Solver with letter weights counted from the dictionary itself
    #[must_use]
    pub fn from_dictionary(dictionary: &'a [Word], config: SolverConfig) -> Self {
        Self::new(dictionary, &LetterWeights::from_words(dictionary), config)
    }

    /// Start a new game
    ///
    /// Every session starts from a blank state and the full dictionary;
    /// nothing is carried over from earlier sessions.
    #[must_use]
    pub fn new_session(&self) -> GameSession<'_> {
        GameSession::new(self)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    #[must_use]
    pub const fn weights(&self) -> &LetterWeights {
        &self.weights
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn dictionary() -> Vec<Word> {
        ["duvet", "dwelt", "debut", "story"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[test]
    fn default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.scoring.opening_word, Word::new("adieu").ok());
    }

    #[test]
    fn inverted_weights_are_applied_once() {
        let words = dictionary();
        let weights = LetterWeights::parse_table("e\t10%\nq\t0.5%").unwrap();
        let config = SolverConfig {
            scoring: ScoringConfig {
                invert_weights: true,
                ..ScoringConfig::default()
            },
            ..SolverConfig::default()
        };
        let solver = Solver::new(&words, &weights, config);
        assert!((solver.weights().weight(b'e') - 0.1).abs() < 1e-9);
    }

    #[test]
    fn sessions_do_not_share_state() {
        let words = dictionary();
        let solver = Solver::from_dictionary(&words, SolverConfig::default());

        let mut first = solver.new_session();
        let guess = Word::new("duvet").unwrap();
        let target = Word::new("story").unwrap();
        first
            .record(&guess, Feedback::calculate(&guess, &target))
            .unwrap();
        assert!(first.candidates().len() < words.len());

        let second = solver.new_session();
        assert_eq!(second.candidates(), words.as_slice());
        assert!(second.state().is_blank());
        assert_eq!(second.attempts(), 0);
    }
}
