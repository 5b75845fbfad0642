//! External collaborators: word-existence and feedback oracles
//!
//! The solver never talks to a dictionary service or a game board directly.
//! It asks a [`WordOracle`] whether a string is a word, and a
//! [`FeedbackOracle`] how a guess scored. Feedback from an interactive board
//! may not be ready immediately, so [`poll_feedback`] retries within a
//! bounded [`RetryPolicy`].

use crate::core::{Feedback, TileState, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use std::thread;
use std::time::{Duration, Instant};

/// Answers "is this letter sequence a word?"
///
/// Lookup failures are the implementor's concern and should answer `false`.
pub trait WordOracle {
    fn is_word(&self, candidate: &str) -> bool;
}

impl<F> WordOracle for F
where
    F: Fn(&str) -> bool,
{
    fn is_word(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// Word oracle backed by an in-memory word set
#[derive(Debug, Clone, Default)]
pub struct DictionaryOracle {
    words: FxHashSet<String>,
}

impl DictionaryOracle {
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }
}

impl WordOracle for DictionaryOracle {
    fn is_word(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }
}

/// One read of the feedback for a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Every position has a definitive outcome
    Settled(Feedback),
    /// Letters are on the board but not evaluated yet
    Pending,
    /// The row is (partly) empty: the guess was not taken
    Empty,
}

impl Submission {
    /// Interpret a row of board tiles
    ///
    /// Any `Empty` tile makes the row empty; otherwise any `Tbd` tile makes it pending.
    #[must_use]
    pub fn from_tiles(tiles: &[TileState; WORD_LENGTH]) -> Self {
        if tiles.contains(&TileState::Empty) {
            Self::Empty
        } else if tiles.contains(&TileState::Tbd) {
            Self::Pending
        } else {
            Self::Settled(Feedback::from_tiles(tiles))
        }
    }
}

/// Produces per-position feedback for submitted guesses
pub trait FeedbackOracle {
    /// Enter a guess and read its row once
    fn submit(&mut self, guess: &Word) -> Submission;

    /// Read the row for an already submitted guess again
    fn poll(&mut self, guess: &Word) -> Submission;

    /// Take back a guess that never settled (e.g. clear the typed letters)
    fn withdraw(&mut self, _guess: &Word) {}
}

/// Feedback oracle that scores guesses against a known target word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOracle {
    target: Word,
}

impl TargetOracle {
    #[must_use]
    pub const fn new(target: Word) -> Self {
        Self { target }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}

impl FeedbackOracle for TargetOracle {
    fn submit(&mut self, guess: &Word) -> Submission {
        Submission::Settled(Feedback::calculate(guess, &self.target))
    }

    fn poll(&mut self, guess: &Word) -> Submission {
        self.submit(guess)
    }
}

/// Bounds on waiting for feedback to settle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wall-clock budget for one guess to settle
    pub max_wait: Duration,
    /// Pause between reads
    pub poll_interval: Duration,
    /// Reads per guess, the initial submission included
    pub max_polls: usize,
    /// Guesses that may be withdrawn and replaced within one round
    pub max_resubmissions: usize,
}

impl RetryPolicy {
    /// Read once, never sleep
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            max_wait: Duration::ZERO,
            poll_interval: Duration::ZERO,
            max_polls: 1,
            max_resubmissions: 5,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_wait: Duration::from_secs(5),
            poll_interval: Duration::from_millis(100),
            max_polls: 50,
            max_resubmissions: 5,
        }
    }
}

/// Result of waiting for one guess to settle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Settled(Feedback),
    /// The guess never made it onto the board
    Empty,
    /// Still pending when the budget ran out
    Indeterminate,
}

/// Submit `guess` and poll until it settles or the policy is exhausted
///
/// Stops at whichever comes first: `max_polls` reads or `max_wait` elapsed.
pub fn poll_feedback<O>(oracle: &mut O, guess: &Word, policy: &RetryPolicy) -> PollOutcome
where
    O: FeedbackOracle + ?Sized,
{
    let start = Instant::now();
    let mut reading = oracle.submit(guess);
    let mut polls = 1;

    loop {
        if let Submission::Settled(feedback) = reading {
            return PollOutcome::Settled(feedback);
        }
        if polls >= policy.max_polls || start.elapsed() >= policy.max_wait {
            break;
        }
        if !policy.poll_interval.is_zero() {
            thread::sleep(policy.poll_interval);
        }
        reading = oracle.poll(guess);
        polls += 1;
    }

    log::debug!("{guess}: gave up after {polls} reads ({reading:?})");
    match reading {
        Submission::Empty => PollOutcome::Empty,
        Submission::Pending | Submission::Settled(_) => PollOutcome::Indeterminate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays a fixed sequence of readings, then repeats the last one
    struct Scripted {
        readings: VecDeque<Submission>,
        reads: usize,
    }

    impl Scripted {
        fn new(readings: Vec<Submission>) -> Self {
            Self {
                readings: readings.into(),
                reads: 0,
            }
        }

        fn next(&mut self) -> Submission {
            self.reads += 1;
            if self.readings.len() > 1 {
                self.readings.pop_front().unwrap()
            } else {
                *self.readings.front().unwrap()
            }
        }
    }

    impl FeedbackOracle for Scripted {
        fn submit(&mut self, _guess: &Word) -> Submission {
            self.next()
        }

        fn poll(&mut self, _guess: &Word) -> Submission {
            self.next()
        }
    }

    fn fast_policy(max_polls: usize) -> RetryPolicy {
        RetryPolicy {
            max_wait: Duration::from_secs(5),
            poll_interval: Duration::ZERO,
            max_polls,
            max_resubmissions: 0,
        }
    }

    fn guess() -> Word {
        Word::new("adieu").unwrap()
    }

    #[test]
    fn target_oracle_settles_immediately() {
        let mut oracle = TargetOracle::new(Word::new("duvet").unwrap());
        let outcome = poll_feedback(&mut oracle, &guess(), &RetryPolicy::immediate());
        assert_eq!(
            outcome,
            PollOutcome::Settled("-Y-GY".parse().unwrap())
        );
    }

    #[test]
    fn pending_then_settled_is_retried() {
        let settled: Feedback = "GG---".parse().unwrap();
        let mut oracle = Scripted::new(vec![
            Submission::Pending,
            Submission::Pending,
            Submission::Settled(settled),
        ]);

        let outcome = poll_feedback(&mut oracle, &guess(), &fast_policy(10));
        assert_eq!(outcome, PollOutcome::Settled(settled));
        assert_eq!(oracle.reads, 3);
    }

    #[test]
    fn pending_forever_is_indeterminate() {
        let mut oracle = Scripted::new(vec![Submission::Pending]);
        let outcome = poll_feedback(&mut oracle, &guess(), &fast_policy(4));
        assert_eq!(outcome, PollOutcome::Indeterminate);
        assert_eq!(oracle.reads, 4);
    }

    #[test]
    fn empty_row_is_reported_distinctly() {
        let mut oracle = Scripted::new(vec![Submission::Empty]);
        let outcome = poll_feedback(&mut oracle, &guess(), &fast_policy(3));
        assert_eq!(outcome, PollOutcome::Empty);
    }

    #[test]
    fn wall_clock_budget_stops_polling() {
        let mut oracle = Scripted::new(vec![Submission::Pending]);
        let policy = RetryPolicy {
            max_wait: Duration::ZERO,
            poll_interval: Duration::ZERO,
            max_polls: usize::MAX,
            max_resubmissions: 0,
        };
        assert_eq!(
            poll_feedback(&mut oracle, &guess(), &policy),
            PollOutcome::Indeterminate
        );
        assert_eq!(oracle.reads, 1);
    }

    #[test]
    fn submission_from_tiles() {
        use TileState::{Absent, Correct, Empty, Present, Tbd};

        assert_eq!(
            Submission::from_tiles(&[Correct, Tbd, Absent, Absent, Empty]),
            Submission::Empty
        );
        assert_eq!(
            Submission::from_tiles(&[Correct, Tbd, Absent, Absent, Absent]),
            Submission::Pending
        );
        assert_eq!(
            Submission::from_tiles(&[Correct, Present, Absent, Absent, Absent]),
            Submission::Settled("GY---".parse().unwrap())
        );
    }

    #[test]
    fn dictionary_oracle_lookup() {
        let oracle = DictionaryOracle::new(&[Word::new("duvet").unwrap()]);
        assert!(oracle.is_word("duvet"));
        assert!(!oracle.is_word("dvuet"));
    }

    #[test]
    fn closures_are_word_oracles() {
        let oracle = |s: &str| s.starts_with('d');
        assert!(oracle.is_word("duvet"));
        assert!(!oracle.is_word("adieu"));
    }
}
