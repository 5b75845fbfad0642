//! Accumulated knowledge about the target word
//!
//! The constraint state is the revealed-position template plus a status for
//! every letter. It only grows more informative: fixed template slots are
//! never cleared, and a letter seen present is never demoted to absent.

use crate::core::{Feedback, PositionOutcome, Template, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Set of word positions, stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Positions(u8);

impl Positions {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }

    #[inline]
    pub fn insert(&mut self, position: usize) {
        debug_assert!(position < WORD_LENGTH);
        self.0 |= 1 << position;
    }

    #[inline]
    pub fn remove(&mut self, position: usize) {
        self.0 &= !(1 << position);
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..WORD_LENGTH).filter(move |&i| self.contains(i))
    }
}

impl<const N: usize> From<[usize; N]> for Positions {
    fn from(positions: [usize; N]) -> Self {
        let mut set = Self::empty();
        for position in positions {
            set.insert(position);
        }
        set
    }
}

/// What is known about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    #[default]
    Unconstrained,
    /// The letter is not in the word
    KnownAbsent,
    /// The letter is in the word but not at any of these positions
    KnownPresent(Positions),
}

/// Template plus per-letter status, derived from every feedback so far
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstraintState {
    template: Template,
    letters: FxHashMap<u8, LetterStatus>,
    rounds: usize,
}

impl ConstraintState {
    /// A state with no knowledge
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub const fn template(&self) -> &Template {
        &self.template
    }

    /// Number of feedback rounds applied
    #[inline]
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// True until the first feedback arrives
    #[inline]
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.rounds == 0
    }

    /// Status of a letter
    #[inline]
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        self.letters.get(&letter).copied().unwrap_or_default()
    }

    /// Letters with a non-default status, sorted
    #[must_use]
    pub fn constrained_letters(&self) -> Vec<(u8, LetterStatus)> {
        let mut entries: Vec<(u8, LetterStatus)> =
            self.letters.iter().map(|(&ch, &status)| (ch, status)).collect();
        entries.sort_unstable_by_key(|&(ch, _)| ch);
        entries
    }

    /// Letters not known to be absent, in alphabetical order
    #[must_use]
    pub fn available_letters(&self) -> Vec<u8> {
        (b'a'..=b'z')
            .filter(|&ch| self.status(ch) != LetterStatus::KnownAbsent)
            .collect()
    }

    /// Fold one round of feedback into the state
    ///
    /// Presence (`Correct`/`Present`) is applied before absence, so an
    /// `Absent` for a repeated letter only excludes that position when the
    /// same letter is present elsewhere. `Pending` positions carry no
    /// information and are skipped.
    ///
    /// # Examples
    /// ```
    /// use wordle_autosolver::core::{Feedback, Word};
    /// use wordle_autosolver::solver::{ConstraintState, LetterStatus};
    ///
    /// let mut state = ConstraintState::new();
    /// let guess = Word::new("sorry").unwrap();
    /// let target = Word::new("story").unwrap();
    /// state.update(&guess, &Feedback::calculate(&guess, &target));
    ///
    /// // r is absent at position 2 but correct at 3: still in the word
    /// assert!(matches!(state.status(b'r'), LetterStatus::KnownPresent(_)));
    /// ```
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        let outcomes = feedback.outcomes();

        for (i, (&letter, &outcome)) in guess.chars().iter().zip(outcomes).enumerate() {
            match outcome {
                PositionOutcome::Correct => {
                    self.template.set(i, letter);
                    self.mark_present(letter, |excluded| excluded.remove(i));
                }
                PositionOutcome::Present => {
                    self.mark_present(letter, |excluded| excluded.insert(i));
                }
                PositionOutcome::Absent | PositionOutcome::Pending => {}
            }
        }

        for (i, (&letter, &outcome)) in guess.chars().iter().zip(outcomes).enumerate() {
            if outcome != PositionOutcome::Absent {
                continue;
            }
            match self.status(letter) {
                LetterStatus::KnownPresent(mut excluded) => {
                    excluded.insert(i);
                    self.letters.insert(letter, LetterStatus::KnownPresent(excluded));
                }
                LetterStatus::Unconstrained | LetterStatus::KnownAbsent => {
                    self.letters.insert(letter, LetterStatus::KnownAbsent);
                }
            }
        }

        self.rounds += 1;
    }

    /// Copy of the state with one more round folded in
    #[must_use]
    pub fn updated(&self, guess: &Word, feedback: &Feedback) -> Self {
        let mut next = self.clone();
        next.update(guess, feedback);
        next
    }

    fn mark_present(&mut self, letter: u8, edit: impl FnOnce(&mut Positions)) {
        let mut excluded = match self.status(letter) {
            LetterStatus::KnownPresent(excluded) => excluded,
            LetterStatus::Unconstrained | LetterStatus::KnownAbsent => Positions::empty(),
        };
        edit(&mut excluded);
        self.letters.insert(letter, LetterStatus::KnownPresent(excluded));
    }
}

impl fmt::Display for ConstraintState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)?;

        let mut absent = String::new();
        let mut present = Vec::new();
        for (ch, status) in self.constrained_letters() {
            match status {
                LetterStatus::KnownAbsent => absent.push(char::from(ch)),
                LetterStatus::KnownPresent(excluded) => {
                    let not_at: Vec<String> = excluded.iter().map(|p| p.to_string()).collect();
                    present.push(format!("{}!{}", char::from(ch), not_at.join(",")));
                }
                LetterStatus::Unconstrained => {}
            }
        }

        if !present.is_empty() {
            write!(f, " present[{}]", present.join(" "))?;
        }
        if !absent.is_empty() {
            write!(f, " absent[{absent}]")?;
        }
        Ok(())
    }
}
