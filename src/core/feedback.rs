//! Per-position feedback for a submitted guess
//!
//! A guess is answered with one [`PositionOutcome`] per letter. Interactive
//! game boards report richer tile states ([`TileState`]) that collapse into
//! outcomes once the row has settled.

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Feedback for one letter of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionOutcome {
    /// Right letter, right position
    Correct,
    /// Letter is in the word at another position
    Present,
    /// Letter is not in the word (or not this many times)
    Absent,
    /// The oracle has not produced a definitive result yet
    Pending,
}

impl PositionOutcome {
    /// Whether the letter is known to be in the word
    #[inline]
    #[must_use]
    pub const fn is_presence(self) -> bool {
        matches!(self, Self::Correct | Self::Present)
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Pending => '❓',
        }
    }
}

/// Outcome array for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([PositionOutcome; WORD_LENGTH]);

impl Feedback {
    /// Every position correct
    pub const SOLVED: Self = Self([PositionOutcome::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(outcomes: [PositionOutcome; WORD_LENGTH]) -> Self {
        Self(outcomes)
    }

    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[PositionOutcome; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> PositionOutcome {
        self.0[position]
    }

    /// True once no position is `Pending`
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.0.contains(&PositionOutcome::Pending)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&o| o == PositionOutcome::Correct)
    }

    /// Compute the feedback a game gives when `guess` is played against `target`
    ///
    /// Duplicate letters follow the usual rules: correct positions consume
    /// their letter first, then misplaced copies are marked present left to
    /// right until the target runs out of that letter; extra copies are absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_autosolver::core::{Feedback, Word};
    ///
    /// let guess = Word::new("adieu").unwrap();
    /// let target = Word::new("duvet").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &target).to_string(), "-Y-GY");
    /// ```
    #[must_use]
    #[allow(clippy::needless_range_loop)] // Index walks guess, target and result together
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [PositionOutcome::Absent; WORD_LENGTH];
        let mut available: FxHashMap<u8, usize> = FxHashMap::default();

        // First pass: greens, counting the target letters they do not consume
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == target.char_at(i) {
                result[i] = PositionOutcome::Correct;
            } else {
                *available.entry(target.char_at(i)).or_insert(0) += 1;
            }
        }

        // Second pass: yellows from what is left
        for i in 0..WORD_LENGTH {
            if result[i] == PositionOutcome::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = PositionOutcome::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Collapse a row of board tiles into feedback
    ///
    /// `Tbd` and `Empty` tiles become `Pending`.
    #[must_use]
    pub fn from_tiles(tiles: &[TileState; WORD_LENGTH]) -> Self {
        let mut outcomes = [PositionOutcome::Pending; WORD_LENGTH];
        for (outcome, tile) in outcomes.iter_mut().zip(tiles) {
            *outcome = tile.outcome();
        }
        Self(outcomes)
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|o| o.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.0 {
            let ch = match outcome {
                PositionOutcome::Correct => 'G',
                PositionOutcome::Present => 'Y',
                PositionOutcome::Absent => '-',
                PositionOutcome::Pending => '?',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    /// - '?'/❓ for pending
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut outcomes = [PositionOutcome::Pending; WORD_LENGTH];
        for (outcome, ch) in outcomes.iter_mut().zip(chars) {
            *outcome = match ch {
                'G' | 'g' | '🟩' => PositionOutcome::Correct,
                'Y' | 'y' | '🟨' => PositionOutcome::Present,
                '-' | '_' | '.' | '⬜' | '⬛' => PositionOutcome::Absent,
                '?' | '❓' => PositionOutcome::Pending,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(outcomes))
    }
}

/// Tile state as reported by an interactive game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    Correct,
    Present,
    Absent,
    /// Letter typed but not yet evaluated
    Tbd,
    /// Nothing typed in this tile
    Empty,
}

impl TileState {
    #[must_use]
    pub const fn outcome(self) -> PositionOutcome {
        match self {
            Self::Correct => PositionOutcome::Correct,
            Self::Present => PositionOutcome::Present,
            Self::Absent => PositionOutcome::Absent,
            Self::Tbd | Self::Empty => PositionOutcome::Pending,
        }
    }
}

impl FromStr for TileState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "correct" => Ok(Self::Correct),
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "tbd" => Ok(Self::Tbd),
            "empty" => Ok(Self::Empty),
            other => Err(format!("Unknown tile state: {other}")),
        }
    }
}
