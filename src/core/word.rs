//! Fixed-length word representation
//!
//! A Word stores a lowercase five-letter word as both text and bytes.

use super::error::WordError;
use std::fmt;

/// Number of letters in every word the solver handles
pub const WORD_LENGTH: usize = 5;

/// A lowercase word of exactly [`WORD_LENGTH`] ASCII letters
///
/// Immutable once built. Ordering and hashing follow the text, so words can
/// live in sets and sort alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased; it is never truncated or padded.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly [`WORD_LENGTH`]
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_autosolver::core::Word;
    ///
    /// let word = Word::new("ADIEU").unwrap();
    /// assert_eq!(word.text(), "adieu");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("du4et").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        let length = text.chars().count();
        if length != WORD_LENGTH {
            return Err(WordError::InvalidLength(length));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WORD_LENGTH];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Build a word from raw lowercase bytes
    ///
    /// # Errors
    /// Same conditions as [`Word::new`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WordError> {
        if bytes.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(bytes.len()));
        }
        let text = std::str::from_utf8(bytes).map_err(|_| WordError::InvalidCharacters)?;
        Self::new(text)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= [`WORD_LENGTH`]
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Number of times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&ch| ch == letter).count()
    }

    /// Distinct letters in order of first appearance
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<u8> {
        let mut seen = Vec::with_capacity(WORD_LENGTH);
        for &ch in &self.chars {
            if !seen.contains(&ch) {
                seen.push(ch);
            }
        }
        seen
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
