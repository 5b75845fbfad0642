//! Partially revealed word pattern
//!
//! A template fixes some positions to known letters and leaves the rest blank,
//! written as e.g. `"__e__"`.

use super::error::WordError;
use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Characters accepted as a blank slot when parsing
const BLANKS: [char; 4] = ['_', '.', '?', '*'];

/// Revealed-position template: each slot is a confirmed letter or unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Template([Option<u8>; WORD_LENGTH]);

impl Template {
    /// All slots unknown
    #[must_use]
    pub const fn blank() -> Self {
        Self([None; WORD_LENGTH])
    }

    /// Parse a pattern such as `"__e__"`
    ///
    /// # Errors
    /// Returns `WordError` if the pattern is not [`WORD_LENGTH`] characters or
    /// contains something other than letters and blanks.
    ///
    /// # Examples
    /// ```
    /// use wordle_autosolver::core::Template;
    ///
    /// let template = Template::parse("__E__").unwrap();
    /// assert_eq!(template.get(2), Some(b'e'));
    /// assert_eq!(template.unknown_count(), 4);
    /// ```
    pub fn parse(pattern: &str) -> Result<Self, WordError> {
        let chars: Vec<char> = pattern.trim().chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(chars.len()));
        }

        let mut slots = [None; WORD_LENGTH];
        for (slot, ch) in slots.iter_mut().zip(chars) {
            *slot = if BLANKS.contains(&ch) {
                None
            } else if ch.is_ascii_alphabetic() {
                Some(ch.to_ascii_lowercase() as u8)
            } else {
                return Err(WordError::InvalidCharacters);
            };
        }

        Ok(Self(slots))
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Option<u8> {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn slots(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.0
    }

    /// Fix a slot to a letter
    #[inline]
    pub fn set(&mut self, position: usize, letter: u8) {
        self.0[position] = Some(letter);
    }

    /// Number of blank slots
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_none()).count()
    }

    /// Every slot is fixed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Whether `word` agrees with every fixed slot
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.0
            .iter()
            .zip(word.chars())
            .all(|(slot, &ch)| slot.is_none_or(|fixed| fixed == ch))
    }

    /// Substitute `letters` into the blank slots, left to right
    ///
    /// Returns `None` unless exactly [`Template::unknown_count`] letters are given.
    #[must_use]
    pub fn fill(&self, letters: &[u8]) -> Option<[u8; WORD_LENGTH]> {
        if letters.len() != self.unknown_count() {
            return None;
        }

        let mut out = [0u8; WORD_LENGTH];
        let mut fillers = letters.iter();
        for (dst, slot) in out.iter_mut().zip(&self.0) {
            *dst = match slot {
                Some(fixed) => *fixed,
                None => *fillers.next()?,
            };
        }
        Some(out)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            write!(f, "{}", slot.map_or('_', char::from))?;
        }
        Ok(())
    }
}

impl FromStr for Template {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mixed_pattern() {
        let template = Template::parse("_u.e?").unwrap();
        assert_eq!(
            template.slots(),
            &[None, Some(b'u'), None, Some(b'e'), None]
        );
        assert_eq!(template.to_string(), "_u_e_");
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(Template::parse("__e_"), Err(WordError::InvalidLength(4)));
        assert_eq!(Template::parse("__e___"), Err(WordError::InvalidLength(6)));
    }

    #[test]
    fn parse_rejects_digits() {
        assert_eq!(Template::parse("__3__"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn blank_template_matches_anything() {
        let template = Template::blank();
        assert_eq!(template.unknown_count(), 5);
        assert!(!template.is_complete());
        assert!(template.matches(&Word::new("duvet").unwrap()));
    }

    #[test]
    fn matches_checks_fixed_slots() {
        let template = Template::parse("d___t").unwrap();
        assert!(template.matches(&Word::new("duvet").unwrap()));
        assert!(!template.matches(&Word::new("adieu").unwrap()));
    }

    #[test]
    fn fill_substitutes_blanks_in_order() {
        let template = Template::parse("__e__").unwrap();
        assert_eq!(template.fill(b"knad"), Some(*b"knead"));
        assert_eq!(template.fill(b"kna"), None);
    }

    #[test]
    fn fill_complete_template_takes_no_letters() {
        let template = Template::parse("duvet").unwrap();
        assert!(template.is_complete());
        assert_eq!(template.fill(&[]), Some(*b"duvet"));
    }

    #[test]
    fn set_fixes_a_slot() {
        let mut template = Template::blank();
        template.set(4, b't');
        assert_eq!(template.get(4), Some(b't'));
        assert_eq!(template.unknown_count(), 4);
    }
}
