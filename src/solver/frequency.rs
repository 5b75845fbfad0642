//! Letter frequency table
//!
//! Maps each letter to a positive weight, expressed as a percentage of all
//! letter occurrences. Built once and read-only afterwards.

use crate::core::{DataError, Word};
use rustc_hash::FxHashMap;

/// Weight used for letters the table does not mention
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Letter → weight mapping
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LetterWeights {
    weights: FxHashMap<u8, f64>,
}

impl LetterWeights {
    /// Count letters across a dictionary and normalise to percentages
    ///
    /// # Examples
    /// ```
    /// use wordle_autosolver::core::Word;
    /// use wordle_autosolver::solver::LetterWeights;
    ///
    /// let words = vec![Word::new("aaaab").unwrap()];
    /// let weights = LetterWeights::from_words(&words);
    /// assert!((weights.weight(b'a') - 80.0).abs() < 1e-9);
    /// assert!((weights.weight(b'b') - 20.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        for word in words {
            for &ch in word.chars() {
                *counts.entry(ch).or_insert(0) += 1;
            }
        }

        let total = counts.values().sum::<usize>() as f64;
        if total == 0.0 {
            return Self::default();
        }

        let weights = counts
            .into_iter()
            .map(|(ch, count)| (ch, count as f64 / total * 100.0))
            .collect();
        Self { weights }
    }

    /// Parse a tab-separated `letter\tpercent` table
    ///
    /// A header row and blank lines are skipped. Letters may be either case;
    /// percentages may carry a trailing `%`.
    ///
    /// # Errors
    /// Returns `DataError` if a row is malformed or no row is usable.
    pub fn parse_table(text: &str) -> Result<Self, DataError> {
        let mut weights = FxHashMap::default();

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut fields = line.split(['\t', ',']).map(str::trim);
            let (Some(letter), Some(percent)) = (fields.next(), fields.next()) else {
                return Err(DataError::BadLine(line.to_string()));
            };

            if letter.eq_ignore_ascii_case("letter") {
                continue;
            }

            let letter = match letter.as_bytes() {
                [ch] if ch.is_ascii_alphabetic() => ch.to_ascii_lowercase(),
                _ => return Err(DataError::BadLine(line.to_string())),
            };
            weights.insert(letter, parse_percent(percent)?);
        }

        if weights.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(Self { weights })
    }

    /// Weight of a letter, [`DEFAULT_WEIGHT`] if unknown
    #[inline]
    #[must_use]
    pub fn weight(&self, letter: u8) -> f64 {
        self.weights.get(&letter).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Reciprocal weights, so rare letters score higher
    ///
    /// Zero weights are left at zero.
    #[must_use]
    pub fn inverted(&self) -> Self {
        let weights = self
            .weights
            .iter()
            .map(|(&ch, &w)| (ch, if w > 0.0 { 1.0 / w } else { 0.0 }))
            .collect();
        Self { weights }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Entries sorted by descending weight
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, f64)> {
        let mut entries: Vec<(char, f64)> = self
            .weights
            .iter()
            .map(|(&ch, &w)| (char::from(ch), w))
            .collect();
        entries.sort_by(|(c1, w1), (c2, w2)| w2.total_cmp(w1).then(c1.cmp(c2)));
        entries
    }
}

fn parse_percent(raw: &str) -> Result<f64, DataError> {
    let number = raw.trim().trim_end_matches('%').trim();
    let value = number
        .parse::<f64>()
        .map_err(|e| DataError::BadPercent(raw.to_string(), e))?;

    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DataError::BadWeight(raw.to_string()))
    }
}
