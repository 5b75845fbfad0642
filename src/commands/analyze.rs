//! Word analysis command
//!
//! Breaks down how a word scores as an opening guess.

use crate::core::{SolverError, Word};
use crate::solver::{ConstraintState, Solver, frequency_term, rank};

/// One distinct letter of the analysed word
pub struct LetterBreakdown {
    pub letter: char,
    pub weight: f64,
    pub occurrences: usize,
}

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: Word,
    pub in_dictionary: bool,
    pub frequency_score: f64,
    /// 1-based position among the dictionary by opening score
    pub rank: Option<usize>,
    pub total_words: usize,
    pub letters: Vec<LetterBreakdown>,
    /// Best opening words by score
    pub top: Vec<(Word, f64)>,
}

/// Analyze a word's frequency score against the solver's dictionary
///
/// # Errors
///
/// Returns `InvalidWord` if the word is not five letters.
pub fn analyze_word(
    solver: &Solver<'_>,
    word: &str,
    top: usize,
) -> Result<AnalysisResult, SolverError> {
    let word = Word::new(word)?;
    let scoring = &solver.config().scoring;
    let weights = solver.weights();

    let ranked = rank(
        solver.dictionary(),
        &ConstraintState::new(),
        weights,
        scoring,
    );
    let position = ranked.iter().position(|(w, _)| *w == word).map(|i| i + 1);

    let letters = word
        .distinct_letters()
        .into_iter()
        .map(|letter| LetterBreakdown {
            letter: char::from(letter),
            weight: weights.weight(letter),
            occurrences: word.count_of(letter),
        })
        .collect();

    Ok(AnalysisResult {
        in_dictionary: position.is_some(),
        frequency_score: frequency_term(&word, weights, scoring),
        rank: position,
        total_words: ranked.len(),
        letters,
        top: ranked.into_iter().take(top).collect(),
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_valid_word() {
        let words = words_from_slice(&["adieu", "eerie", "duvet"]);
        let solver = Solver::from_dictionary(&words, SolverConfig::default());

        let result = analyze_word(&solver, "adieu", 2).unwrap();
        assert!(result.in_dictionary);
        assert_eq!(result.total_words, 3);
        assert_eq!(result.letters.len(), 5);
        assert_eq!(result.top.len(), 2);
        assert!(result.rank.is_some());
    }

    #[test]
    fn repeated_letters_are_counted() {
        let words = words_from_slice(&["eerie"]);
        let solver = Solver::from_dictionary(&words, SolverConfig::default());

        let result = analyze_word(&solver, "eerie", 1).unwrap();
        let e = result.letters.iter().find(|l| l.letter == 'e').unwrap();
        assert_eq!(e.occurrences, 3);
        assert_eq!(result.rank, Some(1));
    }

    #[test]
    fn word_outside_dictionary_has_no_rank() {
        let words = words_from_slice(&["adieu"]);
        let solver = Solver::from_dictionary(&words, SolverConfig::default());

        let result = analyze_word(&solver, "story", 5).unwrap();
        assert!(!result.in_dictionary);
        assert_eq!(result.rank, None);
    }

    #[test]
    fn analyze_invalid_word() {
        let words = words_from_slice(&["adieu"]);
        let solver = Solver::from_dictionary(&words, SolverConfig::default());
        assert!(analyze_word(&solver, "toolong", 5).is_err());
    }
}
