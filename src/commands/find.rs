//! Pattern search command
//!
//! Lists the words that fit a revealed-letter pattern using only the given
//! letters for the blanks.

use crate::core::{SolverError, Template, Word};
use crate::solver::{
    CandidateSource, GenerateOptions, WordOracle, generate, permutation_count,
};
use rustc_hash::FxHashSet;

/// Arguments for a pattern search
pub struct FindConfig {
    /// Revealed letters with `_` for blanks, e.g. `__e__`
    pub pattern: String,
    /// Letters that may fill the blanks
    pub letters: String,
    pub verbose: bool,
}

/// Words found for a pattern
pub struct FindResult {
    pub template: Template,
    pub letters: String,
    /// Fillings tried
    pub searched: u128,
    pub words: Vec<Word>,
}

/// Search for words matching `config.pattern`
///
/// Validates against `dictionary`, or asks `oracle` about every candidate
/// when one is given.
///
/// # Errors
///
/// Returns `InvalidWord` if the pattern is not five characters of letters
/// and blanks.
pub fn find_words(
    config: &FindConfig,
    dictionary: &[Word],
    oracle: Option<&dyn WordOracle>,
) -> Result<FindResult, SolverError> {
    let template = Template::parse(&config.pattern)?;
    let letters: String = config
        .letters
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let known: FxHashSet<Word>;
    let source = if let Some(oracle) = oracle {
        CandidateSource::Oracle(oracle)
    } else {
        known = dictionary.iter().cloned().collect();
        CandidateSource::Dictionary(&known)
    };

    let options = GenerateOptions {
        verbose: config.verbose,
        ..GenerateOptions::default()
    };
    let mut words = generate(&template, &letters, &source, &options);
    words.sort_unstable();

    Ok(FindResult {
        template,
        searched: permutation_count(letters.len(), template.unknown_count()),
        letters,
        words,
    })
}
