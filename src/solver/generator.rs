//! Candidate generation from a template and a pool of letters
//!
//! Every ordered choice of distinct pool entries is substituted into the
//! template's blank slots. Results are kept either by dictionary membership
//! (fast) or by asking a word oracle about each one (slow, one lookup per
//! candidate).

use super::oracle::WordOracle;
use crate::core::{Template, Word};
use itertools::Itertools;
use rustc_hash::FxHashSet;

/// Where generated strings are validated
pub enum CandidateSource<'a> {
    /// Keep strings that are in this dictionary
    Dictionary(&'a FxHashSet<Word>),
    /// Ask the oracle about every string
    Oracle(&'a dyn WordOracle),
}

/// Progress reporting for long generations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub verbose: bool,
    /// Log progress every this many permutations
    pub report_every: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            report_every: 1000,
        }
    }
}

/// Number of ordered selections of `k` items from `n`, saturating
#[must_use]
pub fn permutation_count(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    ((n - k + 1)..=n).fold(1u128, |acc, x| acc.saturating_mul(x as u128))
}

/// Generate the valid words formed by filling `template` from `letters`
///
/// `letters` is read as a multiset: each entry is used at most once per
/// candidate, so a letter typed twice may appear twice. Non-letters are
/// ignored. If fewer letters than blanks are available the result is empty.
/// A complete template yields itself, subject to validation.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use wordle_autosolver::core::{Template, Word};
/// use wordle_autosolver::solver::{CandidateSource, GenerateOptions, generate};
///
/// let dictionary: FxHashSet<Word> = ["knead", "bread", "abend"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let template = Template::parse("__e__").unwrap();
/// let found = generate(
///     &template,
///     "abdknpo",
///     &CandidateSource::Dictionary(&dictionary),
///     &GenerateOptions::default(),
/// );
/// assert_eq!(found.len(), 2);
/// ```
#[must_use]
pub fn generate(
    template: &Template,
    letters: &str,
    source: &CandidateSource<'_>,
    options: &GenerateOptions,
) -> Vec<Word> {
    let pool: Vec<u8> = letters
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_lowercase())
        .collect();
    let blanks = template.unknown_count();
    let report_every = options.report_every.max(1);

    if options.verbose {
        let total = permutation_count(pool.len(), blanks);
        log::info!(
            "working on computing {total} permutation{}",
            if total == 1 { "" } else { "s" }
        );
    }

    let mut seen: FxHashSet<Word> = FxHashSet::default();
    let mut found = Vec::new();

    for (i, combo) in pool.iter().copied().permutations(blanks).enumerate() {
        if options.verbose && i > 0 && i % report_every == 0 {
            log::info!("searched {i} combinations");
        }

        let Some(bytes) = template.fill(&combo) else {
            continue;
        };
        let Ok(word) = Word::from_bytes(&bytes) else {
            continue;
        };
        if !seen.insert(word.clone()) {
            continue;
        }

        let accepted = match source {
            CandidateSource::Dictionary(dictionary) => dictionary.contains(&word),
            CandidateSource::Oracle(oracle) => {
                let valid = oracle.is_word(word.text());
                if valid && options.verbose {
                    log::info!("{word} is a word");
                }
                valid
            }
        };

        if accepted {
            found.push(word);
        }
    }

    if options.verbose {
        log::info!("finished: {} word(s) found", found.len());
    }
    found
}
