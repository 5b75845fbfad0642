//! Guess scoring and selection
//!
//! A word's score is a frequency term over its distinct letters, plus a fit
//! term once feedback exists. The highest score wins (or, with
//! [`Selection::NearestMean`], the score closest to the candidate-set mean);
//! exact ties are broken with a caller-supplied RNG. Without a fixed opening
//! word, the first guess may instead be drawn from every candidate within
//! [`ScoringConfig::opening_delta`] of the best score.

use super::constraint::{ConstraintState, LetterStatus};
use super::frequency::LetterWeights;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// How per-letter frequency terms are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Sum,
    Product,
}

impl FromStr for Reduction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(Self::Sum),
            "product" | "prod" => Ok(Self::Product),
            _ => Err(format!("unknown reduction: {s} (expected sum or product)")),
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sum => "sum",
            Self::Product => "product",
        })
    }
}

/// Which scored candidate becomes the guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Maximal score
    #[default]
    Highest,
    /// Score closest to the mean score of the candidate set
    NearestMean,
    /// `Highest` for the first guess, `NearestMean` after that
    HighestThenNearestMean,
}

impl Selection {
    /// The rule that applies in `state`
    #[must_use]
    pub const fn effective(self, state: &ConstraintState) -> Self {
        match self {
            Self::HighestThenNearestMean if state.is_blank() => Self::Highest,
            Self::HighestThenNearestMean => Self::NearestMean,
            other => other,
        }
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "highest" | "max" => Ok(Self::Highest),
            "nearest-mean" | "mean" => Ok(Self::NearestMean),
            "mixed" | "highest-then-mean" => Ok(Self::HighestThenNearestMean),
            _ => Err(format!(
                "unknown selection: {s} (expected highest, nearest-mean or mixed)"
            )),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Highest => "highest",
            Self::NearestMean => "nearest-mean",
            Self::HighestThenNearestMean => "mixed",
        })
    }
}

/// Rewards and penalties of the fit term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitWeights {
    /// Per letter on a confirmed correct slot
    pub correct: f64,
    /// Per known-present letter moved to an untried, unfixed slot
    pub present: f64,
    /// Per letter on a slot where it was already tried and found wrong
    pub tried: f64,
    /// Per repeated letter occurrence beyond the first
    pub repeat: f64,
}

impl Default for FitWeights {
    fn default() -> Self {
        Self {
            correct: 2.0,
            present: 1.0,
            tried: 2.0,
            repeat: 1.0,
        }
    }
}

/// Scoring knobs
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub reduction: Reduction,
    /// Exponent `k` in `weight / occurrences^k`
    pub repeat_exponent: i32,
    /// Fixed first guess; `None` scores the first guess like any other
    pub opening_word: Option<Word>,
    /// With no opening word, draw the first guess from every candidate
    /// scoring at least `best - delta`
    pub opening_delta: Option<f64>,
    pub fit: FitWeights,
    pub selection: Selection,
    /// Score with reciprocal letter weights (rare letters first)
    pub invert_weights: bool,
}

/// Default first guess
pub const OPENING_WORD: &str = "adieu";

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            reduction: Reduction::Sum,
            repeat_exponent: 2,
            opening_word: Word::new(OPENING_WORD).ok(),
            opening_delta: None,
            fit: FitWeights::default(),
            selection: Selection::Highest,
            invert_weights: false,
        }
    }
}

/// Reduce `weight(letter) / occurrences(letter)^k` over the distinct letters
///
/// # Examples
/// ```
/// use wordle_autosolver::core::Word;
/// use wordle_autosolver::solver::{LetterWeights, ScoringConfig, frequency_term};
///
/// let weights = LetterWeights::parse_table("a\t8%\nb\t2%").unwrap();
/// let config = ScoringConfig::default();
///
/// // a: 8 / 4^2, b: 2 / 1^2
/// let score = frequency_term(&Word::new("aaaab").unwrap(), &weights, &config);
/// assert!((score - 2.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn frequency_term(word: &Word, weights: &LetterWeights, config: &ScoringConfig) -> f64 {
    let terms = word.distinct_letters().into_iter().map(|letter| {
        let occurrences = word.count_of(letter) as f64;
        weights.weight(letter) / occurrences.powi(config.repeat_exponent)
    });

    match config.reduction {
        Reduction::Sum => terms.sum(),
        Reduction::Product => terms.product(),
    }
}

/// How well `word` uses what the feedback so far has revealed
///
/// Zero before any feedback.
#[must_use]
pub fn fit_term(word: &Word, state: &ConstraintState, fit: &FitWeights) -> f64 {
    if state.is_blank() {
        return 0.0;
    }

    let template = state.template();
    let mut total = 0.0;

    for (i, &letter) in word.chars().iter().enumerate() {
        if template.get(i) == Some(letter) {
            total += fit.correct;
            continue;
        }
        if let LetterStatus::KnownPresent(excluded) = state.status(letter) {
            if excluded.contains(i) {
                total -= fit.tried;
            } else if template.get(i).is_none() {
                total += fit.present;
            }
        }
    }

    let repeats: usize = word
        .distinct_letters()
        .into_iter()
        .map(|letter| word.count_of(letter) - 1)
        .sum();
    total - fit.repeat * repeats as f64
}

/// Full score of a word in the current state
#[must_use]
pub fn score(
    word: &Word,
    state: &ConstraintState,
    weights: &LetterWeights,
    config: &ScoringConfig,
) -> f64 {
    frequency_term(word, weights, config) + fit_term(word, state, &config.fit)
}

/// Every candidate with its score, best first
///
/// Equal scores keep their input order.
#[must_use]
pub fn rank(
    candidates: &[Word],
    state: &ConstraintState,
    weights: &LetterWeights,
    config: &ScoringConfig,
) -> Vec<(Word, f64)> {
    let mut scored: Vec<(Word, f64)> = candidates
        .par_iter()
        .map(|word| (word.clone(), score(word, state, weights, config)))
        .collect();
    scored.sort_by(|(_, a), (_, b)| b.total_cmp(a));
    scored
}

/// Choose the next guess
///
/// While `state` is blank this is the configured opening word, or a random
/// pick from the [`opening_band`] when an opening delta is set. Otherwise the
/// best candidate by [`best_candidate`]. `None` iff no guess is possible.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use wordle_autosolver::core::Word;
/// use wordle_autosolver::solver::{ConstraintState, LetterWeights, ScoringConfig, select_guess};
///
/// let words = vec![Word::new("duvet").unwrap()];
/// let weights = LetterWeights::from_words(&words);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let guess = select_guess(
///     &words,
///     &ConstraintState::new(),
///     &weights,
///     &ScoringConfig::default(),
///     &mut rng,
/// );
/// assert_eq!(guess.unwrap().text(), "adieu");
/// ```
pub fn select_guess<R>(
    candidates: &[Word],
    state: &ConstraintState,
    weights: &LetterWeights,
    config: &ScoringConfig,
    rng: &mut R,
) -> Option<Word>
where
    R: Rng + ?Sized,
{
    if state.is_blank() {
        if let Some(opening) = &config.opening_word {
            return Some(opening.clone());
        }
        if let Some(delta) = config.opening_delta {
            let band = opening_band(candidates, state, weights, config, delta);
            log::debug!("{} candidate(s) in the opening band", band.len());
            return band.choose(rng).map(|&word| word.clone());
        }
    }
    best_candidate(candidates, state, weights, config, rng)
}

/// Score `candidates` and pick one, ignoring the opening word
pub fn best_candidate<R>(
    candidates: &[Word],
    state: &ConstraintState,
    weights: &LetterWeights,
    config: &ScoringConfig,
    rng: &mut R,
) -> Option<Word>
where
    R: Rng + ?Sized,
{
    let ties = tie_set(candidates, state, weights, config);
    log::debug!("{} candidate(s) tied for selection", ties.len());
    ties.choose(rng).map(|&word| word.clone())
}

/// Candidates sharing the winning selection key, in input order
///
/// Never empty when `candidates` is not.
#[must_use]
pub fn tie_set<'a>(
    candidates: &'a [Word],
    state: &ConstraintState,
    weights: &LetterWeights,
    config: &ScoringConfig,
) -> Vec<&'a Word> {
    let scored = score_all(candidates, state, weights, config);
    if scored.is_empty() {
        return Vec::new();
    }

    let mean = match config.selection.effective(state) {
        Selection::NearestMean => {
            let total: f64 = scored.iter().map(|&(_, s)| s).sum();
            Some(total / scored.len() as f64)
        }
        _ => None,
    };
    let key = |s: f64| mean.map_or(s, |m| -(s - m).abs());

    let Some(best) = scored.iter().map(|&(_, s)| key(s)).max_by(f64::total_cmp) else {
        return Vec::new();
    };

    scored
        .into_iter()
        .filter(|&(_, s)| key(s).total_cmp(&best).is_eq())
        .map(|(word, _)| word)
        .collect()
}

/// Candidates scoring within `delta` of the best score, in input order
///
/// A negative or non-finite `delta` counts as zero. Never empty when
/// `candidates` is not.
#[must_use]
pub fn opening_band<'a>(
    candidates: &'a [Word],
    state: &ConstraintState,
    weights: &LetterWeights,
    config: &ScoringConfig,
    delta: f64,
) -> Vec<&'a Word> {
    let scored = score_all(candidates, state, weights, config);
    let Some(best) = scored.iter().map(|&(_, s)| s).max_by(f64::total_cmp) else {
        return Vec::new();
    };

    let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
    let floor = best - delta;
    scored
        .into_iter()
        .filter(|&(_, s)| s.total_cmp(&floor).is_ge())
        .map(|(word, _)| word)
        .collect()
}

fn score_all<'a>(
    candidates: &'a [Word],
    state: &ConstraintState,
    weights: &LetterWeights,
    config: &ScoringConfig,
) -> Vec<(&'a Word, f64)> {
    candidates
        .par_iter()
        .map(|word| (word, score(word, state, weights, config)))
        .collect()
}
