//! Error types shared across the crate

use super::status::GameStatus;
use super::word::WORD_LENGTH;
use std::num::ParseFloatError;
use thiserror::Error;

/// A word (or template) failed validation at an input boundary
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {0}", expected = WORD_LENGTH)]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

/// Errors raised by the solver loop
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// No candidate words remain, so no legal guess exists
    #[error("no candidate words remain")]
    WordGeneration,
    /// A guess-advancing call was made on a finished session
    #[error("the game is already over ({0})")]
    GameOver(GameStatus),
    /// The attempt counter left its valid range
    #[error("attempt counter {attempts} is outside 0..={max}")]
    GuessLimit { attempts: usize, max: usize },
    #[error(transparent)]
    InvalidWord(#[from] WordError),
    /// Feedback with pending positions cannot be recorded
    #[error("feedback still has pending positions")]
    UnsettledFeedback,
    /// The feedback oracle never settled within the retry budget
    #[error("feedback oracle did not settle after {resubmissions} resubmissions")]
    OracleExhausted { resubmissions: usize },
}

impl SolverError {
    /// Whether this error signals a broken invariant rather than a game condition
    #[must_use]
    pub const fn is_fault(&self) -> bool {
        matches!(self, Self::GuessLimit { .. })
    }
}

/// Errors raised while loading letter tables
#[derive(Error, Debug)]
pub enum DataError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("malformed letter table line '{0}'")]
    BadLine(String),
    #[error("malformed percentage '{0}'")]
    BadPercent(String, #[source] ParseFloatError),
    #[error("letter weight '{0}' is not a positive number")]
    BadWeight(String),
    #[error("letter table has no usable rows")]
    Empty,
}
