//! Wordle solving algorithms
//!
//! Constraint tracking, candidate generation and filtering, guess scoring,
//! and the per-game session that ties them to a feedback oracle.

pub mod constraint;
mod engine;
pub mod filter;
pub mod frequency;
pub mod generator;
pub mod oracle;
pub mod scorer;
mod session;

pub use constraint::{ConstraintState, LetterStatus, Positions};
pub use engine::{MAX_ATTEMPTS, Solver, SolverConfig};
pub use filter::{filter, matches};
pub use frequency::{DEFAULT_WEIGHT, LetterWeights};
pub use generator::{CandidateSource, GenerateOptions, generate, permutation_count};
pub use oracle::{
    DictionaryOracle, FeedbackOracle, PollOutcome, RetryPolicy, Submission, TargetOracle,
    WordOracle, poll_feedback,
};
pub use scorer::{
    FitWeights, OPENING_WORD, Reduction, ScoringConfig, Selection, best_candidate,
    fit_term, frequency_term, opening_band, rank, score, select_guess, tie_set,
};
pub use session::{GameSession, RoundReport};
