//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod find;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, LetterBreakdown, analyze_word};
pub use benchmark::{BenchmarkResult, GameOutcome, run_benchmark};
pub use find::{FindConfig, FindResult, find_words};
pub use simple::{Reply, parse_reply, run_simple};
pub use solve::{SolveResult, solve_word};
