//! Word solving command
//!
//! Plays one game against a known target and returns the rounds.

use crate::core::{GameStatus, SolverError, Word};
use crate::solver::{RoundReport, Solver, TargetOracle};
use rand::Rng;

/// Result of solving a word
pub struct SolveResult {
    pub target: Word,
    pub status: GameStatus,
    pub rounds: Vec<RoundReport>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// Solve `target` with a fresh session
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The candidates run out, e.g. because the target is not in the dictionary
pub fn solve_word<R>(
    solver: &Solver<'_>,
    target: &str,
    rng: &mut R,
) -> Result<SolveResult, SolverError>
where
    R: Rng + ?Sized,
{
    let target = Word::new(target)?;
    let mut oracle = TargetOracle::new(target.clone());
    let mut session = solver.new_session();
    let status = session.play(&mut oracle, rng)?;

    Ok(SolveResult {
        target,
        status,
        rounds: session.history().to_vec(),
    })
}
