//! Benchmark command
//!
//! Plays a fresh game for each target word and aggregates the outcomes.

use crate::core::{GameStatus, Word};
use crate::solver::{Solver, TargetOracle};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Outcome of one benchmark game
pub struct GameOutcome {
    pub target: Word,
    pub status: GameStatus,
    pub guesses: usize,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    pub aborted: usize,
    /// Mean guesses over won games
    pub average_guesses: f64,
    /// Won games by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    /// Targets that were not solved
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.won as f64 / self.total_words as f64 * 100.0
        }
    }
}

/// Play every target once
///
/// Games run in parallel, each with its own session and an RNG seeded from
/// `seed` and the target's index, so results do not depend on scheduling.
pub fn run_benchmark(
    solver: &Solver<'_>,
    targets: &[Word],
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let outcomes: Vec<GameOutcome> = targets
        .par_iter()
        .enumerate()
        .map(|(i, target)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let outcome = play_one(solver, target, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Complete!");

    summarize(outcomes, start.elapsed())
}

fn play_one(solver: &Solver<'_>, target: &Word, rng: &mut StdRng) -> GameOutcome {
    let mut session = solver.new_session();
    let mut oracle = TargetOracle::new(target.clone());
    let status = match session.play(&mut oracle, rng) {
        Ok(status) => status,
        Err(err) => {
            log::warn!("{target}: {err}");
            session.abort();
            session.status()
        }
    };

    GameOutcome {
        target: target.clone(),
        status,
        guesses: session.attempts(),
    }
}

fn summarize(outcomes: Vec<GameOutcome>, duration: Duration) -> BenchmarkResult {
    let total_words = outcomes.len();
    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    let (mut won, mut lost, mut aborted, mut won_guesses) = (0, 0, 0, 0);

    for outcome in outcomes {
        match outcome.status {
            GameStatus::Won => {
                won += 1;
                won_guesses += outcome.guesses;
                *distribution.entry(outcome.guesses).or_insert(0) += 1;
            }
            GameStatus::Lost => {
                lost += 1;
                failures.push(outcome.target);
            }
            GameStatus::Aborted | GameStatus::Active => {
                aborted += 1;
                failures.push(outcome.target);
            }
        }
    }

    let secs = duration.as_secs_f64();
    BenchmarkResult {
        total_words,
        won,
        lost,
        aborted,
        average_guesses: if won > 0 {
            won_guesses as f64 / won as f64
        } else {
            0.0
        },
        distribution,
        failures,
        duration,
        words_per_second: if secs > 0.0 {
            total_words as f64 / secs
        } else {
            0.0
        },
    }
}
