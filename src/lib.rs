//! Wordle Autosolver
//!
//! A constraint-narrowing Wordle solver: each round's feedback tightens a
//! set of letter constraints, the dictionary is filtered down to the words
//! that still fit, and the next guess is the best survivor by a
//! letter-frequency heuristic.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_autosolver::core::{GameStatus, Word};
//! use wordle_autosolver::solver::{Solver, SolverConfig, TargetOracle};
//! use wordle_autosolver::wordlists::{DICTIONARY, loader::words_from_slice};
//!
//! let dictionary = words_from_slice(DICTIONARY);
//! let solver = Solver::from_dictionary(&dictionary, SolverConfig::default());
//!
//! let mut session = solver.new_session();
//! let mut oracle = TargetOracle::new(Word::new("duvet").unwrap());
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let status = session.play(&mut oracle, &mut rng).unwrap();
//! assert!(matches!(status, GameStatus::Won | GameStatus::Lost));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
