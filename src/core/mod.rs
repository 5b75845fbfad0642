//! Core domain types for the solver
//!
//! Words, templates, feedback and the error types shared by every layer.
//! Nothing here knows how guesses are chosen.

mod error;
mod feedback;
mod status;
mod template;
mod word;

pub use error::{DataError, SolverError, WordError};
pub use feedback::{Feedback, PositionOutcome, TileState};
pub use status::GameStatus;
pub use template::Template;
pub use word::{WORD_LENGTH, Word};
