//! Formatting utilities for terminal output

use crate::core::{Feedback, PositionOutcome, Word};
use colored::Colorize;

/// Format feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.to_emoji()
}

/// Render a guess as coloured tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.outcomes())
        .map(|(&ch, outcome)| {
            let tile = format!(" {} ", char::from(ch).to_ascii_uppercase());
            match outcome {
                PositionOutcome::Correct => tile.black().on_green().to_string(),
                PositionOutcome::Present => tile.black().on_yellow().to_string(),
                PositionOutcome::Absent => tile.white().on_bright_black().to_string(),
                PositionOutcome::Pending => tile.dimmed().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter weight as a bar against the heaviest weight
#[must_use]
pub fn weight_bar(weight: f64, max_weight: f64, width: usize) -> String {
    create_progress_bar(weight, max_weight, width)
}
