//! Simple interactive CLI mode
//!
//! The solver suggests a guess, the user plays it in their game and relays
//! the colours back.

use crate::core::{Feedback, GameStatus, TileState, WORD_LENGTH};
use crate::output::formatters::colored_guess;
use crate::solver::{GameSession, Solver};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Feedback(Feedback),
    /// The game refused the word
    Rejected,
    Quit,
}

/// Parse a reply
///
/// Accepts `G/Y/-` strings (or the coloured squares), five tile state names
/// (`correct present absent absent absent`), `win`, `r`/`reject` and `q`/`quit`.
#[must_use]
pub fn parse_reply(input: &str) -> Option<Reply> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "q" | "quit" | "exit" => return Some(Reply::Quit),
        "r" | "reject" | "rejected" | "invalid" => return Some(Reply::Rejected),
        "win" | "solved" | "correct" => return Some(Reply::Feedback(Feedback::SOLVED)),
        _ => {}
    }

    let feedback = input.parse::<Feedback>().ok().or_else(|| {
        let tiles: Vec<TileState> = input
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;
        let tiles: [TileState; WORD_LENGTH] = tiles.try_into().ok()?;
        Some(Feedback::from_tiles(&tiles))
    })?;

    // a half-revealed row is not an answer
    feedback.is_settled().then_some(Reply::Feedback(feedback))
}

/// Run one interactive game
///
/// # Errors
///
/// Returns an error on I/O failure, or when the solver cannot produce a guess
/// (usually because the relayed feedback was inconsistent).
pub fn run_simple<I, O, R>(
    solver: &Solver<'_>,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<GameStatus>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    writeln!(output, "Wordle Solver - Interactive Mode")?;
    writeln!(output, "After each guess, enter the feedback:")?;
    writeln!(
        output,
        "  G for green, Y for yellow, - for grey (e.g. -Y-GY)"
    )?;
    writeln!(output, "  'r' if the game rejected the word, 'q' to quit")?;

    let mut session = solver.new_session();

    while !session.status().is_terminal() {
        let guess = session.next_guess(rng)?;
        writeln!(
            output,
            "\nTurn {}: {} candidates remaining",
            session.attempts() + 1,
            session.candidates().len()
        )?;
        writeln!(output, "Suggested guess: {}", guess.text().to_uppercase())?;

        let reply = loop {
            write!(output, "Feedback: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break Reply::Quit;
            }
            match parse_reply(&line) {
                Some(reply) => break reply,
                None => writeln!(output, "Invalid feedback! Use G/Y/-, e.g. GY--G")?,
            }
        };

        match reply {
            Reply::Quit => {
                session.abort();
            }
            Reply::Rejected => {
                session.reject(&guess)?;
            }
            Reply::Feedback(feedback) => {
                session.record(&guess, feedback)?;
                writeln!(output, "{}", colored_guess(&guess, &feedback))?;
            }
        }
    }

    print_outcome(&session, output)?;
    Ok(session.status())
}

fn print_outcome<O: Write>(session: &GameSession<'_>, output: &mut O) -> Result<()> {
    match session.status() {
        GameStatus::Won => writeln!(output, "\nSolved in {} guesses!", session.attempts())?,
        GameStatus::Lost => writeln!(output, "\nOut of guesses.")?,
        GameStatus::Aborted | GameStatus::Active => writeln!(output, "\nGame abandoned.")?,
    }
    Ok(())
}
