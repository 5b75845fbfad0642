//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, feedback_to_emoji, weight_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, FindResult, SolveResult};
use crate::solver::MAX_ATTEMPTS;
use colored::Colorize;

/// Print the words found for a pattern
pub fn print_find_result(result: &FindResult) {
    println!(
        "Pattern {} with letters {} ({} fillings)",
        result.template.to_string().bright_yellow().bold(),
        result.letters.bright_white(),
        result.searched
    );

    if result.words.is_empty() {
        println!("{}", "No matching words".red());
        return;
    }
    for word in &result.words {
        println!("  {word}");
    }
    println!(
        "{}",
        format!("{} word(s) found", result.words.len()).green()
    );
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&round.guess, &round.feedback),
            feedback_to_emoji(&round.feedback)
        );

        if verbose {
            println!("  Score:      {:.2}", round.score);
            println!(
                "  Candidates: {} → {}",
                round.candidates_before, round.candidates_after
            );
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Failed to solve in {} guesses ({})",
                result.rounds.len(),
                result.status
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPENING ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Frequency score: {}",
        format!("{:.3}", result.frequency_score).bright_yellow()
    );
    match result.rank {
        Some(rank) => println!("   Rank:            {rank} of {}", result.total_words),
        None => println!("   Rank:            {}", "not in dictionary".red()),
    }

    let max_weight = result
        .letters
        .iter()
        .map(|l| l.weight)
        .fold(0.0_f64, f64::max);
    println!("\n   Letters:");
    for letter in &result.letters {
        println!(
            "   {} x{} [{}] {:.2}",
            letter.letter.to_ascii_uppercase(),
            letter.occurrences,
            weight_bar(letter.weight, max_weight, 20).green(),
            letter.weight
        );
    }

    if !result.top.is_empty() {
        println!("\n   Best openers:");
        for (i, (word, score)) in result.top.iter().enumerate() {
            println!("   {:2}. {} {score:.3}", i + 1, word.text().to_uppercase());
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Lost:             {}", result.lost.to_string().yellow());
    println!("   Aborted:          {}", result.aborted.to_string().red());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_ATTEMPTS {
        let count = result.distribution.get(&guess_count).copied().unwrap_or(0);
        let pct = if result.total_words > 0 {
            count as f64 / result.total_words as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n❌ {}", "Unsolved:".red().bold());
        for chunk in result.failures.chunks(10) {
            let line: Vec<&str> = chunk.iter().map(|w| w.text()).collect();
            println!("   {}", line.join(" "));
        }
    }
}
