//! Wordle Autosolver - CLI
//!
//! Finds words for a revealed pattern, solves known targets, benchmarks the
//! solver, or coaches an interactive game.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use wordle_autosolver::{
    commands::{FindConfig, analyze_word, find_words, run_benchmark, run_simple, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_find_result, print_solve_result},
    solver::{
        DictionaryOracle, LetterWeights, MAX_ATTEMPTS, Reduction, ScoringConfig, Selection,
        Solver, SolverConfig, WordOracle,
    },
    wordlists::{DICTIONARY, LETTER_FREQUENCY, loader},
};

const FIND_DISCLAIMER: &str = "\
Performance: every ordering of LETTERS is tried in the blanks, so the work
grows as n!/(n-k)! for n letters and k blanks. Ten letters into five blanks
is 30240 candidates. With --oracle each candidate is a separate lookup.";

#[derive(Parser)]
#[command(
    name = "wordle_autosolver",
    about = "Constraint-narrowing Wordle solver with letter-frequency guess scoring",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file (repeatable; lists are merged). Default: embedded dictionary
    #[arg(short = 'w', long, global = true)]
    wordlist: Vec<PathBuf>,

    /// Letter frequency table (`letter<TAB>percent`). Default: counted from the dictionary
    #[arg(short = 'f', long, global = true)]
    frequency: Option<PathBuf>,

    /// Use the embedded English letter table instead of counting the dictionary
    #[arg(long, global = true, conflicts_with = "frequency")]
    english: bool,

    /// Opening word, or 'none' to score the first guess
    #[arg(short, long, global = true, default_value = "adieu")]
    opening: String,

    /// How letter weights combine: sum or product
    #[arg(long, global = true, default_value = "sum")]
    reduction: Reduction,

    /// Repeat discount exponent k in weight / count^k (at least 1)
    #[arg(long, global = true, default_value_t = 2)]
    exponent: i32,

    /// With '--opening none', pick the first guess at random among words
    /// scoring within DELTA of the best
    #[arg(long, global = true, value_name = "DELTA")]
    opening_delta: Option<f64>,

    /// Guess selection: highest, nearest-mean, or mixed (highest first, then nearest-mean)
    #[arg(long, global = true, default_value = "highest")]
    selection: Selection,

    /// Prefer rare letters
    #[arg(long, global = true)]
    invert: bool,

    /// RNG seed for tie-breaking. Default: random
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Attempts per game
    #[arg(long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List words matching a pattern of revealed letters
    #[command(after_help = FIND_DISCLAIMER)]
    Find {
        /// Revealed letters with '_' for blanks, e.g. __e__
        pattern: String,

        /// Letters that may fill the blanks, e.g. abdknpo
        letters: String,

        /// Validate candidates one by one instead of by dictionary intersection
        #[arg(long)]
        oracle: bool,
    },

    /// Interactive mode: relay the game's feedback to the solver
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Score a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of best openers to list
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of dictionary words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Test every dictionary word
        #[arg(long, conflicts_with = "count")]
        all: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;
    let weights = load_weights(&cli, &dictionary)?;
    let config = solver_config(&cli)?;
    let solver = Solver::new(&dictionary, &weights, config);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Find {
            pattern,
            letters,
            oracle,
        } => {
            let config = FindConfig {
                pattern,
                letters,
                verbose: cli.verbose,
            };
            let lookup = oracle.then(|| DictionaryOracle::new(&dictionary));
            let result = find_words(
                &config,
                &dictionary,
                lookup.as_ref().map(|o| o as &dyn WordOracle),
            )?;
            print_find_result(&result);
        }
        Commands::Simple => {
            let stdin = io::stdin();
            run_simple(&solver, &mut stdin.lock(), &mut io::stdout(), &mut rng)?;
        }
        Commands::Solve { word } => {
            let result = solve_word(&solver, &word, &mut rng)
                .with_context(|| format!("solving '{word}'"))?;
            print_solve_result(&result, cli.verbose);
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&solver, &word, top)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { count, all } => {
            let targets = if all {
                &dictionary[..]
            } else {
                &dictionary[..count.min(dictionary.len())]
            };
            println!("Running benchmark on {} words...", targets.len());
            let seed = cli.seed.unwrap_or_default();
            let result = run_benchmark(&solver, targets, seed, true);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// Load and merge the `-w` lists, or fall back to the embedded dictionary
fn load_dictionary(paths: &[PathBuf]) -> Result<Vec<Word>> {
    let dictionary = if paths.is_empty() {
        loader::words_from_slice(DICTIONARY)
    } else {
        loader::load_merged(paths).context("loading word lists")?
    };

    if dictionary.is_empty() {
        bail!("the dictionary has no five-letter words");
    }
    log::debug!("dictionary: {} words", dictionary.len());
    Ok(dictionary)
}

fn load_weights(cli: &Cli, dictionary: &[Word]) -> Result<LetterWeights> {
    if let Some(path) = &cli.frequency {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return LetterWeights::parse_table(&text)
            .with_context(|| format!("parsing {}", path.display()));
    }
    if cli.english {
        return Ok(LetterWeights::parse_table(LETTER_FREQUENCY)?);
    }
    Ok(LetterWeights::from_words(dictionary))
}

fn solver_config(cli: &Cli) -> Result<SolverConfig> {
    if cli.max_attempts == 0 {
        bail!("--max-attempts must be at least 1");
    }
    if cli.exponent < 1 {
        bail!("--exponent must be at least 1, got {}", cli.exponent);
    }
    if let Some(delta) = cli.opening_delta
        && !(delta.is_finite() && delta >= 0.0)
    {
        bail!("--opening-delta must be a non-negative number, got {delta}");
    }

    let opening_word = if cli.opening.eq_ignore_ascii_case("none") {
        None
    } else {
        let word = Word::new(cli.opening.as_str()).context("invalid --opening word")?;
        Some(word)
    };

    Ok(SolverConfig {
        scoring: ScoringConfig {
            reduction: cli.reduction,
            repeat_exponent: cli.exponent,
            opening_word,
            opening_delta: cli.opening_delta,
            selection: cli.selection,
            invert_weights: cli.invert,
            ..ScoringConfig::default()
        },
        max_attempts: cli.max_attempts,
        ..SolverConfig::default()
    })
}
