//! Distle - CLI
//!
//! Plays, benchmarks and explains the Distle word game, where each guess is
//! answered with its edit distance to the hidden word and the edits needed.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use distle::{
    commands::{
        BenchmarkConfig, GameConfig, analyze_pair, play_game, run_benchmark, run_simple,
    },
    core::Word,
    guesser::{Guesser, StrategyType},
    logging::{LogConfig, LogFormat, init_logging},
    output::{print_analysis_result, print_benchmark_result, print_game_result},
    wordlists::{DICTIONARY, load_from_file, words_from_slice},
};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "distle",
    about = "Distle guesser using edit-distance feedback and information-theoretic strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: adaptive (default), entropy, minimax, random
    #[arg(short, long, global = true, default_value = "adaptive")]
    strategy: String,

    /// Dictionary: 'embedded' (default) or path to a word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for random choices (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value = "6")]
    max_guesses: usize,

    /// Lowercase the dictionary and every word given on the command line
    #[arg(short = 'i', long, global = true)]
    ignore_case: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log line format: pretty (default) or compact
    #[arg(long, global = true, default_value = "pretty")]
    log_format: LogFormat,

    /// Prefix log lines with timestamps
    #[arg(long, global = true)]
    log_timestamps: bool,

    /// Disable coloured output and log styling
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: think of a word and answer the guesser (default)
    Simple,

    /// Let the guesser play against a known target word
    Solve {
        /// The target word
        word: String,

        /// Show candidate counts per turn
        #[arg(long)]
        details: bool,
    },

    /// Show the distance table, script and information value of a guess
    Analyze {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },

    /// Benchmark a strategy over random dictionary words
    Benchmark {
        /// Number of random target words
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn load_dictionary(wordlist: &str, ignore_case: bool) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(DICTIONARY),
        path => load_from_file(path)?,
    };

    if ignore_case {
        Ok(words.iter().map(Word::to_lowercase).collect())
    } else {
        Ok(words)
    }
}

fn normalise(word: String, ignore_case: bool) -> String {
    if ignore_case { word.to_lowercase() } else { word }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_format(cli.log_format)
        .with_timestamps(cli.log_timestamps)
        .with_ansi(!cli.no_color);
    init_logging(&log_config).context("failed to initialise logging")?;

    let dictionary = load_dictionary(&cli.wordlist, cli.ignore_case)?;
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, words = dictionary.len(), strategy = %cli.strategy, "starting");

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => {
            let strategy = StrategyType::from_name(&cli.strategy, StdRng::seed_from_u64(seed));
            let mut guesser = Guesser::new(strategy);
            run_simple(&mut guesser, &dictionary, cli.max_guesses)?;
        }
        Commands::Solve { word, details } => {
            let strategy = StrategyType::from_name(&cli.strategy, StdRng::seed_from_u64(seed));
            let mut guesser = Guesser::new(strategy);
            let config = GameConfig {
                target: normalise(word, cli.ignore_case),
                max_guesses: cli.max_guesses,
            };

            let result = play_game(&mut guesser, &dictionary, config)?;
            print_game_result(&result, details);
        }
        Commands::Analyze { guess, target } => {
            let guess = normalise(guess, cli.ignore_case);
            let target = normalise(target, cli.ignore_case);
            let result = analyze_pair(&guess, &target, &dictionary)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { count } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let targets: Vec<Word> = dictionary.choose_multiple(&mut rng, count).cloned().collect();

            println!(
                "Running benchmark on {} random words (seed {seed})...",
                targets.len()
            );

            let config = BenchmarkConfig {
                strategy: cli.strategy,
                seed,
                max_guesses: cli.max_guesses,
                show_progress: true,
            };
            let result = run_benchmark(&targets, &dictionary, &config);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
