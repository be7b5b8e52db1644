//! Anagram Solver - CLI
//!
//! Finds anagrams and fills in missing letters using two pre-sorted
//! dictionaries, either interactively or as one-shot lookups.

use anagram_solver::{
    commands::{run_benchmark, run_groups, run_lookup, run_simple, sample_queries},
    config::{Config, DEFAULT_ANAGRAM_FILE, DEFAULT_LENGTH_FILE, DEFAULT_MAX_WORD_LEN},
    output::{print_benchmark_result, print_groups_report, print_lookup_report},
    solver::Solver,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "anagram_solver",
    about = "Anagram and missing-letter solver over sorted dictionaries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Anagram dictionary: `<sorted letters><word>` per line, sorted
    #[arg(short, long, global = true, default_value = DEFAULT_ANAGRAM_FILE)]
    anagrams: PathBuf,

    /// Length dictionary: one word per line, sorted by length
    #[arg(short, long, global = true, default_value = DEFAULT_LENGTH_FILE)]
    lengths: PathBuf,

    /// Longest accepted query word
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_WORD_LEN)]
    max_len: usize,

    /// Check that both dictionaries are correctly sorted after loading
    #[arg(long, global = true)]
    verify_order: bool,

    /// Log more (-v info, -vv debug, -vvv trace), written to stderr
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt loop reading one word at a time (default)
    Simple {
        /// Enable diagnostic commands such as `:groups`
        #[arg(long)]
        debug: bool,
    },

    /// Full-screen interactive mode
    Play {
        /// Enable diagnostic commands such as `:groups`
        #[arg(long)]
        debug: bool,
    },

    /// Look up words or patterns and exit
    Lookup {
        /// Words (anagrams) or patterns with `.` for unknown letters
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List anagram groups in the dictionary
    Groups {
        /// Smallest group to list
        #[arg(long, default_value = "2")]
        min_size: usize,

        /// Show at most this many groups
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Time random queries against the dictionaries
    Benchmark {
        /// Number of dictionary words to sample (two queries each)
        #[arg(short = 'n', long, default_value = "500")]
        count: usize,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::new(cli.anagrams, cli.lengths)
        .with_max_word_len(cli.max_len)
        .with_verify_order(cli.verify_order);
    let solver = load_solver(&config)?;

    // Default to the prompt loop if no command given
    let command = cli.command.unwrap_or(Commands::Simple { debug: false });

    match command {
        Commands::Simple { debug } => {
            run_simple(&solver, debug).context("prompt loop failed")?;
            Ok(())
        }
        Commands::Play { debug } => run_play_command(&solver, debug),
        Commands::Lookup { words } => {
            let report = run_lookup(&solver, &words);
            print_lookup_report(&report);
            Ok(())
        }
        Commands::Groups { min_size, limit } => {
            let report = run_groups(&solver, min_size, limit);
            print_groups_report(&report);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&solver, count, seed);
            Ok(())
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Load both dictionaries behind a spinner
fn load_solver(config: &Config) -> Result<Solver> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Loading dictionaries...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let solver = Solver::from_config(config);
    spinner.finish_and_clear();

    solver.context("cannot start without both dictionaries")
}

fn run_benchmark_command(solver: &Solver, count: usize, seed: Option<u64>) {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let queries = sample_queries(solver, count, &mut rng);

    println!("Running benchmark on {} queries...", queries.len());
    let result = run_benchmark(solver, &queries, true);
    print_benchmark_result(&result);
}

fn run_play_command(solver: &Solver, debug: bool) -> Result<()> {
    use anagram_solver::interactive::{App, run_tui};

    let app = App::new(solver, debug);
    run_tui(app)
}
