//! Wordle Search - CLI
//!
//! Play Wordle in the terminal, or watch BFS, DFS, UCS and A* solve it.

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use wordle_search::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark_suite, run_play, solve_word},
    core::Word,
    game::GameState,
    output::{print_benchmark_results, print_solve_result},
    solver::StrategyKind,
    wordlists::loader::load_or_fallback,
};

#[derive(Parser)]
#[command(
    name = "wordle_search",
    about = "Wordle with breadth-first, depth-first, uniform-cost and A* solvers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: astar (default), ucs, bfs, dfs
    #[arg(short, long, global = true, default_value = "astar")]
    strategy: String,

    /// Path to a word list file (one word per line); the built-in list is used otherwise
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Let the strategy solve one game
    Solve {
        /// Secret word; chosen at random when omitted
        word: Option<String>,

        /// Show candidate counts for each turn
        #[arg(short, long)]
        detail: bool,
    },

    /// Compare strategy performance over random games
    Benchmark {
        /// Number of games per strategy
        #[arg(short = 'n', long, default_value = "10")]
        games: usize,

        /// Benchmark every strategy instead of only the selected one
        #[arg(short, long)]
        all: bool,

        /// Seed for secret selection (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Colored stderr logger behind the `log` facade
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => "ERROR".red().bold(),
            Level::Warn => "WARN ".yellow().bold(),
            Level::Info => "INFO ".green(),
            Level::Debug => "DEBUG".blue(),
            Level::Trace => "TRACE".dimmed(),
        };
        eprintln!("{level} {}", record.args());
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    log::set_logger(&LOGGER).map_err(|e| anyhow!("failed to install logger: {e}"))?;
    log::set_max_level(level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let kind = StrategyKind::from_name(&cli.strategy).ok_or_else(|| {
        anyhow!(
            "unknown strategy '{}' (expected one of: astar, ucs, bfs, dfs)",
            cli.strategy
        )
    })?;

    let pool: Arc<[Word]> = load_or_fallback(cli.wordlist.as_deref()).into();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(kind, pool),
        Commands::Solve { word, detail } => run_solve_command(kind, word, detail, &pool),
        Commands::Benchmark { games, all, seed } => {
            run_benchmark_command(kind, games, all, seed, &pool)
        }
    }
}

fn run_play_command(kind: StrategyKind, pool: Arc<[Word]>) -> Result<()> {
    let mut rng = rand::rng();
    let state = GameState::with_rng(pool, &mut rng)?;
    let stdin = io::stdin();

    let totals = run_play(state, kind, &mut rng, stdin.lock(), io::stdout())?;
    if totals.games > 0 {
        println!("\nYou won {} of {} games.", totals.wins, totals.games);
    }
    Ok(())
}

fn run_solve_command(
    kind: StrategyKind,
    word: Option<String>,
    detail: bool,
    pool: &Arc<[Word]>,
) -> Result<()> {
    let config = SolveConfig::new(kind, word);
    let result = solve_word(config, pool)?;

    print_solve_result(&result, detail);
    Ok(())
}

fn run_benchmark_command(
    kind: StrategyKind,
    games: usize,
    all: bool,
    seed: Option<u64>,
    pool: &Arc<[Word]>,
) -> Result<()> {
    let kinds: Vec<StrategyKind> = if all {
        StrategyKind::ALL.to_vec()
    } else {
        vec![kind]
    };
    let seed = seed.unwrap_or_else(rand::random);

    println!(
        "Running {games} games per strategy over {} words (seed {seed})...",
        pool.len()
    );

    let results = run_benchmark_suite(&kinds, pool, BenchmarkConfig::new(games, seed))
        .context("benchmark failed")?;
    print_benchmark_results(&results);
    Ok(())
}
