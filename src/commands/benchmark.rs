//! Benchmark command
//!
//! Plays many independent games per strategy and aggregates time, node
//! expansions, guesses and wins.

use crate::config::MAX_ATTEMPTS;
use crate::core::Word;
use crate::game::{GameError, GameState};
use crate::solver::{Solver, StrategyKind, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Benchmark settings shared by every strategy in a run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub games: usize,
    pub max_attempts: usize,
    /// Seed for secret selection; game `i` uses `seed + i`, so every strategy
    /// faces the same secrets
    pub seed: u64,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            max_attempts: MAX_ATTEMPTS,
            seed,
        }
    }
}

/// Measurements from one game
#[derive(Debug, Clone, Copy)]
pub struct GameMeasurement {
    pub duration: Duration,
    pub nodes_expanded: usize,
    pub guesses: usize,
    pub won: bool,
}

/// Aggregated benchmark result for one strategy
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: StrategyKind,
    pub games: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub avg_time_us: f64,
    pub max_time_us: f64,
    pub avg_nodes: f64,
    pub max_nodes: usize,
    pub avg_guesses: f64,
    pub max_guesses: usize,
    /// Guess count -> number of games won with it
    pub distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn from_measurements(
        strategy: StrategyKind,
        measurements: &[GameMeasurement],
        total_time: Duration,
    ) -> Self {
        let games = measurements.len();
        let mean = |sum: f64| if games == 0 { 0.0 } else { sum / games as f64 };
        let micros = |m: &GameMeasurement| m.duration.as_secs_f64() * 1_000_000.0;

        let wins = measurements.iter().filter(|m| m.won).count();
        let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
        for m in measurements.iter().filter(|m| m.won) {
            *distribution.entry(m.guesses).or_insert(0) += 1;
        }

        Self {
            strategy,
            games,
            wins,
            win_rate: mean(wins as f64) * 100.0,
            avg_time_us: mean(measurements.iter().map(micros).sum()),
            max_time_us: measurements.iter().map(micros).fold(0.0, f64::max),
            avg_nodes: mean(measurements.iter().map(|m| m.nodes_expanded as f64).sum()),
            max_nodes: measurements
                .iter()
                .map(|m| m.nodes_expanded)
                .max()
                .unwrap_or(0),
            avg_guesses: mean(measurements.iter().map(|m| m.guesses as f64).sum()),
            max_guesses: measurements.iter().map(|m| m.guesses).max().unwrap_or(0),
            distribution,
            total_time,
        }
    }
}

/// Play one timed game with a fresh game state and strategy
fn measure_game(
    kind: StrategyKind,
    pool: &Arc<[Word]>,
    max_attempts: usize,
    seed: u64,
) -> Result<GameMeasurement, GameError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::with_rng(Arc::clone(pool), &mut rng)?;

    let start = Instant::now();
    let strategy = StrategyType::new(kind, &game);
    let record = Solver::new(strategy)
        .with_max_attempts(max_attempts)
        .play(&mut game);
    let duration = start.elapsed();

    Ok(GameMeasurement {
        duration,
        nodes_expanded: record.nodes_expanded,
        guesses: record.attempts(),
        won: record.won(),
    })
}

/// Benchmark one strategy
///
/// Games run in parallel; each owns its own game state, candidate set and
/// counters, and only the read-only pool is shared.
///
/// # Errors
///
/// Returns `GameError::EmptyPool` if there are games to play but no words.
pub fn run_benchmark(
    kind: StrategyKind,
    pool: &Arc<[Word]>,
    config: BenchmarkConfig,
    progress: &ProgressBar,
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();

    let measurements = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let seed = config.seed.wrapping_add(i as u64);
            let measurement = measure_game(kind, pool, config.max_attempts, seed);
            progress.inc(1);
            measurement
        })
        .collect::<Result<Vec<_>, _>>()?;

    let result = BenchmarkResult::from_measurements(kind, &measurements, start.elapsed());
    info!(
        "{}: {}/{} wins, {:.2} avg guesses",
        kind.name(),
        result.wins,
        result.games,
        result.avg_guesses
    );
    Ok(result)
}

/// Benchmark several strategies against the same secrets, with a progress bar each
///
/// # Errors
///
/// Returns `GameError::EmptyPool` if there are games to play but no words.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_benchmark_suite(
    kinds: &[StrategyKind],
    pool: &Arc<[Word]>,
    config: BenchmarkConfig,
) -> Result<Vec<BenchmarkResult>, GameError> {
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:>6} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        .expect("valid progress template")
        .progress_chars("█▓▒░");

    kinds
        .iter()
        .map(|&kind| {
            let pb = ProgressBar::new(config.games as u64)
                .with_style(style.clone())
                .with_prefix(kind.name());
            let result = run_benchmark(kind, pool, config, &pb);
            pb.finish();
            result
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::FALLBACK;
    use crate::wordlists::loader::words_from_slice;

    fn pool() -> Arc<[Word]> {
        words_from_slice(FALLBACK).into()
    }

    fn bench(kind: StrategyKind, games: usize) -> BenchmarkResult {
        let config = BenchmarkConfig::new(games, 42);
        let result = run_benchmark(kind, &pool(), config, &ProgressBar::hidden());
        result.unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let result = bench(StrategyKind::AStar, 10);

        assert_eq!(result.games, 10);
        assert!(result.avg_guesses >= 1.0);
        assert!(result.max_guesses <= MAX_ATTEMPTS);
        assert!((0.0..=100.0).contains(&result.win_rate));
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let result = bench(StrategyKind::UniformCost, 12);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
        for &guess_count in result.distribution.keys() {
            assert!((1..=MAX_ATTEMPTS).contains(&guess_count));
        }
    }

    #[test]
    fn nodes_match_guesses() {
        // Every guess is exactly one node expansion
        let result = bench(StrategyKind::BreadthFirst, 8);
        assert!((result.avg_nodes - result.avg_guesses).abs() < f64::EPSILON);
        assert_eq!(result.max_nodes, result.max_guesses);
    }

    #[test]
    fn same_seed_same_results() {
        let a = bench(StrategyKind::DepthFirst, 6);
        let b = bench(StrategyKind::DepthFirst, 6);
        assert_eq!(a.wins, b.wins);
        assert!((a.avg_guesses - b.avg_guesses).abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_zero_games() {
        let result = bench(StrategyKind::AStar, 0);

        assert_eq!(result.games, 0);
        assert_eq!(result.wins, 0);
        assert!(result.win_rate.abs() < f64::EPSILON);
        assert_eq!(result.max_guesses, 0);
    }

    #[test]
    fn benchmark_empty_pool_errors() {
        let empty: Arc<[Word]> = Vec::new().into();
        let result = run_benchmark(
            StrategyKind::AStar,
            &empty,
            BenchmarkConfig::new(3, 1),
            &ProgressBar::hidden(),
        );
        assert!(matches!(result, Err(GameError::EmptyPool)));
    }

    #[test]
    fn from_measurements_aggregates() {
        let m = |micros: u64, guesses: usize, won: bool| GameMeasurement {
            duration: Duration::from_micros(micros),
            nodes_expanded: guesses,
            guesses,
            won,
        };
        let result = BenchmarkResult::from_measurements(
            StrategyKind::DepthFirst,
            &[
                m(100, 3, true),
                m(300, 6, false),
                m(200, 3, true),
                m(400, 2, true),
            ],
            Duration::from_millis(1),
        );

        assert_eq!(result.wins, 3);
        assert!((result.win_rate - 75.0).abs() < 1e-9);
        assert!((result.avg_time_us - 250.0).abs() < 1e-6);
        assert!((result.max_time_us - 400.0).abs() < 1e-6);
        assert!((result.avg_guesses - 3.5).abs() < 1e-9);
        assert_eq!(result.max_guesses, 6);
        assert_eq!(result.distribution.get(&3), Some(&2));
        assert_eq!(result.distribution.get(&6), None);
    }
}
