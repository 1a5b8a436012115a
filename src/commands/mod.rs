//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, run_benchmark_suite};
pub use play::{PlayStats, run_play};
pub use solve::{SolveConfig, SolveError, SolveResult, solve_word};
