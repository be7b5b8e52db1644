//! Benchmark command
//!
//! Times a batch of random queries against the loaded dictionaries. Queries
//! run in parallel over the shared, read-only solver.

use crate::core::WILDCARD;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub total_matches: usize,
    pub queries_with_matches: usize,
    pub max_matches: usize,
    /// Match count -> number of queries returning that many matches
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn average_matches(&self) -> f64 {
        if self.total_queries == 0 {
            0.0
        } else {
            self.total_matches as f64 / self.total_queries as f64
        }
    }
}

/// Pick `count` dictionary words and derive one query of each kind from each
///
/// Every sampled word is used as-is (anagram query) and with one random
/// letter replaced by the wildcard (missing-letter query).
pub fn sample_queries<R: Rng + ?Sized>(solver: &Solver, count: usize, rng: &mut R) -> Vec<String> {
    let sampled: Vec<&str> = solver
        .lengths()
        .entries()
        .choose_multiple(rng, count)
        .map(|entry| entry.word.as_str())
        .collect();

    let mut queries = Vec::with_capacity(sampled.len() * 2);
    for word in sampled {
        queries.push(word.to_string());

        let mut letters: Vec<char> = word.chars().collect();
        if !letters.is_empty() {
            let hole = rng.random_range(0..letters.len());
            letters[hole] = WILDCARD;
            queries.push(letters.into_iter().collect());
        }
    }

    queries
}

/// Run every query and collect timing and match statistics
///
/// Rejected queries count as zero matches.
#[must_use]
pub fn run_benchmark(solver: &Solver, queries: &[String], show_progress: bool) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(queries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let counts: Vec<usize> = queries
        .par_iter()
        .map(|query| {
            let found = solver.lookup(query).map_or(0, |outcome| outcome.matches.len());
            pb.inc(1);
            found
        })
        .collect();
    let duration = start.elapsed();
    pb.finish_and_clear();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for &found in &counts {
        *distribution.entry(found).or_insert(0) += 1;
    }

    let total_queries = counts.len();
    let seconds = duration.as_secs_f64();
    let result = BenchmarkResult {
        total_queries,
        total_matches: counts.iter().sum(),
        queries_with_matches: counts.iter().filter(|&&found| found > 0).count(),
        max_matches: counts.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        queries_per_second: if seconds > 0.0 {
            total_queries as f64 / seconds
        } else {
            0.0
        },
    };

    info!(
        queries = result.total_queries,
        elapsed = ?result.duration,
        "benchmark finished"
    );
    result
}
