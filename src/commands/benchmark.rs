//! Benchmark command
//!
//! Tests solver performance across many secrets.

use crate::core::{Code, GameSettings};
use crate::game::MastermindGame;
use crate::solver::Solver;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub solver: &'static str,
    pub total_codes: usize,
    pub solved: usize,
    pub failed: Vec<Code>,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds used to solve -> number of secrets
    pub distribution: BTreeMap<usize, usize>,
    pub hardest: Vec<(Code, usize)>,
    pub duration: Duration,
}

/// Run `solver` against every secret in `secrets`
///
/// Unsolved secrets are counted in `failed` and excluded from the round
/// statistics.
///
/// # Errors
///
/// Returns an error if a secret does not fit `settings` or the solver aborts.
pub fn run_benchmark<S: Solver>(
    solver: &mut S,
    settings: &GameSettings,
    secrets: &[Code],
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        ProgressBar::new(secrets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut solved_rounds: Vec<(Code, usize)> = Vec::with_capacity(secrets.len());
    let mut failed = Vec::new();

    for (idx, secret) in secrets.iter().enumerate() {
        let mut game = MastermindGame::new(secret.clone(), *settings)?;
        let result = solver.solve(&mut game)?;

        if result.succeeded {
            solved_rounds.push((secret.clone(), result.rounds_used));
        } else {
            failed.push(secret.clone());
        }

        if idx % 10 == 0 && !solved_rounds.is_empty() {
            let avg = average(&solved_rounds);
            pb.set_message(format!("Avg: {avg:.3}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let mut distribution = BTreeMap::new();
    for &(_, rounds) in &solved_rounds {
        *distribution.entry(rounds).or_insert(0) += 1;
    }

    let mut hardest = solved_rounds.clone();
    hardest.sort_by_key(|(_, rounds)| std::cmp::Reverse(*rounds));
    hardest.truncate(5);

    Ok(BenchmarkResult {
        solver: solver.name(),
        total_codes: secrets.len(),
        solved: solved_rounds.len(),
        failed,
        average_rounds: average(&solved_rounds),
        min_rounds: solved_rounds.iter().map(|&(_, r)| r).min().unwrap_or(0),
        max_rounds: solved_rounds.iter().map(|&(_, r)| r).max().unwrap_or(0),
        distribution,
        hardest,
        duration: start.elapsed(),
    })
}

fn average(rounds: &[(Code, usize)]) -> f64 {
    if rounds.is_empty() {
        return 0.0;
    }
    rounds.iter().map(|&(_, r)| r).sum::<usize>() as f64 / rounds.len() as f64
}
