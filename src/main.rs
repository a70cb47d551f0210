//! Mastermind Solver - CLI
//!
//! Solves Mastermind codes with Knuth's minimax algorithm or a random baseline.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    codespace::generate,
    commands::{SolveConfig, analyze_guess, run_benchmark, solve_code},
    core::GameSettings,
    output::{print_analysis_result, print_benchmark_result, print_solve_report},
    solver::SolverType,
};
use tracing::{Level, debug};

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code breaker using Knuth's minimax five-guess algorithm",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Number of colors in the alphabet
    #[arg(short, long, global = true, default_value = "6")]
    colors: usize,

    /// Number of positions in a code
    #[arg(short, long, global = true, default_value = "4")]
    digits: usize,

    /// Maximum number of rounds
    #[arg(short, long, global = true, default_value = "10")]
    rounds: usize,

    /// Solver: knuth (default, alias minimax) or random
    #[arg(short, long, global = true, default_value = "knuth")]
    solver: String,

    /// Seed for the random solver
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log every round
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific secret code
    Solve {
        /// The secret, as letters (ABCD) or digits (1234)
        secret: String,
    },

    /// Score a guess against a secret and rate it as an opener
    Analyze {
        guess: String,
        secret: String,
    },

    /// Run the solver against every code in the code space
    Benchmark {
        /// Limit number of codes to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let settings = GameSettings::new(cli.colors, cli.digits, cli.rounds)
        .context("invalid game settings")?;
    debug!(
        colors = settings.colors(),
        digits = settings.digits(),
        rounds = settings.round_limit(),
        "settings loaded"
    );

    match cli.command {
        Commands::Solve { secret } => {
            run_solve_command(&cli.solver, cli.seed, secret, settings, cli.verbose)
        }
        Commands::Analyze { guess, secret } => run_analyze_command(&guess, &secret, &settings),
        Commands::Benchmark { limit } => {
            run_benchmark_command(&cli.solver, cli.seed, limit, &settings)
        }
    }
}

fn run_solve_command(
    solver_name: &str,
    seed: Option<u64>,
    secret: String,
    settings: GameSettings,
    verbose: bool,
) -> Result<()> {
    let mut solver = SolverType::from_name(solver_name, seed)?;
    let config = SolveConfig::new(secret, settings);
    let report = solve_code(&config, &mut solver)?;

    print_solve_report(&report, verbose);
    Ok(())
}

fn run_analyze_command(guess: &str, secret: &str, settings: &GameSettings) -> Result<()> {
    let result = analyze_guess(guess, secret, settings)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    solver_name: &str,
    seed: Option<u64>,
    limit: Option<usize>,
    settings: &GameSettings,
) -> Result<()> {
    let mut solver = SolverType::from_name(solver_name, seed)?;

    let mut secrets = generate(settings);
    if let Some(limit) = limit {
        secrets.truncate(limit);
    }

    println!("\n{}", "═".repeat(70));
    println!(" Mastermind Solver Benchmark ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting {} of {} codes ({} colors, {} positions, {} rounds)",
        secrets.len(),
        settings.code_space_size(),
        settings.colors(),
        settings.digits(),
        settings.round_limit()
    );
    println!("Solver: {solver_name}\n");

    let result = run_benchmark(&mut solver, settings, &secrets, true)?;
    print_benchmark_result(&result);
    Ok(())
}
