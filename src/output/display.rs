//! Display functions for command results

use super::formatters::{create_progress_bar, score_to_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveReport};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    let digits = report.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} ({} solver)",
        report.secret.to_string().bright_yellow().bold(),
        report.solver
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {} {}",
            i + 1,
            step.guess,
            score_to_pegs(step.score, digits),
            format!("({})", step.score).bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if report.result.succeeded {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", report.result.rounds_used)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Not solved in {} rounds (best answer {})",
                report.result.rounds_used, report.result.final_answer
            )
            .red()
            .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let digits = result.guess.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} vs {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold(),
        result.secret
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Score:       {} {}",
        score_to_pegs(result.score, digits),
        format!(
            "({} exact, {} misplaced)",
            result.score.white(),
            result.score.black()
        )
        .bright_black()
    );
    if result.solved {
        println!("   {}", "Secret found!".green().bold());
    }

    let bar = create_progress_bar(
        result.minimax_number as f64,
        result.code_space as f64,
        30,
    );
    println!(
        "\n📊 As an opening move against {} codes:",
        result.code_space
    );
    println!(
        "   Worst case:  [{}] {}",
        bar.green(),
        format!("{} candidates remain", result.minimax_number).bright_yellow()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} solver) ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.solver
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!("   Solved:           {}", result.solved);
    if !result.failed.is_empty() {
        println!(
            "   Failed:           {}",
            format!("{}", result.failed.len()).red()
        );
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&rounds, &count) in &result.distribution {
        let pct = count as f64 / result.solved.max(1) as f64 * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {rounds:2}: {bar} {count:6} ({pct:5.1}%)");
    }

    if !result.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Codes".yellow().bold());
        for (code, rounds) in &result.hardest {
            println!("   {} ({rounds} rounds)", code.to_string().yellow());
        }
    }

    if !result.failed.is_empty() {
        println!("\n❌ {}", "Unsolved Codes".red().bold());
        for code in result.failed.iter().take(10) {
            println!("   {}", code.to_string().red());
        }
    }
}
