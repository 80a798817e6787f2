//! Display functions for command results

use super::formatters::{colored_tiles, entropy_bar, pattern_to_emoji, word_list};
use crate::commands::{
    AnalysisResult, BatchOutcome, BatchReport, BenchmarkResult, FreqStats, SolveResult,
};
use crate::core::Observation;
use crate::error::SolverError;
use crate::solver::{Mode, Recommendation, ScoredCandidate, Session};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Pools up to this size are listed in full, best guess first
const LIST_RANKED: usize = 20;
/// Pools up to this size show an alphabetical preview
const LIST_PREVIEW: usize = 50;
const PREVIEW_WORDS: usize = 15;

/// Print the program banner and the active settings
pub fn print_header(session: &Session<'_>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        "          {}",
        "🟩 WORDLE ADVISOR 🟩".bright_green().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    match session.mode() {
        Mode::Entropy => println!("\nRanking guesses by {}.", "entropy".bright_yellow()),
        Mode::Bot => println!(
            "\nRanking guesses by {} over {} solutions.",
            "expected remaining".bright_yellow(),
            session.lexicon().solutions().len()
        ),
    }
    println!(
        "{} words possible, {} legal guesses.",
        session.pool().len(),
        session.lexicon().guess_words().len()
    );
    if session.config().hard_mode {
        println!(
            "{}",
            "⚠️  HARD MODE: only possible answers will be suggested.".yellow()
        );
    }
    println!("\nPattern codes:  g = 🟩 Green   y = 🟨 Yellow   x = ⬛ Gray");
}

/// Rank with a spinner on stderr while the work runs
///
/// # Errors
/// Propagates `SolverError::EmptyPool` from the session.
pub fn recommend_with_spinner<'a>(
    session: &Session<'a>,
) -> Result<Recommendation<'a>, SolverError> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!(
        "Scoring {} guesses against {} words...",
        session.candidate_guesses().len(),
        session.pool().len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = session.recommend();
    spinner.finish_and_clear();
    result
}

fn print_table_header(mode: Mode, with_possible: bool) {
    let (primary, secondary) = match mode {
        Mode::Entropy => ("Entropy", "Exp.Left"),
        Mode::Bot => ("Exp.Left", "Freq"),
    };
    if with_possible {
        println!("{:<5} {:<10} {primary:<10} {secondary:<10} Possible?", "Rank", "Word");
    } else {
        println!("{:<5} {:<10} {primary:<10} {secondary:<10}", "Rank", "Word");
    }
    println!("{}", "─".repeat(60));
}

fn format_scores(mode: Mode, candidate: &ScoredCandidate<'_>) -> String {
    match mode {
        Mode::Entropy => format!(
            "{:<10.3} {:<10.1}",
            candidate.primary, candidate.secondary
        ),
        Mode::Bot => format!(
            "{:<10.2} {:<10.4}",
            candidate.primary, candidate.secondary
        ),
    }
}

/// Print the recommendation tables and the remaining-word summary
pub fn print_recommendation(rec: &Recommendation<'_>, session: &Session<'_>) {
    let mode = session.mode();

    println!("\n{}", "═".repeat(60).cyan());
    println!("{:^60}", "TOP RECOMMENDATIONS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    print_table_header(mode, true);

    for (i, candidate) in rec.top.iter().enumerate() {
        let possible = if candidate.is_possible_answer {
            "✓ Yes".green()
        } else {
            "  No".bright_black()
        };
        println!(
            "{:<5} {:<10} {} {possible}",
            i + 1,
            candidate.word.text().to_uppercase().bold(),
            format_scores(mode, candidate)
        );
    }
    println!("{}", "─".repeat(60));

    let has_strategic = rec.top.iter().any(|c| !c.is_possible_answer);
    if has_strategic && rec.pool_size > 2 && !rec.possible_answers.is_empty() {
        println!("\n{}", "─".repeat(60));
        println!(
            "{:^60}",
            "TOP POSSIBLE ANSWERS (if you must guess one)".bright_cyan()
        );
        println!("{}", "─".repeat(60));
        print_table_header(mode, false);
        for (i, candidate) in rec.possible_answers.iter().enumerate() {
            println!(
                "{:<5} {:<10} {}",
                i + 1,
                candidate.word.text().to_uppercase().bold(),
                format_scores(mode, candidate)
            );
        }
        println!("{}", "─".repeat(60));
    }

    print_remaining(session);
}

/// Print how many words remain, listing them when there are few
pub fn print_remaining(session: &Session<'_>) {
    let total = session.pool().len();
    println!(
        "\n📊 Remaining possible answers: {}",
        total.to_string().bright_yellow().bold()
    );

    if total <= LIST_RANKED {
        let ranked: Vec<_> = session.rank_pool().iter().map(|c| c.word).collect();
        println!("   (sorted by score, best first)");
        println!("   {}", word_list(&ranked));
    } else if total <= LIST_PREVIEW {
        println!("   {}...", word_list(&session.remaining(PREVIEW_WORDS)));
    }
    println!();
}

/// Print the observations applied so far
pub fn print_history(history: &[Observation]) {
    if history.is_empty() {
        println!("\n   No guesses made yet.");
        return;
    }

    println!("\n   Guess History:");
    for (i, obs) in history.iter().enumerate() {
        println!(
            "   {}. {} → {}",
            i + 1,
            colored_tiles(&obs.guess, obs.pattern),
            pattern_to_emoji(obs.pattern)
        );
    }
    println!();
}

/// Print the outcome of a batch run
pub fn print_batch_report(report: &BatchReport<'_>, session: &Session<'_>) {
    println!("\n{}", "═".repeat(40).cyan());
    println!("  {}", "WORDLE ADVISOR - Batch Mode".bright_cyan().bold());
    println!("{}\n", "═".repeat(40).cyan());

    for step in &report.steps {
        println!(
            "After {} {}: {} words remaining",
            step.observation.guess.text().to_uppercase(),
            pattern_to_emoji(step.observation.pattern),
            step.remaining
        );
    }

    match &report.outcome {
        BatchOutcome::NoCandidates => {
            println!("\n{}", "✗ No valid words remaining!".red().bold());
        }
        BatchOutcome::Solved(answer) => {
            println!(
                "\n{} {}",
                "✓ Answer:".green().bold(),
                answer.text().to_uppercase().bright_yellow().bold()
            );
        }
        BatchOutcome::Recommend(rec) => {
            println!("\nTop recommendations:");
            for candidate in rec.top.iter().take(5) {
                let status = if candidate.is_possible_answer {
                    "✓".green()
                } else {
                    "○".bright_black()
                };
                let score = match session.mode() {
                    Mode::Entropy => format!("entropy={:.3}", candidate.primary),
                    Mode::Bot => format!("expected={:.2}", candidate.primary),
                };
                println!(
                    "  {status} {}: {score}",
                    candidate.word.text().to_uppercase()
                );
            }
        }
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            pattern_to_emoji(step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                if step.candidates_after > 0 {
                    let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                        ratio.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Possible:    {}",
        if result.is_possible_answer {
            "yes".green()
        } else {
            "no".bright_black()
        }
    );
    if let Some(frequency) = result.frequency {
        println!("   Frequency:   {frequency:.4}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=crate::commands::benchmark::MAX_GUESSES {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} {}",
            "Unsolved:".red().bold(),
            result.failures.join(", ").to_uppercase()
        );
    }
}

/// Print the summary of a frequency cross-reference
pub fn print_freq_stats(stats: &FreqStats, output: &std::path::Path) {
    println!("\n{}", "═".repeat(60).cyan());
    println!("  {}", "RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("  Total solutions:     {}", stats.total_solutions);
    println!(
        "  Found in freq data:  {} ({:.1}%)",
        stats.found,
        stats.found_percent()
    );
    println!("  Not found:           {}", stats.not_found);

    if let Some((word, count)) = &stats.most_common {
        println!(
            "\n  Most common:  {} (freq: {count})",
            word.to_uppercase().bright_yellow()
        );
    }
    if let Some((word, count)) = &stats.least_common {
        println!("  Least common: {} (freq: {count})", word.to_uppercase());
    }

    if !stats.missing_sample.is_empty() {
        println!("\n  Sample words not in frequency data:");
        println!(
            "    {}",
            stats
                .missing_sample
                .iter()
                .take(10)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    println!("\n{}", "═".repeat(60).cyan());
    println!("  {} {}", "✓ Output saved to:".green(), output.display());
    println!("{}", "═".repeat(60).cyan());
}
