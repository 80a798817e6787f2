//! Wordle Advisor - CLI
//!
//! Narrows the Wordle vocabulary from the feedback you enter and recommends the
//! next guess, interactively, in a TUI, or in batch.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use wordle_advisor::{
    commands::{
        SolveConfig, analyze_word, run_batch, run_benchmark, run_freq, run_simple, select_targets,
        solve_word,
    },
    output::{
        print_analysis_result, print_batch_report, print_benchmark_result, print_freq_stats,
        print_solve_result,
    },
    solver::{Mode, Session, SessionConfig},
    wordlists::{FrequencyTable, Lexicon, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle advisor: narrows candidates from feedback and ranks the next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess vocabulary, one word per line (default: words.txt, then the built-in list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Solutions with frequencies, as written by the `freq` command (needed for bot mode)
    #[arg(short = 's', long, global = true)]
    solutions: Option<PathBuf>,

    /// Scoring mode
    #[arg(short, long, global = true, value_enum, default_value_t = Mode::Entropy)]
    mode: Mode,

    /// Only suggest words that could still be the answer
    #[arg(long, global = true)]
    hard: bool,

    /// Number of recommendations to show
    #[arg(short = 'n', long = "top", global = true, default_value_t = 10)]
    top: usize,

    /// Reject guesses that are not in the word list
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based interactive mode (default)
    Interactive,

    /// Full-screen TUI mode
    Play,

    /// Apply guess:pattern observations and print what is left
    Batch {
        /// Observations such as crane:xxgyx
        #[arg(required = true)]
        observations: Vec<String>,
    },

    /// Score a single word against the full pool
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark the recommendations over many targets
    Benchmark {
        /// Number of words to test
        #[arg(short = 'c', long, default_value = "50")]
        count: usize,

        /// Sample targets at random instead of taking the first ones
        #[arg(short, long)]
        random: bool,
    },

    /// Cross-reference a solutions list with a word<TAB>count corpus
    Freq {
        /// Official solutions list, one word per line
        solutions: PathBuf,

        /// Frequency corpus, word<TAB>count per line
        frequencies: PathBuf,

        /// Output CSV
        #[arg(default_value = "solutions_with_freq.csv")]
        output: PathBuf,
    },
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            mode: self.mode,
            hard_mode: self.hard,
            top_n: self.top,
            strict_vocabulary: self.strict,
            ..SessionConfig::default()
        }
    }
}

/// Load the guess vocabulary and, if given, the solution/frequency table
fn load_lexicon(wordlist: Option<&Path>, solutions: Option<&Path>) -> Result<Lexicon> {
    let guess_words = loader::load_or_fallback(wordlist);

    let frequencies = match solutions {
        Some(path) => {
            let found = loader::resolve(path)
                .with_context(|| format!("solutions file {} not found", path.display()))?;
            let table = FrequencyTable::load(&found)
                .with_context(|| format!("loading solutions from {}", found.display()))?;
            info!("loaded {} solutions from {}", table.len(), found.display());
            Some(table)
        }
        None => None,
    };

    Ok(Lexicon::new(guess_words, frequencies))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or(Commands::Interactive);

    match command {
        // The frequency tool works on raw files and needs no lexicon
        Commands::Freq {
            solutions,
            frequencies,
            output,
        } => {
            let stats = run_freq(&solutions, &frequencies, &output)?;
            print_freq_stats(&stats, &output);
            Ok(())
        }
        command => run_session_command(&cli, command),
    }
}

fn run_session_command(cli: &Cli, command: Commands) -> Result<()> {
    let lexicon = load_lexicon(cli.wordlist.as_deref(), cli.solutions.as_deref())?;
    let mut session = Session::new(&lexicon, cli.session_config())?;

    match command {
        Commands::Interactive => run_simple(&mut session),
        Commands::Play => {
            use wordle_advisor::interactive::{App, run_tui};
            run_tui(App::new(session))
        }
        Commands::Batch { observations } => {
            let report = run_batch(&mut session, &observations)?;
            print_batch_report(&report, &session);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &session)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let result = solve_word(SolveConfig::new(word), &mut session)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count, random } => {
            let targets = select_targets(&session, count, random);
            println!(
                "Running benchmark on {} {}words...",
                targets.len(),
                if random { "random " } else { "" }
            );
            let result = run_benchmark(&mut session, &targets, true)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Freq { .. } => bail!("freq works on raw files and takes no session"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subcommand_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["wordle_advisor", "--hard", "-n", "3"]).unwrap();
        assert!(cli.command.is_none());
        let config = cli.session_config();
        assert!(config.hard_mode);
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn freq_is_rejected_by_the_session_runner() {
        let mut cli =
            Cli::try_parse_from(["wordle_advisor", "freq", "solutions.txt", "counts.tsv"]).unwrap();
        let command = cli.command.take().unwrap();
        assert!(matches!(command, Commands::Freq { .. }));

        let err = run_session_command(&cli, command).unwrap_err();
        assert!(err.to_string().contains("freq"));
    }
}
