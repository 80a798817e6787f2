//! Line-based interactive mode
//!
//! Prompts for each guess and its feedback, narrows the session and prints the
//! next recommendations. Slash commands control the session.

use crate::core::{Observation, Pattern};
use crate::error::SolverError;
use crate::output::{
    formatters::colored_tiles, print_header, print_history, print_recommendation,
    recommend_with_spinner,
};
use crate::solver::Session;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A slash command typed at the guess prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hint,
    History,
    Reset,
    Undo,
    Quit,
}

impl Command {
    /// Parse `/hint`, `/h`, `/history`, `/hi`, ...
    ///
    /// Returns `None` for anything that is not a known command.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "/hint" | "/h" => Some(Self::Hint),
            "/history" | "/hi" => Some(Self::History),
            "/reset" | "/r" => Some(Self::Reset),
            "/undo" | "/u" => Some(Self::Undo),
            "/quit" | "/q" | "/exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the interactive mode on stdin
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session<'_>) -> Result<()> {
    let stdin = io::stdin();
    run_with_input(session, &mut stdin.lock())
}

/// Run the interactive mode reading lines from `input`
///
/// End of input behaves like `/quit`.
///
/// # Errors
///
/// Returns an error if reading `input` or flushing stdout fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_with_input<R: BufRead>(session: &mut Session<'_>, input: &mut R) -> Result<()> {
    print_header(session);
    println!("\n🎯 RECOMMENDED OPENING WORDS: SALET, REAST, CRATE, TRACE, SLATE, CRANE, AROSE");
    println!("\n💡 Commands: /hint = get recommendations, /history = show guesses");
    println!("             /undo = take back a guess, /reset = start over, /quit = exit");

    loop {
        println!("\n{}", "─".repeat(60));
        println!("\n📝 GUESS #{}", session.history().len() + 1);

        let Some(line) = prompt(input, "   Enter your guess")? else {
            break;
        };

        if line.starts_with('/') {
            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(Command::Reset) => {
                    session.reset();
                    println!("\n🔄 Solver reset! Starting fresh.\n");
                }
                Some(Command::Hint) => show_recommendations(session),
                Some(Command::History) => print_history(session.history()),
                Some(Command::Undo) => match session.undo() {
                    Some(obs) => println!(
                        "   ↩ Undid {} ({} words possible)",
                        obs.guess.text().to_uppercase(),
                        session.pool().len()
                    ),
                    None => println!("   Nothing to undo!"),
                },
                None => println!(
                    "   ⚠️  Unknown command. Available: /hint, /history, /undo, /reset, /quit"
                ),
            }
            continue;
        }

        let guess = match session.validate_guess(&line) {
            Ok(word) => word,
            Err(SolverError::UnknownWord(word)) => {
                println!("   ⚠️  '{word}' is not in the word list.");
                continue;
            }
            Err(_) => {
                println!("   ⚠️  Please enter a valid 5-letter word.");
                continue;
            }
        };

        let Some(pattern_line) = prompt(input, "   Enter the pattern (g/y/x)")? else {
            break;
        };
        let Some(pattern) = Pattern::parse(&pattern_line) else {
            println!("   ⚠️  Pattern must be 5 characters using only g, y, x.");
            println!("   Example: If you got ⬛🟨🟩⬛🟩, enter: xygxg");
            continue;
        };

        println!(
            "   Result: {} → {}",
            colored_tiles(&guess, pattern),
            pattern.to_emoji()
        );

        if pattern.is_perfect() {
            let turns = session.history().len() + 1;
            println!(
                "\n🎉 {} You solved it in {turns} guess{}!",
                "CONGRATULATIONS!".bright_green().bold(),
                if turns == 1 { "" } else { "es" }
            );
            println!(
                "   The answer was: {}\n",
                guess.text().to_uppercase().bright_yellow().bold()
            );

            let again = prompt(input, "Play again? (y/n)")?;
            if again.is_some_and(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes")) {
                session.reset();
                println!("\n🔄 Starting new game!\n");
                continue;
            }
            break;
        }

        match session.apply(Observation::new(guess, pattern)) {
            Ok(1) => {
                if let Some(answer) = session.solution() {
                    println!(
                        "\n🎯 THE ANSWER MUST BE: {}",
                        answer.text().to_uppercase().bright_green().bold()
                    );
                    println!("   (Only one possibility remaining!)\n");
                }
            }
            Ok(_) => show_recommendations(session),
            Err(SolverError::EmptyPool { .. }) => {
                println!("\n{}", "❌ No valid words remaining! This might indicate:".red());
                println!("   • A typo in your guess or pattern");
                println!("   • The answer isn't in our word list");
                println!("   Use /undo to take the last guess back, or /reset to start over.\n");
            }
            Err(e) => println!("   ⚠️  Error: {e}"),
        }
    }

    println!("\nThanks for using Wordle Advisor! Good luck! 🍀\n");
    Ok(())
}

fn show_recommendations(session: &Session<'_>) {
    match recommend_with_spinner(session) {
        Ok(rec) => print_recommendation(&rec, session),
        Err(e) => println!("\n❌ {e}"),
    }
}

/// Print `label`, read one trimmed line; `None` at end of input
fn prompt<R: BufRead>(input: &mut R, label: &str) -> Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush().context("flushing stdout")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
