//! TUI application state and logic

use crate::core::{Observation, Pattern, WORD_LEN, Word};
use crate::error::SolverError;
use crate::solver::{Recommendation, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub recommendation: Option<Recommendation<'a>>,
    pub history: Vec<HistoryEntry>,
    pub input_mode: InputMode,
    pub guess_buffer: String,
    pub pattern_buffer: String,
    pub pending_guess: Option<Word>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub needs_refresh: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the word that was played
    Guess,
    /// Typing the feedback it received
    Pattern,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub observation: Observation,
    pub entropy: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        Self {
            session,
            recommendation: None,
            history: Vec::new(),
            input_mode: InputMode::Guess,
            guess_buffer: String::new(),
            pattern_buffer: String::new(),
            pending_guess: None,
            messages: vec![
                Message {
                    text: "Type the word you played, then the feedback it got.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Feedback: g=green y=yellow x=gray (or 🟩🟨⬛)".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            needs_refresh: true,
            should_quit: false,
        }
    }

    /// Re-rank against the current pool
    pub fn refresh(&mut self) {
        self.needs_refresh = false;
        match self.session.recommend() {
            Ok(rec) => self.recommendation = Some(rec),
            Err(e) => {
                self.recommendation = None;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Accept the typed guess and move on to feedback entry
    pub fn submit_guess(&mut self) {
        match self.session.validate_guess(&self.guess_buffer) {
            Ok(word) => {
                self.pending_guess = Some(word);
                self.pattern_buffer.clear();
                self.input_mode = InputMode::Pattern;
            }
            Err(SolverError::UnknownWord(word)) => self.add_message(
                &format!("Word '{}' not in the word list!", word.to_uppercase()),
                MessageStyle::Error,
            ),
            Err(_) => self.add_message("Word must be exactly 5 letters!", MessageStyle::Error),
        }
    }

    /// Apply the pending guess with the typed feedback
    pub fn submit_pattern(&mut self) {
        let Some(pattern) = Pattern::parse(&self.pattern_buffer) else {
            self.add_message("Invalid pattern! Use g/y/x or 🟩🟨⬛", MessageStyle::Error);
            return;
        };
        let Some(guess) = self.pending_guess.take() else {
            self.input_mode = InputMode::Guess;
            return;
        };

        let entropy = self.session.metrics(&guess).entropy;
        let candidates_before = self.session.pool().len();
        let observation = Observation::new(guess, pattern);

        self.guess_buffer.clear();
        self.pattern_buffer.clear();
        self.input_mode = InputMode::Guess;

        if pattern.is_perfect() {
            self.history.push(HistoryEntry {
                observation,
                entropy,
                candidates_before,
                candidates_after: 1,
            });
            self.record_win();
            return;
        }

        let result = self.session.apply(observation.clone());
        let candidates_after = self.session.pool().len();
        self.history.push(HistoryEntry {
            observation,
            entropy,
            candidates_before,
            candidates_after,
        });

        match result {
            Ok(1) => {
                if let Some(answer) = self.session.solution() {
                    self.add_message(
                        &format!("The answer must be {}!", answer.text().to_uppercase()),
                        MessageStyle::Success,
                    );
                }
                self.needs_refresh = true;
            }
            Ok(remaining) => {
                self.add_message(
                    &format!("{remaining} candidates remaining"),
                    MessageStyle::Info,
                );
                self.needs_refresh = true;
            }
            Err(SolverError::EmptyPool { .. }) => {
                self.recommendation = None;
                self.add_message(
                    "No candidates remain - feedback may be wrong. Ctrl-Z to undo.",
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn record_win(&mut self) {
        let guess_count = self.history.len();
        self.stats.total_games += 1;
        if guess_count <= 6 {
            self.stats.guess_distribution[guess_count] += 1;
        }
        self.input_mode = InputMode::WinCelebration;

        let celebration = match guess_count {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.history.clear();
        self.guess_buffer.clear();
        self.pattern_buffer.clear();
        self.pending_guess = None;
        self.messages.clear();
        self.input_mode = InputMode::Guess;
        self.add_message("New game started!", MessageStyle::Info);
        self.needs_refresh = true;
    }

    pub fn undo_last(&mut self) {
        let Some(entry) = self.history.pop() else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        };
        if !entry.observation.pattern.is_perfect() {
            self.session.undo();
        }
        self.input_mode = InputMode::Guess;
        self.pending_guess = None;
        self.add_message(
            &format!("Undid {}", entry.observation.guess.text().to_uppercase()),
            MessageStyle::Info,
        );
        self.needs_refresh = true;
    }

    /// Put the top recommendation in the guess box
    pub fn fill_suggestion(&mut self) {
        if let Some(best) = self.recommendation.as_ref().and_then(Recommendation::best) {
            self.guess_buffer = best.text().to_string();
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Update state for one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('z'), true) => {
                self.undo_last();
                return;
            }
            (KeyCode::Char('r'), true) => {
                self.new_game();
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guess => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.fill_suggestion(),
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.guess_buffer.len() < WORD_LEN {
                        self.guess_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.guess_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            InputMode::Pattern => match key.code {
                KeyCode::Esc => {
                    self.pending_guess = None;
                    self.pattern_buffer.clear();
                    self.input_mode = InputMode::Guess;
                }
                KeyCode::Char(c) => {
                    if self.pattern_buffer.chars().count() < WORD_LEN {
                        self.pattern_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.pattern_buffer.pop();
                }
                KeyCode::Enter => self.submit_pattern(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Draw the "scoring" state first so the user sees the work in progress
        if app.needs_refresh {
            app.refresh();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SessionConfig;
    use crate::wordlists::Lexicon;
    use crate::wordlists::loader::words_from_slice;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(words_from_slice(&[
            "crane", "slate", "tonus", "bonus", "stone", "nutso", "snout",
        ]))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn guess_then_pattern_narrows_session() {
        let lexicon = lexicon();
        let mut app = App::new(Session::new(&lexicon, SessionConfig::default()).unwrap());
        app.refresh();

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Pattern);

        type_text(&mut app, "xxxyx");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Guess);
        assert_eq!(app.session.pool().len(), 4);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].candidates_after, 4);
        assert!(app.needs_refresh);
    }

    #[test]
    fn tab_fills_top_suggestion() {
        let lexicon = lexicon();
        let mut app = App::new(Session::new(&lexicon, SessionConfig::default()).unwrap());
        app.refresh();

        press(&mut app, KeyCode::Tab);
        let best = app.recommendation.as_ref().and_then(Recommendation::best).unwrap();
        assert_eq!(app.guess_buffer, best.text());
    }

    #[test]
    fn invalid_pattern_keeps_pattern_mode() {
        let lexicon = lexicon();
        let mut app = App::new(Session::new(&lexicon, SessionConfig::default()).unwrap());

        type_text(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "xxq");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Pattern);
        assert!(app.history.is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn win_then_new_game() {
        let lexicon = lexicon();
        let mut app = App::new(Session::new(&lexicon, SessionConfig::default()).unwrap());

        type_text(&mut app, "tonus");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "ggggg");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guess);
        assert!(app.history.is_empty());
    }

    #[test]
    fn ctrl_z_undoes_contradiction() {
        let lexicon = lexicon();
        let mut app = App::new(Session::new(&lexicon, SessionConfig::default()).unwrap());

        type_text(&mut app, "zzzzz");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "xxxxg");
        press(&mut app, KeyCode::Enter);
        assert!(app.session.pool().is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        assert!(app.history.is_empty());
        assert_eq!(app.session.pool().len(), lexicon.guess_words().len());
    }
}
