//! TUI rendering with ratatui
//!
//! Panels for the recommendations, the remaining candidates, the feedback
//! history and the information gained so far.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Feedback;
use crate::solver::{Mode, ScoredCandidate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed individually up to this pool size
const LIST_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let hard = if app.session.config().hard_mode {
        " (hard mode)"
    } else {
        ""
    };
    let header = Paragraph::new(format!(
        "🎯 WORDLE ADVISOR - {} mode{hard}",
        app.session.mode().name()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Recommendations
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(25), // History
        ])
        .split(area);

    render_recommendations(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn score_text(mode: Mode, candidate: &ScoredCandidate<'_>) -> String {
    match mode {
        Mode::Entropy => format!(
            "{:>6.3} bits  {:>7.1} left",
            candidate.primary, candidate.secondary
        ),
        Mode::Bot => format!(
            "{:>7.2} left  freq {:.3}",
            candidate.primary, candidate.secondary
        ),
    }
}

fn render_recommendations(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Recommendations (TAB to use the best) ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(rec) = &app.recommendation else {
        let text = if app.needs_refresh {
            "Scoring guesses..."
        } else {
            "No suggestion available"
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    };

    let mode = app.session.mode();
    let mut lines: Vec<Line> = rec
        .top
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(format!("{:>2}. ", i + 1)),
                Span::styled(c.word.text().to_uppercase(), style),
                Span::raw(if c.is_possible_answer { " ✓ " } else { "   " }),
                Span::styled(score_text(mode, c), Style::default().fg(Color::Cyan)),
            ])
        })
        .collect();

    if rec.top.iter().any(|c| !c.is_possible_answer) && !rec.possible_answers.is_empty() {
        let answers = rec
            .possible_answers
            .iter()
            .map(|c| c.word.text().to_uppercase())
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Best possible answers: "),
            Span::styled(answers, Style::default().fg(Color::Green)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let pool = app.session.pool();

    let content = if pool.is_empty() {
        vec![Line::from("No candidates remain")]
    } else if pool.len() <= LIST_CANDIDATES {
        app.session
            .rank_pool()
            .iter()
            .map(|c| {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<5}", c.word.text().to_uppercase()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!(" {:.2}", c.primary),
                        Style::default().fg(Color::Cyan),
                    ),
                ])
            })
            .collect()
    } else {
        vec![
            Line::from(format!("{} candidates remaining", pool.len())),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (pool.len() as f64).log2()
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn feedback_color(feedback: Feedback) -> Color {
    match feedback {
        Feedback::Hit => Color::Green,
        Feedback::Present => Color::Yellow,
        Feedback::Absent => Color::DarkGray,
    }
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(6)
        .enumerate()
        .map(|(i, entry)| {
            let obs = &entry.observation;
            let mut spans = vec![Span::raw(format!("{}: ", app.history.len() - i))];
            spans.extend(
                obs.guess
                    .text()
                    .chars()
                    .zip(obs.pattern.feedback())
                    .map(|(letter, feedback)| {
                        Span::styled(
                            letter.to_ascii_uppercase().to_string(),
                            Style::default()
                                .fg(feedback_color(feedback))
                                .add_modifier(Modifier::BOLD),
                        )
                    }),
            );
            spans.push(Span::raw(format!(
                " [{:.1} bits] {} → {}",
                entry.entropy, entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let pool = app.session.pool();
    let total_bits = (pool.initial_len().max(1) as f64).log2();
    let bits_gained = app.session.bits_gained();
    let ratio = if total_bits > 0.0 {
        (bits_gained / total_bits).clamp(0.0, 1.0)
    } else {
        1.0
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!(
            "{bits_gained:.1}/{total_bits:.1} bits | {} candidates remain",
            pool.len()
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let pattern_title;
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guess => (
            " Enter the word you played | TAB for the best suggestion ",
            app.guess_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::Pattern => {
            let word = app
                .pending_guess
                .as_ref()
                .map_or_else(String::new, |w| w.text().to_uppercase());
            pattern_title = format!(" Feedback for {word} (g=green y=yellow x=gray) | ESC to cancel ");
            (pattern_title.as_str(), app.pattern_buffer.as_str(), Color::Cyan)
        }
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Guess #{}", app.history.len() + 1))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = Paragraph::new(format!("Games solved: {}", app.stats.total_games))
        .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates = Paragraph::new(format!("Candidates: {}", app.session.pool().len()))
        .alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help = Paragraph::new("Esc: Quit | ^Z: Undo | ^R: New | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Session, SessionConfig};
    use crate::wordlists::Lexicon;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn renders_recommendations_and_history() {
        let lexicon = Lexicon::from_words(words_from_slice(&["crane", "slate", "tonus", "bonus"]));
        let mut app = App::new(Session::new(&lexicon, SessionConfig::default()).unwrap());
        app.refresh();
        app.guess_buffer = "crane".to_string();
        app.submit_guess();
        app.pattern_buffer = "xxxyx".to_string();
        app.submit_pattern();
        app.refresh();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Recommendations"));
        assert!(screen.contains("TONUS"));
        assert!(screen.contains("Candidates: 2"));
    }
}
