//! TUI rendering with ratatui
//!
//! The gallows panel consumes only the mistake count and status from the
//! round; game logic never flows back out of the renderer.

use super::app::{App, MessageStyle, Screen};
use crate::core::{GameStatus, MAX_MISTAKES, Round};
use crate::output::formatters::{gallows_lines, spaced_masked_word, tries_hearts};
use crate::wordlists::CATEGORIES;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::CategorySelect => render_category_select(f, app),
        Screen::Playing => render_game(f, app),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("💀 HANGMAN - Guess the word before the figure is complete")
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

fn render_category_select(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(10),    // Category list
            Constraint::Length(3),  // Help
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let items: Vec<ListItem> = CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let selected = i == app.cursor;
            let marker = if selected { "▸ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::raw(category.icon),
                Span::styled(format!(" {:<12}", category.name), style),
                Span::styled(
                    category.description,
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Choose a Category ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, chunks[1]);

    let help = Paragraph::new("↑/↓: Move | Enter: Start | q/Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

fn render_game(f: &mut Frame, app: &App) {
    let Some(round) = app.round.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Gallows
            Constraint::Percentage(60), // Word, keyboard, messages
        ])
        .split(chunks[1]);

    render_gallows_panel(f, round, main_chunks[0]);
    render_play_panel(f, app, round, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_gallows_panel(f: &mut Frame, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Drawing
            Constraint::Length(3), // Mistake gauge
        ])
        .split(area);

    // Figure turns red once the round is lost
    let figure_style = match round.status() {
        GameStatus::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        GameStatus::Won => Style::default().fg(Color::Green),
        GameStatus::Playing => Style::default().fg(Color::White),
    };

    let lines: Vec<Line> = gallows_lines(round.mistakes())
        .into_iter()
        .map(|l| Line::from(Span::styled(l, figure_style)))
        .collect();

    let drawing = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(drawing, chunks[0]);

    let mistakes = round.mistakes();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Mistakes ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if mistakes >= 4 {
            Color::Red
        } else {
            Color::Yellow
        }))
        .ratio(f64::from(mistakes) / f64::from(MAX_MISTAKES))
        .label(format!(
            "{mistakes} / {MAX_MISTAKES}  {}",
            tries_hearts(mistakes)
        ));
    f.render_widget(gauge, chunks[1]);
}

fn render_play_panel(f: &mut Frame, app: &App, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Word and banner
            Constraint::Length(7), // Keyboard
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_word(f, app, round, chunks[0]);
    render_keyboard(f, round, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, round: &Round, area: Rect) {
    let masked = spaced_masked_word(&round.masked_word());

    let mut content = vec![
        Line::from(Span::styled(
            masked,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match round.status() {
        GameStatus::Won => content.push(Line::from(Span::styled(
            "🎉 You won! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))),
        GameStatus::Lost => content.push(Line::from(Span::styled(
            format!("💀 You lost! The word was: {}", round.word()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))),
        GameStatus::Playing => content.push(Line::from(Span::styled(
            "Guess a letter...",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let title = app.category.map_or_else(
        || " Word ".to_string(),
        |c| format!(" Word - {} {} ", c.meta().icon, c.meta().name),
    );

    let word = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(word, area);
}

fn render_keyboard(f: &mut Frame, round: &Round, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|letter| {
                    let style = if round.is_hit(letter) {
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD)
                    } else if round.has_guessed(letter) {
                        Style::default().fg(Color::Red)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keyboard ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stats_line = Line::from(vec![
        Span::raw("Wins: "),
        Span::styled(app.stats.wins.to_string(), Style::default().fg(Color::Green)),
        Span::raw("  Losses: "),
        Span::styled(app.stats.losses.to_string(), Style::default().fg(Color::Red)),
        Span::raw("  Streak: "),
        Span::styled(
            app.stats.current_streak.to_string(),
            Style::default().fg(streak_color(app.stats.current_streak)),
        ),
        Span::raw("  Best: "),
        Span::styled(
            app.stats.best_streak.to_string(),
            Style::default().fg(Color::Magenta),
        ),
    ]);
    let stats = Paragraph::new(stats_line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("A-Z: Guess | Enter: New Word | Tab: Category | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

/// Streak tier coloring: cold gray up through a hot streak
const fn streak_color(streak: u32) -> Color {
    match streak {
        0 => Color::DarkGray,
        1..=2 => Color::Blue,
        3..=4 => Color::Green,
        5..=7 => Color::Yellow,
        _ => Color::LightRed,
    }
}
