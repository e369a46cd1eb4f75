//! TUI application state and logic

use crate::core::{GuessOutcome, Round, SessionStats};
use crate::wordlists::{CATEGORIES, CategoryId, select_word};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which screen the application is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Category selection; no round may start from here until a pick is made
    CategorySelect,
    /// Active game screen
    Playing,
}

/// Application state
pub struct App {
    pub screen: Screen,
    pub category: Option<CategoryId>,
    pub round: Option<Round>,
    pub stats: SessionStats,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app, optionally preselecting a category from the CLI
    ///
    /// With a preselected category the selection screen is skipped and the
    /// first round starts immediately; otherwise the round-start guard keeps
    /// the game on the selection screen until a category is chosen.
    #[must_use]
    pub fn new(preselected: Option<CategoryId>) -> Self {
        let mut app = Self {
            screen: Screen::CategorySelect,
            category: preselected,
            round: None,
            stats: SessionStats::default(),
            cursor: 0,
            messages: vec![Message {
                text: "Pick a category to start guessing.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        };

        if preselected.is_some() {
            app.start_round();
        }
        app
    }

    pub fn select_prev(&mut self) {
        self.cursor = self.cursor.checked_sub(1).unwrap_or(CATEGORIES.len() - 1);
    }

    pub fn select_next(&mut self) {
        self.cursor = (self.cursor + 1) % CATEGORIES.len();
    }

    /// Confirm the highlighted category and start the first round
    pub fn choose_category(&mut self) {
        self.category = Some(CATEGORIES[self.cursor].id);
        self.start_round();
    }

    /// Start a new round with a fresh word
    ///
    /// Guarded: does nothing until a category has been chosen, so a round
    /// can never begin from the selection screen by accident.
    pub fn start_round(&mut self) {
        let Some(category) = self.category else {
            return;
        };

        self.round = Some(Round::new(select_word(category)));
        self.screen = Screen::Playing;
        self.messages.clear();
        self.add_message(
            &format!("New word from {}. Good luck!", category.meta().name),
            MessageStyle::Info,
        );
    }

    /// Return to the category selection screen
    ///
    /// Session stats survive; only the round and the chosen category are
    /// dropped.
    pub fn change_category(&mut self) {
        self.screen = Screen::CategorySelect;
        self.category = None;
        self.round = None;
        self.add_message("Pick a category to start guessing.", MessageStyle::Info);
    }

    /// Feed a letter guess into the current round
    pub fn handle_guess(&mut self, letter: char) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let outcome = round.guess(letter);
        self.stats.record(outcome);

        let letter = letter.to_ascii_uppercase();
        match outcome {
            GuessOutcome::Hit => {
                self.add_message(&format!("'{letter}' is in the word!"), MessageStyle::Success);
            }
            GuessOutcome::Miss => {
                self.add_message(
                    &format!("'{letter}' is not in the word."),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::Won => {
                let celebration = match self.round.as_ref().map_or(0, Round::mistakes) {
                    0 => "🎯 FLAWLESS! Not a single miss! 🌟",
                    1..=2 => "🔥 MAGNIFICENT! 🔥",
                    3..=4 => "✨ WELL PLAYED! ✨",
                    _ => "😅 PHEW! That was close! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    "Enter: new word | Tab: change category | Esc: quit",
                    MessageStyle::Info,
                );
            }
            GuessOutcome::Lost => {
                let word = self.round.as_ref().map_or_else(String::new, |r| {
                    r.word().to_string()
                });
                self.add_message(
                    &format!("💀 The word was: {word}"),
                    MessageStyle::Error,
                );
                self.add_message(
                    "Enter: new word | Tab: change category | Esc: quit",
                    MessageStyle::Info,
                );
            }
            GuessOutcome::Ignored => {
                if self.round.as_ref().is_some_and(Round::is_over) {
                    self.add_message("Round is over. Enter starts a new word.", MessageStyle::Info);
                } else {
                    self.add_message(
                        &format!("'{letter}' was already guessed."),
                        MessageStyle::Info,
                    );
                }
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.screen {
                    Screen::CategorySelect => handle_category_key(&mut app, key.code),
                    Screen::Playing => handle_playing_key(&mut app, key.code),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_category_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.choose_category(),
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_playing_key(app: &mut App, code: KeyCode) {
    match code {
        // Every letter key is a guess, so quitting lives on Esc here
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => app.start_round(),
        KeyCode::Tab => app.change_category(),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => app.handle_guess(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;

    #[test]
    fn starts_on_selection_screen_without_category() {
        let app = App::new(None);
        assert_eq!(app.screen, Screen::CategorySelect);
        assert!(app.round.is_none());
    }

    #[test]
    fn preselected_category_skips_selection() {
        let app = App::new(Some(CategoryId::Animals));
        assert_eq!(app.screen, Screen::Playing);
        assert!(app.round.is_some());
    }

    #[test]
    fn round_start_guard_requires_category() {
        let mut app = App::new(None);
        app.start_round();
        assert_eq!(app.screen, Screen::CategorySelect);
        assert!(app.round.is_none());
    }

    #[test]
    fn choosing_a_category_starts_the_round() {
        let mut app = App::new(None);
        app.select_next();
        app.choose_category();

        assert_eq!(app.category, Some(CATEGORIES[1].id));
        assert_eq!(app.screen, Screen::Playing);
        let round = app.round.as_ref().unwrap();
        assert_eq!(round.status(), GameStatus::Playing);
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut app = App::new(None);
        app.select_prev();
        assert_eq!(app.cursor, CATEGORIES.len() - 1);
        app.select_next();
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn change_category_keeps_stats() {
        let mut app = App::new(Some(CategoryId::Movies));
        app.stats.record(GuessOutcome::Won);

        app.change_category();
        assert_eq!(app.screen, Screen::CategorySelect);
        assert!(app.round.is_none());
        assert!(app.category.is_none());
        assert_eq!(app.stats.wins, 1);
    }

    #[test]
    fn guesses_update_round_and_messages() {
        let mut app = App::new(Some(CategoryId::Countries));
        let target: char = app
            .round
            .as_ref()
            .unwrap()
            .word()
            .chars()
            .find(char::is_ascii_alphabetic)
            .unwrap();

        app.handle_guess(target);
        assert!(app.round.as_ref().unwrap().has_guessed(target));
    }

    #[test]
    fn message_backlog_is_capped() {
        let mut app = App::new(None);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }

    #[test]
    fn losing_a_round_updates_stats_once() {
        let mut app = App::new(Some(CategoryId::Food));
        // Force a loss by replacing the round with a known word
        app.round = Some(Round::new("DOG"));
        for letter in ['X', 'Y', 'Z', 'Q', 'W', 'V', 'K', 'L'] {
            app.handle_guess(letter);
        }

        assert_eq!(app.stats.losses, 1);
        assert_eq!(app.stats.current_streak, 0);
    }
}
