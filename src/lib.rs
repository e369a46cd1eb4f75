//! Gallows
//!
//! Terminal hangman: guess the word one letter at a time before the figure
//! on the gallows is complete. Words come from seven themed categories plus
//! a random-English-word mode; wins, losses, and streaks accumulate for the
//! session.
//!
//! # Quick Start
//!
//! ```rust
//! use gallows::core::{GameStatus, Round};
//!
//! let mut round = Round::new("CAT");
//! round.guess('C');
//! round.guess('A');
//! round.guess('T');
//! assert_eq!(round.status(), GameStatus::Won);
//! ```

// Core game state machine
pub mod core;

// Category registry and word pools
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
