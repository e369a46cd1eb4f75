//! Core domain types for hangman
//!
//! This module contains the fundamental game types: the round state machine
//! and the session statistics it feeds. All types here are pure and testable.

mod round;
mod stats;

pub use round::{GameStatus, GuessOutcome, MAX_MISTAKES, Round};
pub use stats::SessionStats;
