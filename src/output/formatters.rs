//! Plain-text formatting helpers
//!
//! Shared between the simple CLI mode and the TUI: the staged gallows
//! drawing, the spaced masked word, and the remaining-tries hearts.

use crate::core::MAX_MISTAKES;

/// Render the gallows and figure for a given mistake count
///
/// Parts appear in the order head, body, left arm, right arm, left leg,
/// right leg; at six mistakes the figure is complete.
#[must_use]
pub fn gallows_lines(mistakes: u8) -> Vec<String> {
    let head = if mistakes >= 1 { "O" } else { " " };
    let body = if mistakes >= 2 { "│" } else { " " };
    let left_arm = if mistakes >= 3 { "/" } else { " " };
    let right_arm = if mistakes >= 4 { "\\" } else { " " };
    let left_leg = if mistakes >= 5 { "/" } else { " " };
    let right_leg = if mistakes >= 6 { "\\" } else { " " };

    vec![
        "   ┌──────┐    ".to_string(),
        "   │      │    ".to_string(),
        format!("   │      {head}    "),
        format!("   │     {left_arm}{body}{right_arm}   "),
        format!("   │     {left_leg} {right_leg}   "),
        "   │           ".to_string(),
        " ══╧══         ".to_string(),
    ]
}

/// Masked word with spacing for readability, e.g. `C _ T`
///
/// Word-breaking spaces in phrases widen to three blanks so they stay
/// visible between the letter gaps.
#[must_use]
pub fn spaced_masked_word(masked: &str) -> String {
    masked
        .chars()
        .map(|c| {
            if c == ' ' {
                "   ".to_string()
            } else {
                format!("{c} ")
            }
        })
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Remaining tries as hearts, e.g. `♥ ♥ ♥ ♡ ♡ ♡` at three mistakes
#[must_use]
pub fn tries_hearts(mistakes: u8) -> String {
    let remaining = MAX_MISTAKES.saturating_sub(mistakes) as usize;
    let spent = mistakes.min(MAX_MISTAKES) as usize;

    let mut hearts: Vec<&str> = Vec::with_capacity(MAX_MISTAKES as usize);
    hearts.extend(std::iter::repeat_n("♥", remaining));
    hearts.extend(std::iter::repeat_n("♡", spent));
    hearts.join(" ")
}
