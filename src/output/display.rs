//! Display functions for command output

use crate::core::SessionStats;
use crate::wordlists::{CATEGORIES, pool};
use colored::Colorize;

/// Print the category registry as a table
pub fn print_category_table() {
    println!("\n{}", "─".repeat(66).cyan());
    println!(" {}", "Categories".bright_yellow().bold());
    println!("{}", "─".repeat(66).cyan());

    for category in &CATEGORIES {
        let words = match pool(category.id) {
            Some(words) => format!("{} words", words.len()),
            None => "4-12 letters".to_string(),
        };

        println!(
            " {} {:<12} {:<44} {}",
            category.icon,
            category.id.to_string().bold(),
            category.description,
            words.dimmed()
        );
    }

    println!("{}", "─".repeat(66).cyan());
    println!(
        " Play one with: {}\n",
        "gallows play --category <id>".green()
    );
}

/// Print session totals with the streak tinted by its tier
pub fn print_session_stats(stats: &SessionStats) {
    let streak = format!("{}", stats.current_streak);
    let streak = match stats.current_streak {
        0 => streak.dimmed(),
        1..=2 => streak.blue(),
        3..=4 => streak.green(),
        5..=7 => streak.yellow(),
        _ => streak.bright_red(),
    };

    println!(
        "Wins: {}  Losses: {}  Streak: {}  Best: {}",
        stats.wins.to_string().green(),
        stats.losses.to_string().red(),
        streak,
        stats.best_streak.to_string().purple()
    );
}
