//! Simple interactive CLI mode
//!
//! Line-based hangman without the TUI.

use crate::core::{GameStatus, GuessOutcome, MAX_MISTAKES, Round, SessionStats};
use crate::output::formatters::{gallows_lines, spaced_masked_word, tries_hearts};
use crate::output::print_session_stats;
use crate::wordlists::{CATEGORIES, CategoryId, select_word};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple line-based game loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(preselected: Option<CategoryId>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Hangman - Simple Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word one letter at a time before the figure is complete.");
    println!("Commands: 'new' for a new word, 'category' to switch, 'quit' to exit\n");

    let mut stats = SessionStats::default();
    let mut category = match preselected {
        Some(category) => category,
        None => prompt_category()?,
    };

    loop {
        let mut round = Round::new(select_word(category));
        println!(
            "\n🎯 Category: {} {}\n",
            category.meta().icon,
            category.meta().name.bold()
        );

        // One round
        let finished = loop {
            print_board(&round);

            if round.is_over() {
                break true;
            }

            let input = get_user_input("Guess a letter")?;
            // Single letters are guesses, so commands are full words only
            // ("quit" works, "q" is a guess).
            match input.to_lowercase().as_str() {
                "quit" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    print_session_stats(&stats);
                    return Ok(());
                }
                "new" => {
                    println!("\n🔄 New word!\n");
                    break false;
                }
                "category" => {
                    category = prompt_category()?;
                    break false;
                }
                text => {
                    // Guesses are filtered to single alphabetic characters;
                    // anything else is ignored, not an error.
                    let Some(letter) = text.chars().find(char::is_ascii_alphabetic) else {
                        println!("{}", "Enter a letter A-Z.".dimmed());
                        continue;
                    };

                    let outcome = round.guess(letter);
                    stats.record(outcome);
                    print_outcome(letter, outcome);
                }
            }
        };

        if !finished {
            continue;
        }

        print_session_stats(&stats);
        let input = get_user_input("\nPress Enter to play again ('category' to switch, 'quit' to exit)")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "category" | "c" => category = prompt_category()?,
            _ => {} // Enter (or anything else) starts the next round
        }
    }
}

fn print_board(round: &Round) {
    println!("────────────────────────────────────────────────────────────");
    for line in gallows_lines(round.mistakes()) {
        println!("  {line}");
    }
    println!(
        "\n  Word:     {}",
        spaced_masked_word(&round.masked_word()).bold()
    );
    println!(
        "  Mistakes: {} / {MAX_MISTAKES}  {}",
        round.mistakes(),
        tries_hearts(round.mistakes())
    );
    if !round.guessed_letters().is_empty() {
        let guessed: String = round
            .guessed_letters()
            .iter()
            .map(|&c| format!("{c} "))
            .collect();
        println!("  Guessed:  {}", guessed.trim_end());
    }
    println!();

    match round.status() {
        GameStatus::Won => {
            println!("{}\n", "🎉 You won!".green().bold());
        }
        GameStatus::Lost => {
            println!(
                "{} The word was: {}\n",
                "💀 You lost!".red().bold(),
                round.word().bright_yellow().bold()
            );
        }
        GameStatus::Playing => {}
    }
}

fn print_outcome(letter: char, outcome: GuessOutcome) {
    let letter = letter.to_ascii_uppercase();
    match outcome {
        GuessOutcome::Hit | GuessOutcome::Won => {
            println!("{}", format!("✅ '{letter}' is in the word.").green());
        }
        GuessOutcome::Miss | GuessOutcome::Lost => {
            println!("{}", format!("❌ '{letter}' is not in the word.").red());
        }
        GuessOutcome::Ignored => {
            println!("{}", format!("'{letter}' was already guessed.").dimmed());
        }
    }
}

fn prompt_category() -> Result<CategoryId, String> {
    println!("\nChoose a category:\n");
    for (i, category) in CATEGORIES.iter().enumerate() {
        println!(
            "  {}. {} {:<12} {}",
            i + 1,
            category.icon,
            category.name.bold(),
            category.description.dimmed()
        );
    }
    println!();

    loop {
        let input = get_user_input("Category (number or name)")?;

        if let Ok(index) = input.parse::<usize>()
            && (1..=CATEGORIES.len()).contains(&index)
        {
            return Ok(CATEGORIES[index - 1].id);
        }

        if let Some(id) = CategoryId::from_id(&input) {
            return Ok(id);
        }

        println!("{}", "Pick one of the listed categories.".dimmed());
    }
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_string())
}
