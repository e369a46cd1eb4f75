//! Gallows - CLI
//!
//! Terminal hangman with TUI and simple line modes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use gallows::{
    commands::run_simple,
    interactive::{App, run_tui},
    output::print_category_table,
    wordlists::CategoryId,
};

#[derive(Parser)]
#[command(
    name = "gallows",
    about = "Terminal hangman with themed word categories and session streaks",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Category: animals, technology, sports, food, movies, programming, countries, random
    #[arg(short, long, global = true)]
    category: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// List the word categories
    Categories,
}

/// Resolve the -c flag against the category registry
///
/// Unknown names are rejected here so the word provider only ever sees
/// registry-known ids.
fn parse_category(name: Option<&str>) -> Result<Option<CategoryId>> {
    let Some(name) = name else {
        return Ok(None);
    };

    match CategoryId::from_id(name) {
        Some(id) => Ok(Some(id)),
        None => {
            let known: Vec<&str> = CategoryId::ALL.iter().map(|c| c.id()).collect();
            bail!("unknown category '{name}' (expected one of: {})", known.join(", "))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let category = parse_category(cli.category.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(category)),
        Commands::Simple => run_simple(category).map_err(|e| anyhow::anyhow!(e)),
        Commands::Categories => {
            print_category_table();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_flag_parses_registry_ids() {
        assert_eq!(
            parse_category(Some("movies")).unwrap(),
            Some(CategoryId::Movies)
        );
        assert_eq!(parse_category(None).unwrap(), None);
    }

    #[test]
    fn category_flag_rejects_unknown() {
        assert!(parse_category(Some("weather")).is_err());
    }
}
