//! CLI argument definitions using clap
//!
//! - deckgen generate "topic"      # Generate (or reuse) a deck
//! - deckgen compile deck.json     # Compile a deck file offline
//! - deckgen cache list            # Inspect cached decks
//! - deckgen view                  # Present the newest cached deck
//! - deckgen config init/show      # Configuration files

use clap::{Parser, Subcommand};
use deckgen_core::config::DEFAULT_CONFIG_FILE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deckgen")]
#[command(about = "deckgen - turn a topic into a remark.js slide deck")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (TOML or JSON)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: String,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a deck for a topic, reusing the cached deck if there is one
    ///
    /// Request quotas are kept in memory only. Every invocation starts with a
    /// full quota, so "Remaining requests" describes the current run.
    Generate {
        /// What the slides should be about
        topic: String,

        /// Write the HTML presentation to this file
        #[arg(long, short)]
        out: Option<PathBuf>,

        /// Print the compiled markdown instead of writing HTML
        #[arg(long, conflicts_with = "out")]
        markdown: bool,
    },

    /// Compile a deck JSON file into remark markdown
    Compile {
        /// Deck JSON file
        deck: PathBuf,

        /// Write the markdown to this file instead of stdout
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Inspect and manage cached decks
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Open a cached deck in the browser
    View {
        /// Position in the cache listing, newest first
        #[arg(default_value_t = 0)]
        index: usize,
    },

    /// Manage configuration files
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum CacheAction {
    /// List cached decks, newest first
    List,

    /// Print the compiled markdown of a cached deck
    Show {
        /// Position in the cache listing, newest first
        index: usize,
    },

    /// Remove the deck cached for an exact topic
    Remove {
        topic: String,
    },

    /// Remove all cached decks
    Clear,
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Display current configuration settings
    Show,

    /// Create a new configuration file with defaults
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_help_explains_per_run_quota() {
        let mut cli = Cli::command();
        let help = cli
            .find_subcommand_mut("generate")
            .unwrap()
            .render_long_help()
            .to_string();
        assert!(help.contains("Request quotas are kept in memory only"));
    }

    #[test]
    fn test_view_defaults_to_newest_deck() {
        let cli = Cli::try_parse_from(["deckgen", "view"]).unwrap();
        assert!(matches!(cli.command, Commands::View { index: 0 }));
        assert_eq!(cli.config, DEFAULT_CONFIG_FILE);
    }
}
