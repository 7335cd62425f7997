//! Command-line interface for hotseat.

use crate::play::parse_move;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Hotseat - two-player tic-tac-toe on one keyboard
#[derive(Parser, Debug)]
#[command(name = "hotseat")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "hotseat.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Name for the player holding X
        #[arg(long)]
        player_x: Option<String>,

        /// Name for the player holding O
        #[arg(long)]
        player_o: Option<String>,

        /// Start playing immediately instead of asking for names
        #[arg(long)]
        skip_names: bool,
    },

    /// Run a fixed list of moves and print each outcome as JSON
    Play {
        /// Comma-separated cells: indices 0-8 or labels such as "center"
        #[arg(short, long, value_delimiter = ',', value_parser = parse_move, required = true)]
        moves: Vec<usize>,

        /// Name for the player holding X
        #[arg(long)]
        player_x: Option<String>,

        /// Name for the player holding O
        #[arg(long)]
        player_o: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Tui {
            player_x: None,
            player_o: None,
            skip_names: false,
        }
    }
}
