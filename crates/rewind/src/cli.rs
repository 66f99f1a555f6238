//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a navigable, branching move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to rewind.toml when present.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Replay a move sequence and print the resulting view
    Replay {
        /// Square indices (0-8) in play order, comma separated
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,

        /// Step to jump to after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of drawing it
        #[arg(long)]
        json: bool,
    },
}
