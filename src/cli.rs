//! Command-line interface for strictly_mnk.

use clap::{Args, Parser, Subcommand};

/// Strictly MNK - generalized tic-tac-toe with a perfect-play opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_mnk")]
#[command(about = "Generalized tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rounds in the terminal
    Play {
        /// Path to a match config (defaults to human vs minimax on 3x3)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Let minimax play both sides from an empty board
    Selfplay {
        /// Board dimensions
        #[command(flatten)]
        dims: BoardArgs,
    },

    /// Replay moves and report the position as JSON
    Analyze {
        /// Moves as "x,y" pairs separated by spaces, Cross moving first
        #[arg(short, long, default_value = "")]
        moves: String,

        /// Board dimensions
        #[command(flatten)]
        dims: BoardArgs,
    },
}

/// Board dimensions shared by several commands.
#[derive(Args, Debug, Clone, Copy)]
pub struct BoardArgs {
    /// Number of columns
    #[arg(long, default_value = "3")]
    pub width: usize,

    /// Number of rows
    #[arg(long, default_value = "3")]
    pub height: usize,

    /// Aligned cells needed to win
    #[arg(long, default_value = "3")]
    pub win_length: usize,
}
