//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::{Board, Figure, SearchMode};
use std::path::PathBuf;

/// Noughts - N×N tic-tac-toe search engine
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Minimax and alpha-beta search for 3x3 to 5x5 tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the engine config (defaults are used if it doesn't exist)
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a headless game between two search-driven players
    Play {
        /// Board side length (3, 4 or 5)
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Figure of the first player; picked at random if omitted
        #[arg(long)]
        first: Option<Figure>,

        /// Seed for opening and fallback moves
        #[arg(long)]
        seed: Option<u64>,

        /// Override the configured search algorithm
        #[arg(long)]
        search: Option<SearchMode>,
    },

    /// Search one position and report the chosen cell
    Analyze {
        /// Board as codes ("2,2,0,1,1,0,0,0,0") or symbols ("XX. OO. ...")
        board: Board,

        /// Figure to move
        #[arg(long, default_value = "cross")]
        to_move: Figure,

        /// Override the configured search algorithm
        #[arg(long)]
        search: Option<SearchMode>,

        /// Override the depth budget for this board size
        #[arg(long)]
        depth: Option<i32>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
