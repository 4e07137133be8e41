//! Command-line argument definitions for the drawfive binary.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "drawfive",
    version,
    about = "Five-card-draw poker simulator",
    disable_help_subcommand = true
)]
pub struct DrawfiveCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive session against bot opponents
    Play {
        /// Number of rounds to play (default: 1)
        #[arg(long)]
        rounds: Option<u32>,
        /// RNG seed for reproducible shuffles
        #[arg(long)]
        seed: Option<u64>,
        /// Number of bot opponents (1-5)
        #[arg(long)]
        opponents: Option<usize>,
        /// Resume a saved session by game id
        #[arg(long)]
        load: Option<u32>,
        /// Directory for session autosave
        #[arg(long)]
        save_dir: Option<String>,
    },
    /// Deal one hand per seat and show evaluator labels
    Deal {
        /// RNG seed for reproducible dealing
        #[arg(long)]
        seed: Option<u64>,
        /// Number of bot opponents (1-5)
        #[arg(long)]
        opponents: Option<usize>,
    },
    /// Run bot-only rounds and record JSONL round histories
    Sim {
        /// Number of rounds to simulate
        #[arg(long)]
        rounds: u64,
        /// Path for JSONL round records
        #[arg(long)]
        output: Option<String>,
        /// RNG seed for reproducible simulation
        #[arg(long)]
        seed: Option<u64>,
        /// Number of bot seats beyond the first (1-5)
        #[arg(long)]
        opponents: Option<usize>,
    },
    /// Aggregate statistics from a JSONL round-record file
    Stats {
        /// Path to a .jsonl or .jsonl.zst round-record file
        #[arg(long)]
        input: String,
    },
    /// Convert a JSONL round-record file to another format
    Export {
        /// Path to a .jsonl or .jsonl.zst round-record file
        #[arg(long)]
        input: String,
        /// Target format: csv or sqlite
        #[arg(long)]
        format: String,
        /// Output file path
        #[arg(long)]
        output: String,
    },
    /// List saved sessions
    Sessions {
        /// Session store directory (default: configured save_dir or "data")
        #[arg(long)]
        dir: Option<String>,
    },
    /// Display current configuration settings
    Cfg,
}
