//! # Drawfive CLI Library
//!
//! Command-line interface for the five-card-draw poker engine. Exposes
//! subcommands for interactive play, bot-only simulation, history
//! statistics, exports, and session management.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["drawfive", "deal", "--seed", "42"];
//! let code = drawfive_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against bot opponents, with session autosave/resume
//! - `deal`: Deal a single round of hands for inspection
//! - `sim`: Run bot-only rounds and record JSONL round histories
//! - `stats`: Aggregate statistics from JSONL round-record files
//! - `export`: Convert round histories to CSV or SQLite
//! - `sessions`: List saved sessions
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{Commands, DrawfiveCli};

use commands::{
    handle_cfg_command, handle_deal_command, handle_export_command, handle_play_command,
    handle_sessions_command, handle_sim_command, handle_stats_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["drawfive", "deal", "--seed", "42"];
/// let code = drawfive_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &[
        "play", "deal", "sim", "stats", "export", "sessions", "cfg",
    ];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = DrawfiveCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Drawfive Poker CLI").is_err()
                        || writeln!(err, "Usage: drawfive <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: drawfive --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Play {
                    rounds,
                    seed,
                    opponents,
                    load,
                    save_dir,
                } => {
                    // Tests inject scripted input via DRAWFIVE_TEST_INPUT;
                    // otherwise read real stdin (TTY or piped)
                    if let Ok(script) = std::env::var("DRAWFIVE_TEST_INPUT") {
                        let mut cursor = std::io::Cursor::new(script.into_bytes());
                        handle_play_command(
                            rounds, seed, opponents, load, save_dir, out, err, &mut cursor,
                        )
                    } else {
                        let stdin = std::io::stdin();
                        let mut stdin_lock = stdin.lock();
                        handle_play_command(
                            rounds,
                            seed,
                            opponents,
                            load,
                            save_dir,
                            out,
                            err,
                            &mut stdin_lock,
                        )
                    }
                }
                Commands::Deal { seed, opponents } => handle_deal_command(seed, opponents, out),
                Commands::Sim {
                    rounds,
                    output,
                    seed,
                    opponents,
                } => handle_sim_command(rounds, output, seed, opponents, out, err),
                Commands::Stats { input } => handle_stats_command(input, out, err),
                Commands::Export {
                    input,
                    format,
                    output,
                } => handle_export_command(input, format, output, out, err),
                Commands::Sessions { dir } => handle_sessions_command(dir, out, err),
                Commands::Cfg => handle_cfg_command(out, err),
            };
            match result {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
    }
}
