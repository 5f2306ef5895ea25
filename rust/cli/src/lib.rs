//! # Arcanum CLI Library
//!
//! Command-line interface for the arcanum reading engine. Exposes
//! subcommands for performing readings, inspecting spreads, drawing raw
//! cards, and deriving lottery numbers.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["arcanum", "reading", "--spread", "three-card"];
//! let code = arcanum_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `reading`: Perform a spread reading (text or SVG output)
//! - `spreads`: List registered spreads or describe one
//! - `draw`: Draw cards from a freshly shuffled deck
//! - `lottery`: Derive lottery numbers from drawn cards
//! - `cfg`: Display current configuration settings

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod formatters;
pub mod ui;

use cli::{ArcanumCli, Commands};
use commands::{
    handle_cfg_command, handle_draw_command, handle_lottery_command, handle_reading_command,
    handle_spreads_command,
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
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["reading", "spreads", "draw", "lottery", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = ArcanumCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return 2;
                    }
                    0
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Arcanum CLI").is_err()
                        || writeln!(err, "Usage: arcanum <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return 2;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return 2;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: arcanum --help").is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
        Ok(parsed) => {
            let result = match parsed.cmd {
                Commands::Reading {
                    spread,
                    strategy,
                    seed,
                    format,
                    animate,
                    spread_file,
                } => handle_reading_command(
                    spread,
                    strategy,
                    seed,
                    format,
                    animate,
                    spread_file,
                    out,
                    err,
                ),
                Commands::Spreads { name, json } => handle_spreads_command(name, json, out),
                Commands::Draw {
                    count,
                    seed,
                    strategy,
                    reversals,
                } => handle_draw_command(count, seed, strategy, reversals, out),
                Commands::Lottery { picks, seed } => {
                    handle_lottery_command(picks, seed, out, err)
                }
                Commands::Cfg => handle_cfg_command(out),
            };
            match result {
                Ok(()) => 0,
                Err(e) => {
                    if ui::write_error(err, &e.to_string()).is_err() {
                        return 2;
                    }
                    2
                }
            }
        }
    }
}
