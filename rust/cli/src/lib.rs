//! # Holdem CLI Library
//!
//! Command-line interface for the holdem engine: hot-seat play at a
//! table of 2 to 9 seats, face-up dealing for inspection, standalone
//! hand evaluation, and configuration display.
//!
//! The primary entry point is the [`run`] function, which parses the
//! argument list and dispatches to a subcommand handler. Output goes to
//! the injected `out`/`err` writers so tests can capture it.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem", "deal", "--players", "4", "--seed", "42"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Subcommands
//!
//! - `play`: interactive hot-seat hold'em, optionally logging JSONL hand histories
//! - `deal`: deal one hand face-up (hole cards and full board)
//! - `eval`: evaluate a hand given in card notation
//! - `cfg`: display the resolved configuration and value sources

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
};

pub use error::CliError;

/// Parse the argument list and execute the matching subcommand.
///
/// Returns the process exit code: `0` for success, `2` for errors.
/// Help and version requests print to `out` and return `0`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "deal", "eval", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = HoldemCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: holdem <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: holdem --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Play {
                players,
                hands,
                seed,
                stack,
                log,
            } => {
                // Real stdin for play (supports both TTY and piped input)
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                report(
                    handle_play_command(
                        players,
                        hands,
                        seed,
                        stack,
                        log,
                        out,
                        err,
                        &mut stdin_lock,
                    ),
                    err,
                )
            }
            Commands::Deal { players, seed } => report(handle_deal_command(players, seed, out), err),
            Commands::Eval { hole, board } => report(handle_eval_command(&hole, &board, out), err),
            Commands::Cfg => report(handle_cfg_command(out, err), err),
        },
    }
}

fn report(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
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
