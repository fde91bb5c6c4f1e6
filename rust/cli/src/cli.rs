//! Command-line argument definitions for the holdem CLI.
//!
//! Built with clap's derive API. Every subcommand maps to a handler in
//! [`crate::commands`]; parsing stays here so handlers can be driven
//! directly in tests with plain values.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em for 2-9 players at one table"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play hands of hot-seat hold'em, every seat prompted in turn
    Play {
        /// Number of seats at the table (2-9)
        #[arg(long)]
        players: Option<usize>,
        /// Number of hands to play
        #[arg(long)]
        hands: Option<u32>,
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Starting stack per seat in chips
        #[arg(long)]
        stack: Option<u32>,
        /// Append JSONL hand histories to this file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Deal one hand face-up for inspection (hole cards and full board)
    Deal {
        /// Number of seats at the table (2-9)
        #[arg(long)]
        players: Option<usize>,
        /// RNG seed for deterministic dealing
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate a hold'em hand: best five cards, category, and key
    Eval {
        /// Hole cards, e.g. "As Kh"
        #[arg(long)]
        hole: String,
        /// Board cards, e.g. "Qs Js Ts 2h 3d"
        #[arg(long, default_value = "")]
        board: String,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
