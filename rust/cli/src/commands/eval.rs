//! Eval command handler: score a hand from card notation.

use std::io::Write;

use holdem_engine::hand;

use crate::error::CliError;
use crate::formatters::{format_board, format_category};
use crate::validation::parse_cards;

/// Evaluate hole cards against a board given in text notation (e.g.
/// `--hole "As Ks" --board "Qs Js Ts 2h 3d"`) and print the resulting
/// category, tie-break key, and the five cards that make the hand.
pub fn handle_eval_command(
    hole: &str,
    board: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = parse_cards(hole).map_err(CliError::InvalidInput)?;
    let board = parse_cards(board).map_err(CliError::InvalidInput)?;
    if hole.len() > 2 {
        return Err(CliError::InvalidInput(format!(
            "at most 2 hole cards, got {}",
            hole.len()
        )));
    }
    if board.len() > 5 {
        return Err(CliError::InvalidInput(format!(
            "at most 5 board cards, got {}",
            board.len()
        )));
    }

    let rank = hand::evaluate(&hole, &board)?;
    writeln!(out, "Category: {}", format_category(&rank.category))?;
    writeln!(out, "Key: {:?}", rank.kickers)?;
    if !rank.best_cards.is_empty() {
        writeln!(out, "Best five: {}", format_board(&rank.best_cards))?;
    }
    Ok(())
}
