//! Deal command handler for single-hand dealing and display.
//!
//! Deals a full hand face-up: two hole cards per seat (round-robin, as
//! at a real table) and the complete board with burns before each
//! street. Supports optional seeding for deterministic output.

use std::io::Write;

use holdem_engine::deck::Deck;

use crate::error::CliError;
use crate::formatters::{format_board, format_card};

/// Handle the deal command.
///
/// # Arguments
///
/// * `players` - Number of seats to deal to (2-9, default 2)
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
pub fn handle_deal_command(
    players: Option<usize>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let players = players.unwrap_or(2);
    if !(2..=9).contains(&players) {
        return Err(CliError::InvalidInput(format!(
            "players must be 2-9, got {}",
            players
        )));
    }
    let seed = seed.unwrap_or_else(rand::random);

    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let hands = deck.deal(players, 2)?;

    writeln!(out, "Seed: {}", seed)?;
    for (seat, hand) in hands.iter().enumerate() {
        writeln!(
            out,
            "Seat {}: {} {}",
            seat,
            format_card(&hand[0]),
            format_card(&hand[1])
        )?;
    }

    deck.burn_card();
    let mut board = deck.draw(3)?;
    writeln!(out, "Flop:  {}", format_board(&board))?;
    deck.burn_card();
    board.extend(deck.draw(1)?);
    writeln!(out, "Turn:  {}", format_board(&board))?;
    deck.burn_card();
    board.extend(deck.draw(1)?);
    writeln!(out, "River: {}", format_board(&board))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_is_deterministic_with_a_seed() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        handle_deal_command(Some(4), Some(42), &mut first).unwrap();
        handle_deal_command(Some(4), Some(42), &mut second).unwrap();
        assert_eq!(first, second);

        let text = String::from_utf8(first).unwrap();
        assert!(text.contains("Seat 0:"));
        assert!(text.contains("Seat 3:"));
        assert!(text.contains("River:"));
    }

    #[test]
    fn rejects_out_of_range_tables() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(10), Some(1), &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
