//! Showdown resolution: rank every surviving hand against the board and
//! name the winner(s). Ties are first-class; equal best hands all win.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{self, HandRank};

/// One seat's evaluated holding at showdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatRank {
    pub seat: usize,
    pub rank: HandRank,
}

/// Outcome of a showdown: every contender's ranking plus the winning
/// seats (in seat order, lowest first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowdownResult {
    pub rankings: Vec<SeatRank>,
    pub winners: Vec<usize>,
}

/// Evaluate each `(seat, hole_cards)` pair against `board` and determine
/// the winning seat(s). Resolution is deterministic: the same inputs
/// always produce the same winners, regardless of ordering in `hands`.
///
/// # Errors
///
/// Propagates evaluation failures (duplicate cards between a holding and
/// the board, oversized card sets).
pub fn resolve(hands: &[(usize, Vec<Card>)], board: &[Card]) -> Result<ShowdownResult, GameError> {
    let mut rankings = Vec::with_capacity(hands.len());
    for (seat, hole) in hands {
        let rank = hand::evaluate(hole, board)?;
        rankings.push(SeatRank { seat: *seat, rank });
    }
    rankings.sort_by_key(|r| r.seat);

    let best = rankings
        .iter()
        .map(|r| &r.rank)
        .max()
        .cloned()
        .ok_or(GameError::NoHandInProgress)?;
    let winners = rankings
        .iter()
        .filter(|r| r.rank == best)
        .map(|r| r.seat)
        .collect();

    Ok(ShowdownResult { rankings, winners })
}
