use thiserror::Error;

use crate::cards::Card;

/// Errors produced by the engine, split into three tiers:
/// configuration errors (fatal at construction), legality violations
/// (recoverable, the acting seat is re-prompted), and invariant
/// violations (internal defects that abort the hand).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    // --- configuration ---
    #[error("invalid seat count {seats}, must be between 2 and 9")]
    InvalidSeatCount { seats: usize },
    #[error("invalid blinds: small {small}, big {big} (big must be 2x small, both > 0)")]
    InvalidBlinds { small: u32, big: u32 },
    #[error("fewer than 2 seats have chips to play")]
    NotEnoughPlayers,

    // --- legality (recoverable, re-prompt the seat) ---
    #[error("invalid raise to {amount}, minimum raise is {minimum}")]
    InvalidRaise { amount: u32, minimum: u32 },
    #[error("raise to {amount} exceeds the {available} available to seat")]
    RaiseOverStack { amount: u32, available: u32 },
    #[error("insufficient chips for action")]
    InsufficientChips,
    #[error("not enough cards: requested {requested}, remaining {remaining}")]
    NotEnoughCards { requested: usize, remaining: usize },

    // --- turn and phase misuse ---
    #[error("it's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("no betting round in progress")]
    NoRoundInProgress,
    #[error("betting on this street is closed")]
    BettingClosed,
    #[error("betting on this street has not resolved")]
    BettingUnresolved,
    #[error("no hand in progress")]
    NoHandInProgress,
    #[error("hand already in progress")]
    HandInProgress,
    #[error("hand already complete")]
    HandAlreadyComplete,
    #[error("seat {0} already folded")]
    SeatAlreadyFolded(usize),
    #[error("seat {0} already holds two cards")]
    HoleCardsFull(usize),

    // --- invariant violations (internal defects, fail loudly) ---
    #[error("duplicate card in evaluator input: {0:?}")]
    DuplicateCard(Card),
    #[error("too many cards for evaluation: {0} (maximum 7)")]
    TooManyCards(usize),
}
