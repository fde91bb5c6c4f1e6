//! No-limit Texas Hold'em engine for 2 to 9 seats.
//!
//! The crate drives one hand at a time: a seeded ChaCha20 shuffle, a
//! round-robin deal, blind posting, the four betting streets as a
//! queue-based state machine, and showdown resolution with first-class
//! ties. The [`engine::Engine`] orchestrates everything and exposes a
//! turn-based API; the evaluator in [`hand`] and the betting rules in
//! [`rules`] are usable on their own.
//!
//! Determinism is a design rule: the same seed and the same action
//! sequence always replay to the same outcome, which the JSONL hand
//! histories written by [`logger`] rely on.

pub mod betting;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod showdown;

pub use betting::Street;
pub use cards::{Card, Rank, Suit};
pub use engine::{ActionOutcome, Engine, HandOutcome};
pub use errors::GameError;
pub use game::Blinds;
pub use hand::{Category, HandRank};
pub use player::{Player, PlayerAction};
pub use rules::ValidatedAction;
pub use showdown::ShowdownResult;
