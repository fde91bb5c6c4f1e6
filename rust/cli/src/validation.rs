//! Input parsing and validation for interactive commands.
//!
//! Covers the two kinds of user input the CLI accepts: player actions
//! during play ("fold", "call", "raise 30", "q") and card notation for
//! the eval command ("As", "Th", "2c").

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::player::PlayerAction;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a [`PlayerAction`] or a special command.
///
/// Accepted formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c", "call", or "check" → Call (calling nothing is a check)
/// - "r X" or "raise X" → Raise the street total to X
/// - "q" or "quit" → Quit command
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "call" | "check" | "c" => ParseResult::Action(PlayerAction::Call),
        "raise" | "r" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Raise requires an amount, e.g. 'raise 30'".to_string(),
                );
            }
            match parts[1].parse::<u32>() {
                Ok(amount) => ParseResult::Action(PlayerAction::Raise(amount)),
                Err(_) => ParseResult::Invalid(format!("Invalid raise amount: {}", parts[1])),
            }
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized action: {} (try fold/call/raise N/q)",
            other
        )),
    }
}

/// Parse a card like "As", "Th", or "9c" (rank then suit,
/// case-insensitive; "10" is accepted for ten). Suit symbols as printed
/// by the table display ("A♠") are accepted too.
pub fn parse_card(input: &str) -> Result<Card, String> {
    let s = input.trim();
    let lower = s.to_lowercase();
    // Split before the final character, which may be a multi-byte suit symbol.
    let suit_start = match lower.char_indices().last() {
        Some((idx, _)) => idx,
        None => return Err("Empty card".to_string()),
    };
    let (rank_str, suit_str) = lower.split_at(suit_start);
    let rank = match rank_str {
        "2" => Rank::Two,
        "3" => Rank::Three,
        "4" => Rank::Four,
        "5" => Rank::Five,
        "6" => Rank::Six,
        "7" => Rank::Seven,
        "8" => Rank::Eight,
        "9" => Rank::Nine,
        "t" | "10" => Rank::Ten,
        "j" => Rank::Jack,
        "q" => Rank::Queen,
        "k" => Rank::King,
        "a" => Rank::Ace,
        _ => return Err(format!("Unrecognized rank in card: {}", s)),
    };
    let suit = match suit_str {
        "c" | "♣" => Suit::Clubs,
        "d" | "♦" => Suit::Diamonds,
        "h" | "♥" => Suit::Hearts,
        "s" | "♠" => Suit::Spades,
        _ => return Err(format!("Unrecognized suit in card: {}", s)),
    };
    Ok(Card { suit, rank })
}

/// Parse a whitespace-separated card list like "Qs Js Ts".
pub fn parse_cards(input: &str) -> Result<Vec<Card>, String> {
    input.split_whitespace().map(parse_card).collect()
}
