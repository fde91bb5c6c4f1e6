//! Card, board, and action formatters for terminal display.
//!
//! Pure functions over engine types. Suit symbols use Unicode (♥ ♦ ♣ ♠)
//! where the terminal supports it and fall back to ASCII letters
//! (h d c s) otherwise, so output stays readable everywhere.

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::hand::Category;
use holdem_engine::rules::ValidatedAction;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern
/// terminals (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). Unix-like
/// systems are assumed to support Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a suit as a Unicode symbol with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ten => "T".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        Rank::Ace => "A".to_string(),
        other => other.value().to_string(),
    }
}

/// Format a card as rank-then-suit, e.g. "A♠" or "As".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a board as a bracketed card list, e.g. "[A♠ K♦ 7♣]".
pub fn format_board(board: &[Card]) -> String {
    let cards: Vec<String> = board.iter().map(format_card).collect();
    format!("[{}]", cards.join(" "))
}

/// Format a validated action for display, including the chips it moved.
pub fn format_action(action: &ValidatedAction) -> String {
    match action {
        ValidatedAction::Fold => "folds".to_string(),
        ValidatedAction::Call(0) => "checks".to_string(),
        ValidatedAction::Call(amount) => format!("calls {}", amount),
        ValidatedAction::Raise(amount) => format!("raises {}", amount),
        ValidatedAction::AllIn(amount) => format!("goes all-in for {}", amount),
    }
}

/// Human-readable hand category name.
pub fn format_category(category: &Category) -> &'static str {
    match category {
        Category::NoHand => "no hand",
        Category::HighCard => "high card",
        Category::OnePair => "one pair",
        Category::TwoPair => "two pair",
        Category::ThreeOfAKind => "three of a kind",
        Category::Straight => "straight",
        Category::Flush => "flush",
        Category::FullHouse => "full house",
        Category::FourOfAKind => "four of a kind",
        Category::StraightFlush => "straight flush",
        Category::RoyalFlush => "royal flush",
    }
}
