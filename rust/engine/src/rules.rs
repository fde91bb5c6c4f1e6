use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// A player action after validation against the betting rules. Amounts
/// are the chips the seat commits right now (not street totals).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Call(u32),
    Raise(u32),
    AllIn(u32),
}

/// Validates a requested action against the betting rules for one seat.
///
/// Converts a [`PlayerAction`] into a [`ValidatedAction`] whose amount
/// is the number of chips to commit now.
///
/// # Arguments
///
/// * `stack` - chips the seat has behind
/// * `committed` - chips the seat has already put in this street
/// * `current_max` - the street's current maximum bet
/// * `big_blind` - the table's big blind (sets the raise floor)
/// * `action` - the requested action
///
/// # Rules
///
/// * `Fold` is always legal.
/// * `Call` owes `current_max - committed`; a short stack converts to an
///   all-in for the full remaining stack instead of failing.
/// * `Raise(total)` must be strictly above `current_max`, at least
///   `2 * big_blind`, and affordable within the stack. An illegal raise
///   is a recoverable error — the seat is re-prompted, never ejected.
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// // Calling a 30 bet having already posted 10 commits 20 more.
/// let va = validate_action(100, 10, 30, 10, PlayerAction::Call);
/// assert_eq!(va, Ok(ValidatedAction::Call(20)));
///
/// // A short stack calls all-in instead.
/// let va = validate_action(15, 0, 30, 10, PlayerAction::Call);
/// assert_eq!(va, Ok(ValidatedAction::AllIn(15)));
/// ```
pub fn validate_action(
    stack: u32,
    committed: u32,
    current_max: u32,
    big_blind: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Call => {
            let owed = current_max.saturating_sub(committed);
            if owed >= stack && owed > 0 {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(owed))
            }
        }
        A::Raise(total) => {
            let minimum = (current_max + 1).max(2 * big_blind);
            if total <= current_max || total < 2 * big_blind {
                return Err(GameError::InvalidRaise {
                    amount: total,
                    minimum,
                });
            }
            let available = committed + stack;
            if total > available {
                return Err(GameError::RaiseOverStack {
                    amount: total,
                    available,
                });
            }
            let delta = total - committed;
            if delta == stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Raise(delta))
            }
        }
    }
}
