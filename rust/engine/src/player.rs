use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// An action requested by a seat during a betting round, before
/// validation. `Raise` carries the seat's intended total bet for the
/// street, not the increment.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Match the current street maximum (a call of 0 when unraised)
    Call,
    /// Raise the street bet to the given total
    Raise(u32),
}

/// Default starting stack for each seat in chips
pub const STARTING_STACK: u32 = 100;

/// A seat at the table: chip stack, hole cards, and whether the seat is
/// still in the hand. Chips persist across hands; cards and the active
/// flag reset each hand.
#[derive(Debug, Clone)]
pub struct Player {
    id: usize,
    stack: u32,
    /// Hole cards (0 or 2 during a hand)
    hole: [Option<Card>; 2],
    active: bool,
}

impl Player {
    pub fn new(id: usize, stack: u32) -> Self {
        Self {
            id,
            stack,
            hole: [None, None],
            active: true,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }

    /// Still in the hand (has not folded or sat out).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Active with chips behind, i.e. still owed a turn to act.
    pub fn can_act(&self) -> bool {
        self.active && self.stack > 0
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
            Ok(())
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
            Ok(())
        } else {
            Err(GameError::HoleCardsFull(self.id))
        }
    }

    pub fn clear_cards(&mut self) {
        self.hole = [None, None];
    }

    pub fn fold(&mut self) {
        self.active = false;
    }

    /// Sit the seat out of the current hand without folding a live hand
    /// (used for zero-stack seats at deal time).
    pub fn sit_out(&mut self) {
        self.active = false;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.stack = self.stack.saturating_add(amount);
    }

    /// Move chips from the stack toward the pot.
    pub fn commit(&mut self, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips);
        }
        self.stack -= amount;
        Ok(())
    }

    /// Reset for a new hand: cards cleared, seat active again. Chips are
    /// left alone so stacks carry across hands.
    pub fn reset_for_hand(&mut self) {
        self.active = true;
        self.hole = [None, None];
    }
}
