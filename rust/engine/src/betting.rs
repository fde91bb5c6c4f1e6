use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::rules::ValidatedAction;

/// A betting street in Texas Hold'em.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before the flop (hole cards dealt)
    Preflop,
    /// After the flop (3 community cards)
    Flop,
    /// After the turn (4th community card)
    Turn,
    /// After the river (5th community card)
    River,
}

impl Street {
    pub fn next(self) -> Option<Street> {
        match self {
            Street::Preflop => Some(Street::Flop),
            Street::Flop => Some(Street::Turn),
            Street::Turn => Some(Street::River),
            Street::River => None,
        }
    }
}

/// One street's betting state: the current maximum bet, what each seat
/// has committed this street, and the queue of seats still owed a turn.
///
/// The round is complete when the queue is empty — every seat that can
/// act has matched the maximum or folded. A raise re-opens action by
/// re-queueing the other live seats. Per-street numbers reset when a new
/// round is built for the next street; the pot and stacks live on the
/// engine and persist for the whole hand.
#[derive(Debug)]
pub struct BettingRound {
    street: Street,
    current_max: u32,
    committed: Vec<u32>,
    to_act: VecDeque<usize>,
}

impl BettingRound {
    /// Build a round for `street` over a table of `num_seats` seats.
    /// `order` is the rotation of seats owed a turn, first actor first:
    /// after the big blind preflop, after the button on later streets.
    pub fn new(street: Street, num_seats: usize, order: Vec<usize>) -> Self {
        Self {
            street,
            current_max: 0,
            committed: vec![0; num_seats],
            to_act: order.into(),
        }
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn current_max(&self) -> u32 {
        self.current_max
    }

    pub fn committed(&self, seat: usize) -> u32 {
        self.committed[seat]
    }

    /// The seat whose turn it is, or `None` when betting has resolved.
    pub fn current_seat(&self) -> Option<usize> {
        self.to_act.front().copied()
    }

    pub fn is_complete(&self) -> bool {
        self.to_act.is_empty()
    }

    /// Record a forced blind: committed chips count toward the street
    /// maximum but do not consume the seat's turn.
    pub fn post_blind(&mut self, seat: usize, amount: u32) {
        self.committed[seat] += amount;
        self.current_max = self.current_max.max(self.committed[seat]);
    }

    /// Record `action` for the seat at the front of the queue.
    /// `reopen_order` lists the other live seats (active, chips behind)
    /// that must act again if this action is a raise, in table order
    /// after the raiser.
    ///
    /// The caller has already validated the action and moved the chips;
    /// this only advances the round's own bookkeeping.
    pub fn record(&mut self, seat: usize, action: &ValidatedAction, reopen_order: &[usize]) {
        debug_assert_eq!(self.to_act.front(), Some(&seat));
        self.to_act.pop_front();
        match action {
            ValidatedAction::Fold => {
                // A folded seat owes no further turns.
                self.to_act.retain(|&s| s != seat);
            }
            ValidatedAction::Call(amount) | ValidatedAction::AllIn(amount) => {
                self.committed[seat] += amount;
                // An all-in can exceed the max only via the raise path.
                if self.committed[seat] > self.current_max {
                    self.current_max = self.committed[seat];
                    self.reopen(seat, reopen_order);
                }
            }
            ValidatedAction::Raise(amount) => {
                self.committed[seat] += amount;
                self.current_max = self.committed[seat];
                self.reopen(seat, reopen_order);
            }
        }
    }

    fn reopen(&mut self, raiser: usize, reopen_order: &[usize]) {
        for &s in reopen_order {
            if s != raiser && !self.to_act.contains(&s) {
                self.to_act.push_back(s);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_progression_ends_after_river() {
        assert_eq!(Street::Preflop.next(), Some(Street::Flop));
        assert_eq!(Street::Flop.next(), Some(Street::Turn));
        assert_eq!(Street::Turn.next(), Some(Street::River));
        assert_eq!(Street::River.next(), None);
    }

    #[test]
    fn calls_around_close_the_round() {
        let mut round = BettingRound::new(Street::Flop, 3, vec![0, 1, 2]);
        round.record(0, &ValidatedAction::Call(0), &[]);
        round.record(1, &ValidatedAction::Call(0), &[]);
        assert!(!round.is_complete());
        round.record(2, &ValidatedAction::Call(0), &[]);
        assert!(round.is_complete());
        assert_eq!(round.current_seat(), None);
    }

    #[test]
    fn raise_reopens_action_for_live_seats() {
        let mut round = BettingRound::new(Street::Flop, 3, vec![0, 1, 2]);
        round.record(0, &ValidatedAction::Call(0), &[]);
        round.record(1, &ValidatedAction::Raise(20), &[2, 0]);
        // seat 0 already acted but must respond to the raise
        assert_eq!(round.current_seat(), Some(2));
        round.record(2, &ValidatedAction::Call(20), &[]);
        assert_eq!(round.current_seat(), Some(0));
        round.record(0, &ValidatedAction::Call(20), &[]);
        assert!(round.is_complete());
        assert_eq!(round.current_max(), 20);
    }

    #[test]
    fn fold_drops_pending_turns() {
        let mut round = BettingRound::new(Street::Flop, 3, vec![0, 1, 2]);
        round.record(0, &ValidatedAction::Raise(20), &[1, 2]);
        round.record(1, &ValidatedAction::Fold, &[]);
        round.record(2, &ValidatedAction::Call(20), &[]);
        assert!(round.is_complete());
        assert_eq!(round.committed(1), 0);
    }

    #[test]
    fn blinds_set_the_preflop_max_without_consuming_turns() {
        let mut round = BettingRound::new(Street::Preflop, 3, vec![2, 0, 1]);
        round.post_blind(0, 5);
        round.post_blind(1, 10);
        assert_eq!(round.current_max(), 10);
        assert_eq!(round.current_seat(), Some(2));
        assert_eq!(round.committed(0), 5);
    }
}
