//! Hand orchestrator: owns the deck, the table, the board, and the pot,
//! and drives one hand at a time through deal, the four betting streets,
//! and resolution.
//!
//! The engine never prompts anyone. Callers feed it [`PlayerAction`]s
//! for the seat at [`Engine::current_seat`]; legality violations come
//! back as recoverable errors that leave the hand untouched, so the
//! caller can re-prompt the same seat.

use serde::{Deserialize, Serialize};

use crate::betting::{BettingRound, Street};
use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::{Blinds, GameState};
use crate::player::{Player, PlayerAction};
use crate::rules::{self, ValidatedAction};
use crate::showdown::{self, ShowdownResult};

/// What happened when an action was applied: the resolved action, the
/// pot after it, who is still in, and whether the street's betting has
/// closed.
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub seat: usize,
    pub action: ValidatedAction,
    pub pot: u32,
    pub active_seats: Vec<usize>,
    pub betting_complete: bool,
}

/// The result of a finished hand. `showdown` is `None` when everyone
/// else folded and the survivor took the pot without showing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandOutcome {
    pub winners: Vec<usize>,
    /// Chip awards per winning seat. An uneven split leaves the odd
    /// chips with the earliest winning seat.
    pub payouts: Vec<(usize, u32)>,
    pub pot: u32,
    pub board: Vec<Card>,
    pub showdown: Option<ShowdownResult>,
}

/// Drives single hands of no-limit hold'em for 2 to 9 seats.
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    state: GameState,
    board: Vec<Card>,
    pot: u32,
    round: Option<BettingRound>,
    seed: u64,
    hand_active: bool,
}

impl Engine {
    /// # Errors
    ///
    /// Fails on an out-of-range seat count or malformed blinds.
    pub fn new(
        num_players: usize,
        starting_stack: u32,
        blinds: Blinds,
        seed: u64,
    ) -> Result<Self, GameError> {
        let state = GameState::new(num_players, starting_stack, blinds)?;
        Ok(Self {
            deck: Deck::new_with_seed(seed),
            state,
            board: Vec::new(),
            pot: 0,
            round: None,
            seed,
            hand_active: false,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn pot(&self) -> u32 {
        self.pot
    }

    pub fn board(&self) -> &[Card] {
        self.board.as_slice()
    }

    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    pub fn button_index(&self) -> usize {
        self.state.button_index()
    }

    pub fn blinds(&self) -> Blinds {
        self.state.blinds()
    }

    pub fn hand_active(&self) -> bool {
        self.hand_active
    }

    pub fn street(&self) -> Option<Street> {
        self.round.as_ref().map(BettingRound::street)
    }

    /// The seat owed the next action, or `None` when the street's
    /// betting has resolved (or no hand is running).
    pub fn current_seat(&self) -> Option<usize> {
        self.round.as_ref().and_then(BettingRound::current_seat)
    }

    /// Chips the given seat still owes to match the current bet.
    pub fn amount_to_call(&self, seat: usize) -> u32 {
        self.round
            .as_ref()
            .map(|r| r.current_max().saturating_sub(r.committed(seat)))
            .unwrap_or(0)
    }

    /// The smallest legal raise-to total for the current street.
    pub fn minimum_raise(&self) -> u32 {
        let max = self.round.as_ref().map_or(0, BettingRound::current_max);
        (max + 1).max(2 * self.state.blinds().big)
    }

    pub fn betting_complete(&self) -> bool {
        self.round.as_ref().is_none_or(BettingRound::is_complete)
    }

    /// True once the hand can be resolved: only one seat remains, or the
    /// river's betting has closed.
    pub fn hand_resolved(&self) -> bool {
        if !self.hand_active {
            return false;
        }
        if self.state.active_seats().len() <= 1 {
            return true;
        }
        matches!(&self.round, Some(r) if r.street() == Street::River && r.is_complete())
    }

    /// Start a new hand: reset seats, sit out broke ones, shuffle, deal
    /// two hole cards each (round-robin starting left of the button),
    /// post the blinds, and open preflop betting.
    ///
    /// # Errors
    ///
    /// [`GameError::HandInProgress`] if a hand is already running, or
    /// [`GameError::NotEnoughPlayers`] when fewer than two seats have
    /// chips.
    pub fn begin_hand(&mut self) -> Result<(), GameError> {
        if self.hand_active {
            return Err(GameError::HandInProgress);
        }
        for p in self.state.players_mut() {
            p.reset_for_hand();
            if p.stack() == 0 {
                p.sit_out();
            }
        }
        if self.state.active_seats().len() < 2 {
            return Err(GameError::NotEnoughPlayers);
        }
        self.board.clear();
        self.pot = 0;
        self.deck.shuffle();

        // One card at a time around the table, first card to the seat
        // left of the button, the button last.
        let ring = self.state.active_ring();
        let deal_order: Vec<usize> = ring.iter().cycle().skip(1).take(ring.len()).copied().collect();
        let hands = self.deck.deal(deal_order.len(), 2)?;
        for (&seat, cards) in deal_order.iter().zip(hands) {
            for card in cards {
                self.state.players_mut()[seat].give_card(card)?;
            }
        }

        // Blinds come out of the stacks before anyone acts; a short
        // stack posts what it has.
        let blinds = self.state.blinds();
        let (sb, bb) = self.state.blind_seats();
        let sb_amount = blinds.small.min(self.state.players()[sb].stack());
        let bb_amount = blinds.big.min(self.state.players()[bb].stack());
        self.state.players_mut()[sb].commit(sb_amount)?;
        self.state.players_mut()[bb].commit(bb_amount)?;
        self.pot += sb_amount + bb_amount;

        let mut round = BettingRound::new(
            Street::Preflop,
            self.state.num_seats(),
            self.state.action_order(true),
        );
        round.post_blind(sb, sb_amount);
        round.post_blind(bb, bb_amount);
        self.round = Some(round);
        self.hand_active = true;
        Ok(())
    }

    /// Apply `action` for `seat`. On a legality error (bad raise size,
    /// out of turn) nothing changes and the same seat stays to act, so
    /// the caller can re-prompt.
    pub fn apply_action(
        &mut self,
        seat: usize,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        if !self.hand_active {
            return Err(GameError::NoHandInProgress);
        }
        let round = self.round.as_ref().ok_or(GameError::NoRoundInProgress)?;
        let expected = round.current_seat().ok_or(GameError::BettingClosed)?;
        if seat != expected {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }
        if !self.state.players()[seat].is_active() {
            return Err(GameError::SeatAlreadyFolded(seat));
        }

        let validated = rules::validate_action(
            self.state.players()[seat].stack(),
            round.committed(seat),
            round.current_max(),
            self.state.blinds().big,
            action,
        )?;

        match validated {
            ValidatedAction::Fold => self.state.players_mut()[seat].fold(),
            ValidatedAction::Call(amount)
            | ValidatedAction::Raise(amount)
            | ValidatedAction::AllIn(amount) => {
                self.state.players_mut()[seat].commit(amount)?;
                self.pot += amount;
            }
        }

        let reopen_order = self.reopen_order(seat);
        let round = self.round.as_mut().ok_or(GameError::NoRoundInProgress)?;
        round.record(seat, &validated, &reopen_order);

        let active_seats = self.state.active_seats();
        let betting_complete = round.is_complete() || active_seats.len() <= 1;
        Ok(ActionOutcome {
            seat,
            action: validated,
            pot: self.pot,
            active_seats,
            betting_complete,
        })
    }

    /// Burn one card, deal the next street (flop 3, turn 1, river 1),
    /// and open its betting round.
    ///
    /// Seats that are all-in stay active but are owed no turn; when no
    /// seat can act the new round starts already complete, and the
    /// caller advances again until the river.
    ///
    /// # Errors
    ///
    /// [`GameError::BettingUnresolved`] if the current street's betting
    /// is still open, [`GameError::HandAlreadyComplete`] past the river.
    pub fn advance_street(&mut self) -> Result<Street, GameError> {
        if !self.hand_active {
            return Err(GameError::NoHandInProgress);
        }
        let round = self.round.as_ref().ok_or(GameError::NoRoundInProgress)?;
        if !round.is_complete() {
            return Err(GameError::BettingUnresolved);
        }
        let next = round.street().next().ok_or(GameError::HandAlreadyComplete)?;

        self.deck.burn_card();
        let count = if next == Street::Flop { 3 } else { 1 };
        let mut cards = self.deck.draw(count)?;
        self.board.append(&mut cards);

        self.round = Some(BettingRound::new(
            next,
            self.state.num_seats(),
            self.state.action_order(false),
        ));
        Ok(next)
    }

    /// Resolve the hand: pay the pot out, rotate the button, and clear
    /// the betting state. With one seat left the pot moves without a
    /// showdown; otherwise the surviving holdings are ranked against the
    /// board and ties split the pot (odd chips to the earliest seat).
    ///
    /// # Errors
    ///
    /// [`GameError::BettingUnresolved`] if more than one seat remains
    /// and the river's betting has not closed.
    pub fn finish_hand(&mut self) -> Result<HandOutcome, GameError> {
        if !self.hand_active {
            return Err(GameError::NoHandInProgress);
        }
        let active = self.state.active_seats();
        if active.len() > 1 && !self.hand_resolved() {
            return Err(GameError::BettingUnresolved);
        }

        let pot = self.pot;
        let (winners, showdown) = if active.len() == 1 {
            (active, None)
        } else {
            let mut contenders = Vec::with_capacity(active.len());
            for &seat in &active {
                let hole: Vec<Card> = self.state.players()[seat]
                    .hole_cards()
                    .iter()
                    .flatten()
                    .copied()
                    .collect();
                contenders.push((seat, hole));
            }
            let result = showdown::resolve(&contenders, &self.board)?;
            (result.winners.clone(), Some(result))
        };

        let share = pot / winners.len() as u32;
        let remainder = pot % winners.len() as u32;
        let mut payouts = Vec::with_capacity(winners.len());
        for (i, &seat) in winners.iter().enumerate() {
            let amount = share + if i == 0 { remainder } else { 0 };
            self.state.players_mut()[seat].add_chips(amount);
            payouts.push((seat, amount));
        }

        self.pot = 0;
        self.round = None;
        self.hand_active = false;
        let board = std::mem::take(&mut self.board);
        self.state.rotate_button();

        Ok(HandOutcome {
            winners,
            payouts,
            pot,
            board,
            showdown,
        })
    }

    /// Live seats in table order after `raiser`, used to re-open action
    /// when a raise lands.
    fn reopen_order(&self, raiser: usize) -> Vec<usize> {
        let n = self.state.num_seats();
        (1..n)
            .map(|i| (raiser + i) % n)
            .filter(|&s| self.state.players()[s].can_act())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(players: usize) -> Engine {
        Engine::new(players, 100, Blinds::default(), 42).unwrap()
    }

    #[test]
    fn begin_hand_deals_and_posts_blinds() {
        let mut e = engine(3);
        e.begin_hand().unwrap();
        assert_eq!(e.pot(), 15);
        for p in e.players() {
            assert_eq!(p.hole_cards().iter().flatten().count(), 2);
        }
        // button 0, sb 1, bb 2 -> seat 0 opens preflop
        assert_eq!(e.current_seat(), Some(0));
        assert_eq!(e.amount_to_call(0), 10);
        assert_eq!(e.amount_to_call(2), 0);
        assert_eq!(e.players()[1].stack(), 95);
        assert_eq!(e.players()[2].stack(), 90);
    }

    #[test]
    fn cannot_start_two_hands() {
        let mut e = engine(2);
        e.begin_hand().unwrap();
        assert_eq!(e.begin_hand(), Err(GameError::HandInProgress));
    }

    #[test]
    fn out_of_turn_action_is_rejected() {
        let mut e = engine(3);
        e.begin_hand().unwrap();
        let err = e.apply_action(1, PlayerAction::Fold).unwrap_err();
        assert_eq!(
            err,
            GameError::NotPlayersTurn {
                expected: 0,
                actual: 1
            }
        );
        // the hand is untouched
        assert_eq!(e.current_seat(), Some(0));
        assert_eq!(e.pot(), 15);
    }

    #[test]
    fn illegal_raise_leaves_seat_to_act() {
        let mut e = engine(3);
        e.begin_hand().unwrap();
        let err = e.apply_action(0, PlayerAction::Raise(12)).unwrap_err();
        assert!(matches!(err, GameError::InvalidRaise { .. }));
        assert_eq!(e.current_seat(), Some(0));
        assert_eq!(e.players()[0].stack(), 100);
    }

    #[test]
    fn folds_to_one_seat_resolve_without_showdown() {
        let mut e = engine(3);
        e.begin_hand().unwrap();
        e.apply_action(0, PlayerAction::Fold).unwrap();
        let outcome = e.apply_action(1, PlayerAction::Fold).unwrap();
        assert!(outcome.betting_complete);
        assert!(e.hand_resolved());
        let result = e.finish_hand().unwrap();
        assert_eq!(result.winners, vec![2]);
        assert!(result.showdown.is_none());
        // big blind keeps its own blind and wins the small blind
        assert_eq!(e.players()[2].stack(), 105);
        assert_eq!(e.button_index(), 1);
    }

    #[test]
    fn raise_reopens_action_for_callers() {
        let mut e = engine(3);
        e.begin_hand().unwrap();
        e.apply_action(0, PlayerAction::Call).unwrap();
        e.apply_action(1, PlayerAction::Call).unwrap();
        // big blind raises, seats 0 and 1 owe another turn
        let outcome = e.apply_action(2, PlayerAction::Raise(30)).unwrap();
        assert!(!outcome.betting_complete);
        assert_eq!(e.current_seat(), Some(0));
        assert_eq!(e.amount_to_call(0), 20);
        e.apply_action(0, PlayerAction::Call).unwrap();
        let outcome = e.apply_action(1, PlayerAction::Call).unwrap();
        assert!(outcome.betting_complete);
        assert_eq!(e.pot(), 90);
    }

    #[test]
    fn streets_deal_the_right_board_sizes() {
        let mut e = engine(2);
        e.begin_hand().unwrap();
        // heads-up: button (seat 0) posted small, acts first
        e.apply_action(0, PlayerAction::Call).unwrap();
        e.apply_action(1, PlayerAction::Call).unwrap();
        assert_eq!(e.advance_street().unwrap(), Street::Flop);
        assert_eq!(e.board().len(), 3);
        e.apply_action(1, PlayerAction::Call).unwrap();
        e.apply_action(0, PlayerAction::Call).unwrap();
        assert_eq!(e.advance_street().unwrap(), Street::Turn);
        assert_eq!(e.board().len(), 4);
        e.apply_action(1, PlayerAction::Call).unwrap();
        e.apply_action(0, PlayerAction::Call).unwrap();
        assert_eq!(e.advance_street().unwrap(), Street::River);
        assert_eq!(e.board().len(), 5);
        e.apply_action(1, PlayerAction::Call).unwrap();
        e.apply_action(0, PlayerAction::Call).unwrap();
        assert_eq!(e.advance_street(), Err(GameError::HandAlreadyComplete));
        assert!(e.hand_resolved());
    }

    #[test]
    fn cannot_advance_with_betting_open() {
        let mut e = engine(2);
        e.begin_hand().unwrap();
        assert_eq!(e.advance_street(), Err(GameError::BettingUnresolved));
    }

    #[test]
    fn all_in_runout_needs_no_further_actions() {
        let mut e = engine(2);
        e.begin_hand().unwrap();
        e.apply_action(0, PlayerAction::Raise(100)).unwrap();
        let outcome = e.apply_action(1, PlayerAction::Call).unwrap();
        assert_eq!(outcome.action, ValidatedAction::AllIn(90));
        assert!(outcome.betting_complete);
        // remaining streets open already complete
        for expected in [Street::Flop, Street::Turn, Street::River] {
            assert_eq!(e.advance_street().unwrap(), expected);
            assert!(e.betting_complete());
            assert_eq!(e.current_seat(), None);
        }
        let result = e.finish_hand().unwrap();
        assert_eq!(result.pot, 200);
        assert!(result.showdown.is_some());
        let total: u32 = e.players().iter().map(|p| p.stack()).sum();
        assert_eq!(total, 200);
    }

    #[test]
    fn chip_total_is_conserved_across_a_hand() {
        let mut e = engine(4);
        e.begin_hand().unwrap();
        e.apply_action(3, PlayerAction::Raise(30)).unwrap();
        e.apply_action(0, PlayerAction::Fold).unwrap();
        e.apply_action(1, PlayerAction::Call).unwrap();
        e.apply_action(2, PlayerAction::Fold).unwrap();
        for _ in 0..3 {
            e.advance_street().unwrap();
            // seat 1 first after the button, then seat 3
            e.apply_action(1, PlayerAction::Call).unwrap();
            e.apply_action(3, PlayerAction::Call).unwrap();
        }
        e.finish_hand().unwrap();
        let total: u32 = e.players().iter().map(|p| p.stack()).sum();
        assert_eq!(total, 400);
    }
}
