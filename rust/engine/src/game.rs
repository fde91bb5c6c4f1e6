use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::Player;

/// Default small blind (original table stakes: 5/10)
pub const DEFAULT_SMALL_BLIND: u32 = 5;
/// Default big blind
pub const DEFAULT_BIG_BLIND: u32 = 10;

/// Forced-bet sizes posted before any voluntary preflop action.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Blinds {
    pub small: u32,
    pub big: u32,
}

impl Blinds {
    /// # Errors
    ///
    /// Blind construction is a configuration concern: zero blinds or a
    /// big blind that is not exactly twice the small blind are rejected
    /// with [`GameError::InvalidBlinds`].
    pub fn new(small: u32, big: u32) -> Result<Self, GameError> {
        if small == 0 || big != 2 * small {
            return Err(GameError::InvalidBlinds { small, big });
        }
        Ok(Self { small, big })
    }
}

impl Default for Blinds {
    fn default() -> Self {
        Self {
            small: DEFAULT_SMALL_BLIND,
            big: DEFAULT_BIG_BLIND,
        }
    }
}

/// The table: a fixed ring of seats plus the rotating dealer button.
/// The button (and with it the blind designations) advances by one seat
/// after each hand; players never move seats.
#[derive(Debug)]
pub struct GameState {
    button_index: usize,
    players: Vec<Player>,
    blinds: Blinds,
}

impl GameState {
    /// Seat `num_players` players with `starting_stack` chips each.
    ///
    /// # Errors
    ///
    /// Fewer than 2 or more than 9 seats is a configuration error.
    pub fn new(num_players: usize, starting_stack: u32, blinds: Blinds) -> Result<Self, GameError> {
        if !(2..=9).contains(&num_players) {
            return Err(GameError::InvalidSeatCount { seats: num_players });
        }
        let players = (0..num_players)
            .map(|id| Player::new(id, starting_stack))
            .collect();
        Ok(Self {
            button_index: 0,
            players,
            blinds,
        })
    }

    pub fn blinds(&self) -> Blinds {
        self.blinds
    }

    pub fn num_seats(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn button_index(&self) -> usize {
        self.button_index
    }

    pub fn rotate_button(&mut self) {
        self.button_index = (self.button_index + 1) % self.players.len();
    }

    /// Seats still in the hand, in table order from seat 0.
    pub fn active_seats(&self) -> Vec<usize> {
        self.players
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.id())
            .collect()
    }

    /// Active seats in rotation order starting at the button (button
    /// first if it is active, else the next active seat clockwise).
    pub fn active_ring(&self) -> Vec<usize> {
        let n = self.players.len();
        (0..n)
            .map(|i| (self.button_index + i) % n)
            .filter(|&s| self.players[s].is_active())
            .collect()
    }

    /// The small- and big-blind seats for this hand, over active seats.
    /// Heads-up, the button posts the small blind and the other seat the
    /// big blind; with more seats the blinds are the two seats after the
    /// button.
    pub fn blind_seats(&self) -> (usize, usize) {
        let ring = self.active_ring();
        if ring.len() == 2 {
            (ring[0], ring[1])
        } else {
            (ring[1], ring[2])
        }
    }

    /// Seats owed a voluntary action this street, first actor first:
    /// preflop the rotation starts after the big blind (the blind seats
    /// act last); postflop it starts with the first active seat after
    /// the button. Only seats that can still act (chips behind) appear.
    pub fn action_order(&self, preflop: bool) -> Vec<usize> {
        let n = self.players.len();
        let start = if preflop {
            let (_, bb) = self.blind_seats();
            bb + 1
        } else {
            // first active seat after the button acts first (heads-up
            // this is the big blind, since the button posts the small)
            self.button_index + 1
        };
        (0..n)
            .map(|i| (start + i) % n)
            .filter(|&s| self.players[s].can_act())
            .collect()
    }
}
