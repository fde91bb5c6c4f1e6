use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered sequence of the 52 unique cards, owned by one hand of play.
/// Draws remove cards from the front; `drawn + remaining` is always a
/// permutation of the full set.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Fresh uniform permutation over all 52 cards; any prior draws are
    /// returned to the deck.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Draw exactly `n` cards from the front, or fail without drawing any.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::NotEnoughCards {
                requested: n,
                remaining,
            });
        }
        let drawn = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(drawn)
    }

    /// Deal `num_cards` cards to each of `num_hands` hands, one card per
    /// hand per pass (round-robin, as a dealer would).
    pub fn deal(&mut self, num_hands: usize, num_cards: usize) -> Result<Vec<Vec<Card>>, GameError> {
        let requested = num_hands * num_cards;
        if requested > self.remaining() {
            return Err(GameError::NotEnoughCards {
                requested,
                remaining: self.remaining(),
            });
        }
        let mut hands = vec![Vec::with_capacity(num_cards); num_hands];
        for _ in 0..num_cards {
            for hand in &mut hands {
                // Checked above, cannot run dry here.
                if let Some(c) = self.deal_card() {
                    hand.push(c);
                }
            }
        }
        Ok(hands)
    }

    /// Discard the top card before a community reveal.
    pub fn burn_card(&mut self) {
        let _ = self.deal_card();
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Cards already removed from the deck, in draw order.
    pub fn drawn(&self) -> &[Card] {
        &self.cards[..self.position]
    }
}
