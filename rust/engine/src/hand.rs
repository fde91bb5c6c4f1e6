use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::GameError;

/// Hand categories from weakest to strongest. `NoHand` is the sentinel
/// for inputs of fewer than five cards and ranks below everything.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    NoHand = 0,
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

/// The result of evaluating a 0-7 card set: the category, a five-element
/// tie-break key (contributing rank values, highest first), and the five
/// cards that make the hand.
///
/// Two hands compare by category first, then by the key element-wise.
/// Equality ignores `best_cards` — hands that differ only in suits tie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
    pub best_cards: Vec<Card>,
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.kickers == other.kickers
    }
}

impl Eq for HandRank {}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.category.cmp(&other.category) {
            Ordering::Equal => self.kickers.cmp(&other.kickers),
            ord => ord,
        }
    }
}

impl HandRank {
    fn no_hand() -> Self {
        Self {
            category: Category::NoHand,
            kickers: [0; 5],
            best_cards: Vec::new(),
        }
    }
}

pub fn compare_hands(a: &HandRank, b: &HandRank) -> Ordering {
    a.cmp(b)
}

/// Evaluate the best five-card hand available from `hole` plus `board`
/// (0 to 7 cards combined).
///
/// With an empty `hole` this scores the board alone, which is the floor
/// for every player's showdown hand: since a player's candidate set
/// always contains the board, the best five of seven can never rank
/// below the community cards by themselves.
///
/// The category cascade runs strongest to weakest and returns at the
/// first match; a full house also counts three of a kind, so the order
/// is a correctness requirement, not an optimization.
///
/// # Errors
///
/// More than 7 cards or a duplicate card is an invariant violation
/// ([`GameError::TooManyCards`], [`GameError::DuplicateCard`]) — those
/// inputs cannot come from a well-formed deck.
pub fn evaluate(hole: &[Card], board: &[Card]) -> Result<HandRank, GameError> {
    let mut cards: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
    if cards.len() > 7 {
        return Err(GameError::TooManyCards(cards.len()));
    }
    let mut seen: HashSet<Card> = HashSet::with_capacity(cards.len());
    for &c in &cards {
        if !seen.insert(c) {
            return Err(GameError::DuplicateCard(c));
        }
    }
    if cards.len() < 5 {
        return Ok(HandRank::no_hand());
    }
    // Highest ranks first so kicker picks fall out of a linear scan.
    cards.sort_by(|a, b| b.rank.cmp(&a.rank));

    let mut rank_counts = [0u8; 15]; // 2..=14 used
    let mut suit_counts = [0u8; 4];
    for &c in &cards {
        rank_counts[c.rank.value() as usize] += 1;
        suit_counts[suit_index(c.suit)] += 1;
    }
    let flush_suit = crate::cards::all_suits()
        .into_iter()
        .find(|&s| suit_counts[suit_index(s)] >= 5);

    // Straight flush / royal flush
    if let Some(s) = flush_suit {
        let mut suited: Vec<u8> = cards
            .iter()
            .filter(|c| c.suit == s)
            .map(|c| c.rank.value())
            .collect();
        suited.sort_unstable();
        suited.dedup();
        if let Some(high) = straight_high(&suited) {
            let category = if high == 14 {
                Category::RoyalFlush
            } else {
                Category::StraightFlush
            };
            return Ok(HandRank {
                category,
                kickers: straight_key(high),
                best_cards: straight_cards(&cards, Some(s), high),
            });
        }
    }

    // Four of a kind
    if let Some(q) = highest_with_count(&rank_counts, 4) {
        let mut best = cards_of_rank(&cards, q, 4);
        best.extend(top_kickers(&cards, &[q], 1));
        let kicker = best[4].rank.value();
        return Ok(HandRank {
            category: Category::FourOfAKind,
            kickers: [q, q, q, q, kicker],
            best_cards: best,
        });
    }

    // Multiples, highest rank first.
    let mut trips: Vec<u8> = Vec::new();
    let mut pairs: Vec<u8> = Vec::new();
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            _ => {}
        }
    }

    // Full house: the pair may come from a second set of trips.
    if let Some(&t) = trips.first() {
        let pair = trips.get(1).copied().or_else(|| pairs.first().copied());
        if let Some(p) = pair {
            let mut best = cards_of_rank(&cards, t, 3);
            best.extend(cards_of_rank(&cards, p, 2));
            return Ok(HandRank {
                category: Category::FullHouse,
                kickers: [t, t, t, p, p],
                best_cards: best,
            });
        }
    }

    // Flush: the five highest suited cards.
    if let Some(s) = flush_suit {
        let best: Vec<Card> = cards.iter().filter(|c| c.suit == s).take(5).copied().collect();
        let mut kickers = [0u8; 5];
        for (k, c) in kickers.iter_mut().zip(best.iter()) {
            *k = c.rank.value();
        }
        return Ok(HandRank {
            category: Category::Flush,
            kickers,
            best_cards: best,
        });
    }

    // Straight over all ranks
    let mut uniq: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    uniq.sort_unstable();
    uniq.dedup();
    if let Some(high) = straight_high(&uniq) {
        return Ok(HandRank {
            category: Category::Straight,
            kickers: straight_key(high),
            best_cards: straight_cards(&cards, None, high),
        });
    }

    // Three of a kind
    if let Some(&t) = trips.first() {
        let mut best = cards_of_rank(&cards, t, 3);
        best.extend(top_kickers(&cards, &[t], 2));
        let kickers = [t, t, t, best[3].rank.value(), best[4].rank.value()];
        return Ok(HandRank {
            category: Category::ThreeOfAKind,
            kickers,
            best_cards: best,
        });
    }

    // Two pair: the two highest qualifying pairs win.
    if pairs.len() >= 2 {
        let (h, l) = (pairs[0], pairs[1]);
        let mut best = cards_of_rank(&cards, h, 2);
        best.extend(cards_of_rank(&cards, l, 2));
        best.extend(top_kickers(&cards, &[h, l], 1));
        let kicker = best[4].rank.value();
        return Ok(HandRank {
            category: Category::TwoPair,
            kickers: [h, h, l, l, kicker],
            best_cards: best,
        });
    }

    // One pair
    if let Some(&p) = pairs.first() {
        let mut best = cards_of_rank(&cards, p, 2);
        best.extend(top_kickers(&cards, &[p], 3));
        let kickers = [
            p,
            p,
            best[2].rank.value(),
            best[3].rank.value(),
            best[4].rank.value(),
        ];
        return Ok(HandRank {
            category: Category::OnePair,
            kickers,
            best_cards: best,
        });
    }

    // High card: top five ranks
    let best: Vec<Card> = cards.iter().take(5).copied().collect();
    let mut kickers = [0u8; 5];
    for (k, c) in kickers.iter_mut().zip(best.iter()) {
        *k = c.rank.value();
    }
    Ok(HandRank {
        category: Category::HighCard,
        kickers,
        best_cards: best,
    })
}

fn suit_index(s: Suit) -> usize {
    match s {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Highest straight high-card among ascending unique rank values, if any.
/// Returns 5 for the wheel (A-2-3-4-5): the Ace counts as 1 there, so
/// the wheel tie-breaks below every other straight.
fn straight_high(sorted_unique_ranks: &[u8]) -> Option<u8> {
    let mut v = sorted_unique_ranks.to_vec();
    if v.binary_search(&14).is_ok() {
        v.insert(0, 1);
    }
    let mut run = 1;
    let mut best_high = 0u8;
    for i in 1..v.len() {
        if v[i] == v[i - 1] + 1 {
            run += 1;
            if run >= 5 {
                best_high = v[i];
            }
        } else {
            run = 1;
        }
    }
    if best_high == 0 {
        None
    } else {
        Some(best_high)
    }
}

/// Tie-break key for a straight with the given high card: the run,
/// descending. The wheel (high 5) yields [5, 4, 3, 2, 1].
fn straight_key(high: u8) -> [u8; 5] {
    [high, high - 1, high - 2, high - 3, high - 4]
}

/// The five cards of the straight ending at `high`, optionally confined
/// to one suit. A key value of 1 stands for the low Ace.
fn straight_cards(cards: &[Card], suit: Option<Suit>, high: u8) -> Vec<Card> {
    straight_key(high)
        .iter()
        .map(|&v| {
            let rank = if v == 1 { Rank::Ace } else { Rank::from_u8(v) };
            cards
                .iter()
                .find(|c| c.rank == rank && suit.is_none_or(|s| c.suit == s))
                .copied()
                .expect("straight card present by construction")
        })
        .collect()
}

fn highest_with_count(rank_counts: &[u8; 15], count: u8) -> Option<u8> {
    (2..=14u8).rev().find(|&r| rank_counts[r as usize] == count)
}

/// First `n` cards of rank value `r` (cards are sorted rank-descending).
fn cards_of_rank(cards: &[Card], r: u8, n: usize) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| c.rank.value() == r)
        .take(n)
        .copied()
        .collect()
}

/// The `n` highest cards whose rank is not excluded.
fn top_kickers(cards: &[Card], exclude: &[u8], n: usize) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| !exclude.contains(&c.rank.value()))
        .take(n)
        .copied()
        .collect()
}
