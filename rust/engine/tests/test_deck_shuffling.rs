use std::collections::HashSet;

use holdem_engine::cards::Card;
use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;

#[test]
fn same_seed_same_order() {
    let mut a = Deck::new_with_seed(7);
    let mut b = Deck::new_with_seed(7);
    a.shuffle();
    b.shuffle();
    let cards_a: Vec<Card> = std::iter::from_fn(|| a.deal_card()).collect();
    let cards_b: Vec<Card> = std::iter::from_fn(|| b.deal_card()).collect();
    assert_eq!(cards_a.len(), 52);
    assert_eq!(cards_a, cards_b);
}

#[test]
fn different_seeds_differ() {
    let mut a = Deck::new_with_seed(1);
    let mut b = Deck::new_with_seed(2);
    a.shuffle();
    b.shuffle();
    let cards_a: Vec<Card> = std::iter::from_fn(|| a.deal_card()).collect();
    let cards_b: Vec<Card> = std::iter::from_fn(|| b.deal_card()).collect();
    assert_ne!(cards_a, cards_b);
}

#[test]
fn shuffle_restores_a_full_unique_deck() {
    let mut deck = Deck::new_with_seed(3);
    deck.shuffle();
    deck.draw(20).unwrap();
    deck.shuffle();
    assert_eq!(deck.remaining(), 52);
    let cards: HashSet<Card> = std::iter::from_fn(|| deck.deal_card()).collect();
    assert_eq!(cards.len(), 52);
}

#[test]
fn burn_consumes_a_card_silently() {
    let mut deck = Deck::new_with_seed(4);
    deck.shuffle();
    deck.burn_card();
    assert_eq!(deck.remaining(), 51);
}

#[test]
fn round_robin_deal_alternates_between_hands() {
    let mut deck = Deck::new_with_seed(5);
    deck.shuffle();
    let mut reference = Deck::new_with_seed(5);
    reference.shuffle();
    let order = reference.draw(6).unwrap();

    let hands = deck.deal(3, 2).unwrap();
    assert_eq!(hands.len(), 3);
    // first card to each hand in turn, then the second
    assert_eq!(hands[0], vec![order[0], order[3]]);
    assert_eq!(hands[1], vec![order[1], order[4]]);
    assert_eq!(hands[2], vec![order[2], order[5]]);
}

#[test]
fn overdraw_is_refused_and_consumes_nothing() {
    let mut deck = Deck::new_with_seed(6);
    deck.shuffle();
    deck.draw(50).unwrap();
    let err = deck.draw(3).unwrap_err();
    assert_eq!(
        err,
        GameError::NotEnoughCards {
            requested: 3,
            remaining: 2
        }
    );
    assert_eq!(deck.remaining(), 2);
}
