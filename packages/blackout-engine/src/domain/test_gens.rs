// Proptest generators for domain types.
// These generators ensure unique cards and valid trick layouts.

use proptest::prelude::*;

use crate::domain::{Card, Deck, PlayerId, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// `count` distinct cards drawn from the standard deck.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    let deck = Deck::standard();
    let all: Vec<Card> = deck.ids().map(|id| deck.card(id)).collect();
    Just(all).prop_shuffle().prop_map(move |mut cards| {
        cards.truncate(count);
        cards
    })
}

pub fn two_distinct_cards() -> impl Strategy<Value = (Card, Card)> {
    unique_cards(2).prop_map(|cards| (cards[0], cards[1]))
}

/// Complete trick for `2..=8` players: (table size, leader, plays in play order, trump).
pub fn complete_trick() -> impl Strategy<Value = (u8, PlayerId, Vec<(PlayerId, Card)>, Suit)> {
    (2u8..=8)
        .prop_flat_map(|n| (Just(n), 0..n, unique_cards(n as usize), suit()))
        .prop_map(|(n, leader, cards, trump)| {
            let plays = cards
                .into_iter()
                .enumerate()
                .map(|(i, c)| ((leader + i as u8) % n, c))
                .collect();
            (n, leader, plays, trump)
        })
}
