//! The 52-card deck, built once per game and addressed by [`CardId`].

use super::cards_types::{Card, CardId, Rank, Suit};

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck in canonical order: suits Spades, Hearts, Clubs, Diamonds,
    /// each Two through Ace. The order never changes; only deals shuffle.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card { suit, rank });
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, id: CardId) -> Card {
        self.cards[id.index()]
    }

    pub fn cards_of(&self, ids: &[CardId]) -> Vec<Card> {
        ids.iter().map(|&id| self.card(id)).collect()
    }

    /// All ids in canonical order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        (0..self.cards.len()).map(|i| CardId(i as u8))
    }

    pub fn id_of(&self, card: Card) -> Option<CardId> {
        self.cards
            .iter()
            .position(|&c| c == card)
            .map(|i| CardId(i as u8))
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
