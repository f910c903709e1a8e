//! Core card-related types: Suit, Rank, Card, CardId

use serde::{Deserialize, Serialize};

use crate::domain::deck::DECK_SIZE;
use crate::errors::domain::DomainError;

/// A suit is a plain identifier. Whether it is trump or led this trick lives
/// in [`RoundContext`](crate::domain::RoundContext), never on the suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    /// Canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Integer value, 2..=14 (Jack 11, Queen 12, King 13, Ace 14).
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.value()
    }
}

impl TryFrom<u8> for Rank {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.value() == value)
            .ok_or_else(|| DomainError::parse(format!("Rank out of range 2..=14: {value}")))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// Stable index of a card in the game's [`Deck`](crate::domain::Deck).
///
/// Only the deck and the checked `TryFrom<u8>` (which serde goes through)
/// produce ids, so every id resolves to a card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardId(pub(crate) u8);

impl CardId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u8> for CardId {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) < DECK_SIZE {
            Ok(CardId(value))
        } else {
            Err(DomainError::parse(format!(
                "Card id out of range 0..{DECK_SIZE}: {value}"
            )))
        }
    }
}

impl From<CardId> for u8 {
    fn from(id: CardId) -> Self {
        id.0
    }
}
