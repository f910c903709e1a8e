//! Shuffling and dealing a round.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::CardId;
use super::deck::Deck;
use super::seats::{left_of_dealer, PlayerId, TurnOrder};
use crate::errors::domain::{ConfigKind, DomainError};

/// Hands for every seat plus the turned-up trump card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Vec<CardId>>,
    pub trump_card: CardId,
}

/// Fresh uniformly random permutation of the deck (Fisher-Yates).
pub fn shuffled<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Vec<CardId> {
    let mut order: Vec<CardId> = deck.ids().collect();
    order.shuffle(rng);
    order
}

/// Deal `trick_count` cards to each of `num_players` seats from `order`.
///
/// One card at a time, round-robin, starting left of the dealer. The next
/// card after the deal is the trump card.
pub fn deal_from(
    order: &[CardId],
    num_players: u8,
    dealer: PlayerId,
    trick_count: u8,
) -> Result<Deal, DomainError> {
    let needed = num_players as usize * trick_count as usize;
    if needed >= order.len() {
        return Err(DomainError::config(
            ConfigKind::DeckExhausted,
            format!(
                "Dealing {trick_count} cards to {num_players} players leaves no trump card in {} cards",
                order.len()
            ),
        ));
    }

    let mut hands: Vec<Vec<CardId>> =
        vec![Vec::with_capacity(trick_count as usize); num_players as usize];
    let seats = TurnOrder::new(num_players, left_of_dealer(dealer, num_players));
    let mut cards = order.iter().copied();
    for _ in 0..trick_count {
        for (seat, card) in seats.iter().zip(cards.by_ref()) {
            hands[seat as usize].push(card);
        }
    }
    let trump_card = cards.next().ok_or_else(|| {
        DomainError::config(ConfigKind::DeckExhausted, "No card left to turn up as trump")
    })?;

    Ok(Deal { hands, trump_card })
}

/// Shuffle `deck` with `rng` and deal a round.
pub fn deal_hands<R: Rng + ?Sized>(
    deck: &Deck,
    num_players: u8,
    dealer: PlayerId,
    trick_count: u8,
    rng: &mut R,
) -> Result<Deal, DomainError> {
    let order = shuffled(deck, rng);
    deal_from(&order, num_players, dealer, trick_count)
}
