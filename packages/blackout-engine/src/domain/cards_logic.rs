//! Card game logic: same-suit rank order, checking suits in hands

use super::cards_types::{Card, Suit};

/// `Some(true)` iff `a` outranks `b` within one suit.
///
/// Cards of different suits cannot be ordered without a round context, so
/// that case is `None`; use [`precedence`](crate::domain::precedence).
pub fn rank_order(a: Card, b: Card) -> Option<bool> {
    (a.suit == b.suit).then(|| a.rank > b.rank)
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}
