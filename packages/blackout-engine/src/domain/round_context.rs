//! Per-round precedence state and the authoritative card comparator.
//!
//! Trump is fixed when the round is dealt; the led suit is set by the trick
//! leader and cleared when the trick is resolved. Both are single fields, so
//! two trump suits (or two led suits) at once cannot be represented.

use std::cmp::Ordering;

use super::cards_types::{Card, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundContext {
    trump: Suit,
    led: Option<Suit>,
}

impl RoundContext {
    pub fn new(trump: Suit) -> Self {
        Self { trump, led: None }
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn led(&self) -> Option<Suit> {
        self.led
    }

    pub(crate) fn set_led(&mut self, suit: Suit) {
        self.led = Some(suit);
    }

    pub(crate) fn clear_led(&mut self) {
        self.led = None;
    }

    /// See [`precedence`].
    pub fn precedence(&self, a: Card, b: Card) -> Option<Ordering> {
        precedence(a, b, self)
    }
}

/// Compare two cards for trick-taking.
///
/// - same suit: higher rank wins
/// - otherwise a trump card beats a non-trump card
/// - otherwise a card of the led suit beats an off-suit card
/// - otherwise `None`: neither card can win over the other
///
/// `Greater` means `a` wins. The same card compared with itself is `Equal`;
/// a trick never holds duplicates.
pub fn precedence(a: Card, b: Card, ctx: &RoundContext) -> Option<Ordering> {
    if a.suit == b.suit {
        return Some(a.rank.cmp(&b.rank));
    }
    let by_suit = |suit: Option<Suit>| match (Some(a.suit) == suit, Some(b.suit) == suit) {
        (true, false) => Some(Ordering::Greater),
        (false, true) => Some(Ordering::Less),
        _ => None,
    };
    by_suit(Some(ctx.trump)).or_else(|| by_suit(ctx.led))
}
