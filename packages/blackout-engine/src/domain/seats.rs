//! Seat / turn math for a table of `players` seats (0..players).
//!
//! Every layer shares these for rotation and "who acts next". Moving "left"
//! is +1.

pub type PlayerId = u8;

/// Seat `delta` steps from `seat` around a table of `players`.
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i16, players: u8) -> PlayerId {
    debug_assert!(players > 0, "a table needs at least one seat");
    (seat as i16 + delta).rem_euclid(players as i16) as PlayerId
}

/// Player immediately to the left.
#[inline]
pub fn next_player(p: PlayerId, players: u8) -> PlayerId {
    seat_offset(p, 1, players)
}

/// Round-start seat: leads the first trick and bids first.
#[inline]
pub fn left_of_dealer(dealer: PlayerId, players: u8) -> PlayerId {
    next_player(dealer, players)
}

/// Returns the seat `n` steps left of `start`.
#[inline]
pub fn nth_from(start: PlayerId, n: u8, players: u8) -> PlayerId {
    seat_offset(start, n as i16, players)
}

/// Bidding starts left of the dealer and moves left by `bid_count`.
#[inline]
pub fn expected_bidder(dealer: PlayerId, bid_count: u8, players: u8) -> PlayerId {
    nth_from(left_of_dealer(dealer, players), bid_count, players)
}

/// `leader` opened the trick; `play_count` cards are already on the table.
#[inline]
pub fn expected_actor(leader: PlayerId, play_count: u8, players: u8) -> PlayerId {
    nth_from(leader, play_count, players)
}

/// One circuit of the table: exactly `total` seats, `(start + i) % total`.
///
/// `Copy`, so the same order can be walked any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    total: u8,
    start: u8,
}

impl TurnOrder {
    /// `start` may exceed `total`; it wraps.
    pub fn new(total: u8, start: u8) -> Self {
        let start = if total == 0 { 0 } else { start % total };
        Self { total, start }
    }

    pub fn start(&self) -> PlayerId {
        self.start
    }

    pub fn iter(&self) -> TurnOrderIter {
        TurnOrderIter {
            order: *self,
            i: 0,
        }
    }
}

impl IntoIterator for TurnOrder {
    type Item = PlayerId;
    type IntoIter = TurnOrderIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct TurnOrderIter {
    order: TurnOrder,
    i: u8,
}

impl Iterator for TurnOrderIter {
    type Item = PlayerId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.order.total {
            return None;
        }
        let seat = ((self.order.start as u16 + self.i as u16) % self.order.total as u16) as u8;
        self.i += 1;
        Some(seat)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.order.total - self.i) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for TurnOrderIter {}
