use std::ops::RangeInclusive;

use super::deck::DECK_SIZE;

pub const MIN_PLAYERS: u8 = 2;
pub const DEFAULT_MAX_TRICKS: u8 = 7;
pub const MAX_TRICKS_LIMIT: u8 = 13;

/// Points for making the bid exactly, on top of one per trick.
pub const EXACT_BID_BONUS: u32 = 10;

/// Largest trick count a table of `num_players` can be dealt while still
/// leaving one card to turn up as trump.
pub fn deck_max_tricks(num_players: u8) -> u8 {
    if num_players == 0 {
        return 0;
    }
    ((DECK_SIZE - 1) / num_players as usize).min(u8::MAX as usize) as u8
}

pub fn clamp_max_tricks(num_players: u8, requested: u8) -> u8 {
    requested.min(deck_max_tricks(num_players))
}

/// Rounds climb 1..=max_tricks then fall back to 1. Saturates at `u8::MAX`
/// for ceilings no deck can deal.
pub fn total_rounds(max_tricks: u8) -> u8 {
    max_tricks.saturating_mul(2).saturating_sub(1)
}

// Trick-count schedule: 1 → 2 → ... → max → max-1 → ... → 1
pub fn trick_count_for_round(round_no: u8, max_tricks: u8) -> Option<u8> {
    if round_no == 0 || round_no > total_rounds(max_tricks) {
        return None;
    }
    if round_no <= max_tricks {
        return Some(round_no);
    }
    // round_no > max_tricks, so the result is below max_tricks.
    Some((2 * u16::from(max_tricks) - u16::from(round_no)) as u8)
}

pub fn valid_bid_range(trick_count: u8) -> RangeInclusive<u8> {
    0..=trick_count
}

/// The one bid the dealer may not make: the value that would bring the total
/// to exactly `trick_count`. `None` when the others already overshoot.
pub fn dealer_hook_value(trick_count: u8, others_sum: u32) -> Option<u8> {
    (trick_count as u32)
        .checked_sub(others_sum)
        .map(|v| v as u8)
}
