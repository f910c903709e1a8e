use crate::domain::rules::{dealer_hook_value, valid_bid_range};
use crate::domain::seats::{next_player, PlayerId};
use crate::domain::state::{require_phase, require_player, GameState, Phase};
use crate::errors::domain::{DomainError, ProtocolKind, RuleKind};

/// What an accepted bid changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidAccepted {
    pub player: PlayerId,
    pub amount: u8,
    /// Next bidder, or `None` once every player has bid.
    pub next_bidder: Option<PlayerId>,
    /// `Some(Phase::Playing)` when this bid closed the auction.
    pub phase_transitioned: Option<Phase>,
}

/// Bids `who` could legally make right now (empty when it is not their turn).
pub fn legal_bids(state: &GameState, who: PlayerId) -> Vec<u8> {
    if state.phase != Phase::Bidding || state.round.bidder != Some(who) {
        return Vec::new();
    }
    let forbidden = hook_for(state, who);
    valid_bid_range(state.round.trick_count)
        .filter(|&b| Some(b) != forbidden)
        .collect()
}

/// Forbidden dealer value given the bids already placed (never for non-dealers).
fn hook_for(state: &GameState, who: PlayerId) -> Option<u8> {
    if who != state.round.dealer {
        return None;
    }
    dealer_hook_value(state.round.trick_count, state.bids_sum())
}

/// Check a bid without touching state.
pub fn validate_bid(state: &GameState, who: PlayerId, amount: u8) -> Result<(), DomainError> {
    require_phase(state, Phase::Bidding, "place_bid")?;
    require_player(state, who)?;

    if state.round.bids_placed >= state.num_players {
        return Err(DomainError::protocol(
            ProtocolKind::BiddingOverrun,
            format!(
                "{} bids already recorded for {} players",
                state.round.bids_placed, state.num_players
            ),
        ));
    }

    let expected = state.round.bidder;
    if expected != Some(who) {
        return Err(DomainError::protocol(
            ProtocolKind::OutOfTurn,
            format!("Not your turn to bid. Expected player {expected:?}, got player {who}"),
        ));
    }

    let range = valid_bid_range(state.round.trick_count);
    if !range.contains(&amount) {
        return Err(DomainError::rule(
            RuleKind::BidOutOfRange,
            format!("Bid must be in range {range:?}"),
        ));
    }

    if hook_for(state, who) == Some(amount) {
        return Err(DomainError::rule(
            RuleKind::DealerHook,
            format!(
                "Dealer cannot bid {amount}: total bids would equal {} tricks",
                state.round.trick_count
            ),
        ));
    }

    Ok(())
}

/// Record a bid and advance the bidder; the dealer's bid opens trick play.
pub fn place_bid(state: &mut GameState, who: PlayerId, amount: u8) -> Result<BidAccepted, DomainError> {
    validate_bid(state, who, amount)?;

    state.players[who as usize].bid = Some(amount);
    state.round.bids_placed += 1;

    let mut result = BidAccepted {
        player: who,
        amount,
        next_bidder: None,
        phase_transitioned: None,
    };

    if state.round.bids_placed < state.num_players {
        let next = next_player(who, state.num_players);
        state.round.bidder = Some(next);
        result.next_bidder = Some(next);
        return Ok(result);
    }

    state.round.bidder = None;
    state.round.to_move = Some(state.round.leader);
    state.phase = Phase::Playing;
    result.phase_transitioned = Some(Phase::Playing);
    Ok(result)
}
