use crate::domain::rules::EXACT_BID_BONUS;
use crate::domain::state::{require_phase, GameState, Phase, RoundSummary};
use crate::errors::domain::DomainError;

/// One point per trick taken, plus the bonus for hitting the bid exactly.
pub fn round_points(bid: u8, tricks_won: u8) -> u32 {
    let tricks = u32::from(tricks_won);
    if bid == tricks_won {
        EXACT_BID_BONUS + tricks
    } else {
        tricks
    }
}

/// Apply per-round scoring to every player's running total.
///
/// Only valid in `RoundComplete`; does not change the phase (the round
/// lifecycle decides what comes next).
pub fn apply_round_scoring(state: &mut GameState) -> Result<RoundSummary, DomainError> {
    require_phase(state, Phase::RoundComplete, "apply_round_scoring")?;

    let mut summary = RoundSummary {
        round_no: state.round.round_no,
        trick_count: state.round.trick_count,
        dealer: state.round.dealer,
        bids: Vec::with_capacity(state.players.len()),
        tricks_won: Vec::with_capacity(state.players.len()),
        points: Vec::with_capacity(state.players.len()),
    };

    for player in &mut state.players {
        // Bidding completes before any trick, so every bid is set here.
        let bid = player.bid.unwrap_or_default();
        let points = round_points(bid, player.tricks_won);
        player.score += points;
        summary.bids.push(bid);
        summary.tricks_won.push(player.tricks_won);
        summary.points.push(points);
    }

    Ok(summary)
}
