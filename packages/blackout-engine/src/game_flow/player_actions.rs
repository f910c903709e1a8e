use tracing::{debug, info};

use super::Game;
use crate::domain::bidding::{place_bid, BidAccepted};
use crate::domain::tricks::{play_card, resolve_trick, PlayAccepted, TrickResolved};
use crate::domain::{Phase, PlayerId};
use crate::errors::domain::DomainError;

impl<R> Game<R> {
    /// Submit `who`'s bid.
    ///
    /// `Err` with [`DomainError::is_rejection`] means the rules refused the
    /// amount (re-prompt the same player); any other `Err` is a caller bug.
    pub fn bid(&mut self, who: PlayerId, amount: u8) -> Result<BidAccepted, DomainError> {
        let round_no = self.state.round.round_no;
        let accepted = place_bid(&mut self.state, who, amount).inspect_err(|err| {
            debug!(round_no, player = who, amount, error = %err, "Bid refused");
        })?;

        debug!(round_no, player = who, amount, "Bid accepted");
        if accepted.phase_transitioned == Some(Phase::Playing) {
            info!(
                round_no,
                bids = ?self.bids(),
                leader = self.state.round.leader,
                "Bidding complete"
            );
        }
        Ok(accepted)
    }

    /// Play the card at `hand_index` of `who`'s hand into the current trick.
    ///
    /// Same error contract as [`Game::bid`]; failing to follow suit is a
    /// rejection.
    pub fn play(&mut self, who: PlayerId, hand_index: usize) -> Result<PlayAccepted, DomainError> {
        let round_no = self.state.round.round_no;
        let trick_no = self.state.round.trick_no;
        let accepted = play_card(&mut self.state, who, hand_index).inspect_err(|err| {
            debug!(round_no, trick_no, player = who, hand_index, error = %err, "Play refused");
        })?;

        debug!(
            round_no,
            trick_no,
            player = who,
            card = %accepted.card,
            trick_completed = accepted.trick_completed,
            "Card played"
        );
        Ok(accepted)
    }

    /// Take the completed trick: the winner leads next and the led suit clears.
    ///
    /// TrickComplete → Playing | RoundComplete.
    pub fn trick_winner(&mut self) -> Result<TrickResolved, DomainError> {
        let resolved = resolve_trick(&mut self.state)?;
        debug!(
            round_no = self.state.round.round_no,
            trick_no = resolved.trick_no,
            winner = resolved.winner,
            card = %resolved.winning_card,
            "Trick taken"
        );
        if resolved.phase_after == Phase::RoundComplete {
            info!(
                round_no = self.state.round.round_no,
                tricks_won = ?self.tricks_won(),
                "All tricks played"
            );
        }
        Ok(resolved)
    }
}
