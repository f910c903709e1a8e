use rand::Rng;
use tracing::info;

use super::Game;
use crate::domain::dealing::deal_hands;
use crate::domain::rules::trick_count_for_round;
use crate::domain::scoring::apply_round_scoring;
use crate::domain::seats::{left_of_dealer, next_player};
use crate::domain::state::{require_phase, Phase, Round, RoundSummary};
use crate::domain::RoundContext;
use crate::errors::domain::DomainError;

/// Outcome of [`Game::advance_round`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundAdvanced {
    /// Scores for the round just finished.
    pub summary: RoundSummary,
    /// `Phase::Dealing` for the next round, or `Phase::Finished`.
    pub phase: Phase,
}

impl<R: Rng> Game<R> {
    /// Shuffle, deal this round's hands and turn up trump.
    ///
    /// Dealing → Bidding. Bidding and the first trick start left of the dealer.
    pub fn deal(&mut self) -> Result<(), DomainError> {
        let state = &mut self.state;
        require_phase(state, Phase::Dealing, "deal")?;

        let n = state.num_players;
        let deal = deal_hands(
            &state.deck,
            n,
            state.round.dealer,
            state.round.trick_count,
            &mut self.rng,
        )?;

        for (player, hand) in state.players.iter_mut().zip(deal.hands) {
            player.reset_for_round();
            player.hand = hand;
        }
        let trump_card = state.deck.card(deal.trump_card);
        state.round.trump_card = Some(deal.trump_card);
        state.round.bidder = Some(left_of_dealer(state.round.dealer, n));
        state.context = Some(RoundContext::new(trump_card.suit));
        state.phase = Phase::Bidding;

        info!(
            round_no = state.round.round_no,
            trick_count = state.round.trick_count,
            dealer = state.round.dealer,
            trump_card = %trump_card,
            "Round dealt"
        );
        Ok(())
    }
}

impl<R> Game<R> {
    /// Score the finished round, then set up the next one (dealer moves
    /// left, trick count follows the schedule) or finish the game.
    ///
    /// RoundComplete → Dealing | Finished.
    pub fn advance_round(&mut self) -> Result<RoundAdvanced, DomainError> {
        let summary = apply_round_scoring(&mut self.state)?;
        let state = &mut self.state;
        state.history.push(summary.clone());

        info!(
            round_no = summary.round_no,
            points = ?summary.points,
            "Round scored"
        );

        let next_round_no = state.round.round_no + 1;
        let Some(trick_count) = trick_count_for_round(next_round_no, state.max_tricks) else {
            state.context = None;
            state.phase = Phase::Finished;
            info!(
                rounds = state.history.len(),
                scores = ?state.players.iter().map(|p| p.score).collect::<Vec<_>>(),
                "Game finished"
            );
            return Ok(RoundAdvanced {
                summary,
                phase: Phase::Finished,
            });
        };

        let n = state.num_players;
        let dealer = next_player(state.round.dealer, n);
        state.round = Round::new(next_round_no, trick_count, dealer, n);
        for player in &mut state.players {
            player.reset_for_round();
        }
        state.context = None;
        state.phase = Phase::Dealing;

        Ok(RoundAdvanced {
            summary,
            phase: Phase::Dealing,
        })
    }
}
