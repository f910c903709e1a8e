//! The game as a synchronous state machine.
//!
//! `Game` owns one match: the domain state plus the random source used for
//! shuffling. Every mutating call validates fully before changing anything,
//! so a returned `Err` always leaves the game exactly as it was. Callers
//! sharing a game across threads must serialize access themselves.

mod player_actions;
mod round_lifecycle;


use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::{GameConfig, StartingDealer};
use crate::domain::bidding::legal_bids;
use crate::domain::rules::total_rounds;
use crate::domain::snapshot::{self, GameSnapshot};
use crate::domain::tricks::legal_plays;
use crate::domain::{Card, CompletedTrick, GameState, Phase, Player, PlayerId, RoundSummary, Suit};
use crate::errors::domain::DomainError;

pub use round_lifecycle::RoundAdvanced;

#[derive(Debug, Clone)]
pub struct Game<R = ChaCha8Rng> {
    state: GameState,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// New game shuffled from OS entropy.
    pub fn new(config: GameConfig) -> Result<Self, DomainError> {
        Self::with_rng(config, ChaCha8Rng::from_os_rng())
    }

    /// Reproducible game: same config and seed, same deals.
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, DomainError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, DomainError> {
        config.validate()?;
        let max_tricks = config.effective_max_tricks();
        let dealer = match config.starting_dealer {
            StartingDealer::Seat(seat) => seat,
            StartingDealer::Random => rng.random_range(0..config.num_players),
        };
        info!(
            num_players = config.num_players,
            requested_max_tricks = config.max_tricks,
            max_tricks,
            dealer,
            "Game created"
        );
        Ok(Self {
            state: GameState::new(config.num_players, max_tricks, dealer),
            rng,
        })
    }
}

impl<R> Game<R> {
    /// Read-only access to the full domain state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == Phase::Finished
    }

    pub fn num_players(&self) -> u8 {
        self.state.num_players
    }

    /// Trick ceiling after the deck clamp.
    pub fn max_tricks(&self) -> u8 {
        self.state.max_tricks
    }

    pub fn total_rounds(&self) -> u8 {
        total_rounds(self.state.max_tricks)
    }

    pub fn round_no(&self) -> u8 {
        self.state.round.round_no
    }

    pub fn trick_count(&self) -> u8 {
        self.state.round.trick_count
    }

    pub fn trick_no(&self) -> u8 {
        self.state.round.trick_no
    }

    pub fn dealer(&self) -> PlayerId {
        self.state.round.dealer
    }

    pub fn leader(&self) -> PlayerId {
        self.state.round.leader
    }

    /// Seat expected to bid or play next, if any.
    pub fn to_act(&self) -> Option<PlayerId> {
        snapshot::to_act(&self.state)
    }

    pub fn trump_suit(&self) -> Option<Suit> {
        self.state.context.map(|c| c.trump())
    }

    pub fn led_suit(&self) -> Option<Suit> {
        self.state.context.and_then(|c| c.led())
    }

    pub fn trump_card(&self) -> Option<Card> {
        self.state.round.trump_card.map(|id| self.state.deck.card(id))
    }

    pub fn player(&self, who: PlayerId) -> Option<&Player> {
        self.state.player(who)
    }

    /// `who`'s hand in deal order; indices match `play`'s `hand_index`.
    pub fn hand(&self, who: PlayerId) -> Option<Vec<Card>> {
        self.state.player(who).map(|p| self.state.deck.cards_of(&p.hand))
    }

    /// Hand of the seat expected to act.
    pub fn current_hand(&self) -> Option<(PlayerId, Vec<Card>)> {
        let who = self.to_act()?;
        self.hand(who).map(|hand| (who, hand))
    }

    pub fn scores(&self) -> Vec<u32> {
        self.state.players.iter().map(|p| p.score).collect()
    }

    pub fn bids(&self) -> Vec<Option<u8>> {
        self.state.players.iter().map(|p| p.bid).collect()
    }

    pub fn tricks_won(&self) -> Vec<u8> {
        self.state.players.iter().map(|p| p.tricks_won).collect()
    }

    pub fn legal_bids(&self, who: PlayerId) -> Vec<u8> {
        legal_bids(&self.state, who)
    }

    pub fn legal_plays(&self, who: PlayerId) -> Vec<usize> {
        legal_plays(&self.state, who)
    }

    /// Cards on the table for the current trick, in play order.
    pub fn current_trick(&self) -> Vec<(PlayerId, Card)> {
        self.state
            .round
            .trick
            .iter()
            .map(|&(p, id)| (p, self.state.deck.card(id)))
            .collect()
    }

    pub fn last_trick(&self) -> Option<&CompletedTrick> {
        self.state.last_trick.as_ref()
    }

    pub fn history(&self) -> &[RoundSummary] {
        &self.state.history
    }

    /// Player ids by total score, highest first; ties keep seat order.
    pub fn standings(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self.state.players.iter().map(|p| p.id).collect();
        ids.sort_by_key(|&id| std::cmp::Reverse(self.state.players[id as usize].score));
        ids
    }

    pub fn snapshot(&self, viewer: Option<PlayerId>) -> GameSnapshot {
        snapshot::snapshot(&self.state, viewer)
    }
}
