use serde::{Deserialize, Serialize};

use super::cards_types::CardId;
use super::deck::Deck;
use super::round_context::RoundContext;
use super::seats::{left_of_dealer, PlayerId};
use crate::errors::domain::{DomainError, ProtocolKind};

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Round set up; waiting for the deal.
    Dealing,
    /// Players bid in turn order, dealer last.
    Bidding,
    /// Cards are being played into the current trick.
    Playing,
    /// Every player has played; the winner has not been taken yet.
    TrickComplete,
    /// All tricks taken; waiting for scoring / next round.
    RoundComplete,
    /// Final round scored.
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    /// Card ids in deal order; play removes from the middle.
    pub hand: Vec<CardId>,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    /// Cumulative across rounds, never decreases.
    pub score: u32,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Vec::new(),
            bid: None,
            tricks_won: 0,
            score: 0,
        }
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.hand.clear();
        self.bid = None;
        self.tricks_won = 0;
    }
}

/// A trick after resolution, kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTrick {
    pub trick_no: u8,
    pub leader: PlayerId,
    /// In play order, leader first.
    pub plays: Vec<(PlayerId, CardId)>,
    pub winner: PlayerId,
}

/// Per-round state; replaced wholesale at every round transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// 1-based.
    pub round_no: u8,
    pub trick_count: u8,
    pub dealer: PlayerId,
    /// Leads the current trick.
    pub leader: PlayerId,
    /// Expected bidder (Bidding phase only).
    pub bidder: Option<PlayerId>,
    /// Expected player to move (Playing phase only).
    pub to_move: Option<PlayerId>,
    /// Bids accepted so far this round.
    pub bids_placed: u8,
    /// 1-based trick number within the round.
    pub trick_no: u8,
    /// Plays for the current trick in play order (who, card).
    pub trick: Vec<(PlayerId, CardId)>,
    /// Card turned up after the deal; its suit is trump.
    pub trump_card: Option<CardId>,
}

impl Round {
    pub(crate) fn new(round_no: u8, trick_count: u8, dealer: PlayerId, num_players: u8) -> Self {
        Self {
            round_no,
            trick_count,
            dealer,
            leader: left_of_dealer(dealer, num_players),
            bidder: None,
            to_move: None,
            bids_placed: 0,
            trick_no: 1,
            trick: Vec::with_capacity(num_players as usize),
            trump_card: None,
        }
    }
}

/// Per-round results appended when the round is scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_no: u8,
    pub trick_count: u8,
    pub dealer: PlayerId,
    pub bids: Vec<u8>,
    pub tricks_won: Vec<u8>,
    pub points: Vec<u32>,
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub num_players: u8,
    /// After the deck clamp.
    pub max_tricks: u8,
    pub deck: Deck,
    pub players: Vec<Player>,
    pub round: Round,
    /// `None` until the round is dealt.
    pub context: Option<RoundContext>,
    pub phase: Phase,
    pub last_trick: Option<CompletedTrick>,
    pub history: Vec<RoundSummary>,
}

impl GameState {
    /// Fresh game waiting for the first deal. `num_players` must already be
    /// validated (see `GameConfig::validate`).
    pub(crate) fn new(num_players: u8, max_tricks: u8, dealer: PlayerId) -> Self {
        Self {
            num_players,
            max_tricks,
            deck: Deck::standard(),
            players: (0..num_players).map(Player::new).collect(),
            round: Round::new(1, 1, dealer, num_players),
            context: None,
            phase: Phase::Dealing,
            last_trick: None,
            history: Vec::new(),
        }
    }

    pub fn player(&self, who: PlayerId) -> Option<&Player> {
        self.players.get(who as usize)
    }

    pub fn bids_sum(&self) -> u32 {
        self.players
            .iter()
            .filter_map(|p| p.bid)
            .map(u32::from)
            .sum()
    }
}

pub fn require_phase(state: &GameState, expected: Phase, ctx: &'static str) -> Result<(), DomainError> {
    if state.phase != expected {
        return Err(DomainError::protocol(
            ProtocolKind::PhaseMismatch,
            format!("{ctx} requires {expected:?}, game is in {:?}", state.phase),
        ));
    }
    Ok(())
}

pub fn require_player(state: &GameState, who: PlayerId) -> Result<&Player, DomainError> {
    state.player(who).ok_or_else(|| {
        DomainError::protocol(
            ProtocolKind::UnknownPlayer,
            format!("No player {who} at a table of {}", state.num_players),
        )
    })
}

pub fn require_context(state: &GameState, ctx: &'static str) -> Result<RoundContext, DomainError> {
    state.context.ok_or_else(|| {
        DomainError::protocol(
            ProtocolKind::PhaseMismatch,
            format!("Invariant violated: round context must be set ({ctx})"),
        )
    })
}
