//! Public snapshot API for observing game state without exposing internals.
//!
//! Only the viewer's own hand is included; other hands are reduced to a card
//! count.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::legal_bids;
use crate::domain::seats::PlayerId;
use crate::domain::state::{CompletedTrick, GameState, Phase, RoundSummary};
use crate::domain::tricks::legal_plays;
use crate::domain::{Card, Deck, Suit};

/// Public info about a single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub id: PlayerId,
    pub cards_in_hand: u8,
    pub bid: Option<u8>,
    pub tricks_won: u8,
    pub score: u32,
}

/// Shared public round facts (no private hands).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPublic {
    pub round_no: u8,
    pub total_rounds: u8,
    pub trick_count: u8,
    pub trick_no: u8,
    pub dealer: PlayerId,
    pub leader: PlayerId,
    pub trump_card: Option<Card>,
    pub trump: Option<Suit>,
    pub led: Option<Suit>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickPublic {
    pub trick_no: u8,
    pub plays: Vec<(PlayerId, Card)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerId>,
}

/// The viewer's private view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerPrivate {
    pub id: PlayerId,
    pub hand: Vec<Card>,
    /// Bids the viewer may make now (Bidding phase, their turn).
    pub legal_bids: Vec<u8>,
    /// Hand indices the viewer may play now (Playing phase, their turn).
    pub legal_plays: Vec<usize>,
}

/// Top-level snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub num_players: u8,
    pub max_tricks: u8,
    pub round: RoundPublic,
    /// Seat expected to act, if anyone.
    pub to_act: Option<PlayerId>,
    pub players: Vec<PlayerPublic>,
    pub current_trick: TrickPublic,
    pub last_trick: Option<TrickPublic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_round: Option<RoundSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer: Option<ViewerPrivate>,
}

/// Seat expected to act in the current phase.
pub fn to_act(state: &GameState) -> Option<PlayerId> {
    match state.phase {
        Phase::Bidding => state.round.bidder,
        Phase::Playing => state.round.to_move,
        _ => None,
    }
}

fn trick_public(deck: &Deck, trick: &CompletedTrick) -> TrickPublic {
    TrickPublic {
        trick_no: trick.trick_no,
        plays: trick
            .plays
            .iter()
            .map(|&(p, id)| (p, deck.card(id)))
            .collect(),
        winner: Some(trick.winner),
    }
}

/// Build a snapshot as seen by `viewer` (`None` for a spectator).
pub fn snapshot(state: &GameState, viewer: Option<PlayerId>) -> GameSnapshot {
    let deck = &state.deck;
    let round = &state.round;

    let players = state
        .players
        .iter()
        .map(|p| PlayerPublic {
            id: p.id,
            cards_in_hand: p.hand.len() as u8,
            bid: p.bid,
            tricks_won: p.tricks_won,
            score: p.score,
        })
        .collect();

    let viewer = viewer.and_then(|id| state.player(id)).map(|p| ViewerPrivate {
        id: p.id,
        hand: deck.cards_of(&p.hand),
        legal_bids: legal_bids(state, p.id),
        legal_plays: legal_plays(state, p.id),
    });

    GameSnapshot {
        phase: state.phase,
        num_players: state.num_players,
        max_tricks: state.max_tricks,
        round: RoundPublic {
            round_no: round.round_no,
            total_rounds: crate::domain::rules::total_rounds(state.max_tricks),
            trick_count: round.trick_count,
            trick_no: round.trick_no,
            dealer: round.dealer,
            leader: round.leader,
            trump_card: round.trump_card.map(|id| deck.card(id)),
            trump: state.context.map(|c| c.trump()),
            led: state.context.and_then(|c| c.led()),
        },
        to_act: to_act(state),
        players,
        current_trick: TrickPublic {
            trick_no: round.trick_no,
            plays: round
                .trick
                .iter()
                .map(|&(p, id)| (p, deck.card(id)))
                .collect(),
            winner: None,
        },
        last_trick: state.last_trick.as_ref().map(|t| trick_public(deck, t)),
        previous_round: state.history.last().cloned(),
        viewer,
    }
}
