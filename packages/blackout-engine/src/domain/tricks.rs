use std::cmp::Ordering;

use crate::domain::cards_types::CardId;
use crate::domain::deck::Deck;
use crate::domain::round_context::RoundContext;
use crate::domain::seats::{next_player, PlayerId};
use crate::domain::state::{
    require_context, require_phase, require_player, CompletedTrick, GameState, Phase,
};
use crate::domain::{hand_has_suit, Card};
use crate::errors::domain::{DomainError, ProtocolKind, RuleKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayAccepted {
    pub player: PlayerId,
    pub card: Card,
    /// Whether every player has now played to this trick.
    pub trick_completed: bool,
    /// Next to move; `None` once the trick is complete.
    pub next_player: Option<PlayerId>,
}

/// Result of taking a completed trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickResolved {
    pub trick_no: u8,
    pub winner: PlayerId,
    pub winning_card: Card,
    /// `Phase::RoundComplete` after the last trick, else `Phase::Playing`.
    pub phase_after: Phase,
}

/// Hand indices `who` may play right now (empty when it is not their turn).
pub fn legal_plays(state: &GameState, who: PlayerId) -> Vec<usize> {
    if state.phase != Phase::Playing || state.round.to_move != Some(who) {
        return Vec::new();
    }
    let Some(player) = state.player(who) else {
        return Vec::new();
    };
    let hand = state.deck.cards_of(&player.hand);
    let led = state.context.and_then(|ctx| ctx.led());
    match led {
        Some(suit) if hand_has_suit(&hand, suit) => hand
            .iter()
            .enumerate()
            .filter(|(_, c)| c.suit == suit)
            .map(|(i, _)| i)
            .collect(),
        _ => (0..hand.len()).collect(),
    }
}

/// Check a play without touching state; returns the card that would be played.
pub fn validate_play(state: &GameState, who: PlayerId, hand_index: usize) -> Result<Card, DomainError> {
    require_phase(state, Phase::Playing, "play_card")?;
    let player = require_player(state, who)?;
    let ctx = require_context(state, "play_card")?;

    let expected = state.round.to_move;
    if expected != Some(who) {
        return Err(DomainError::protocol(
            ProtocolKind::OutOfTurn,
            format!("Not your turn to play. Expected player {expected:?}, got player {who}"),
        ));
    }

    if player.hand.is_empty() {
        return Err(DomainError::protocol(
            ProtocolKind::EmptyHand,
            format!("Player {who} has no cards left"),
        ));
    }

    let Some(&card_id) = player.hand.get(hand_index) else {
        return Err(DomainError::protocol(
            ProtocolKind::HandIndexOutOfRange,
            format!(
                "Hand index {hand_index} out of range for {} cards",
                player.hand.len()
            ),
        ));
    };
    let card = state.deck.card(card_id);

    if who != state.round.leader {
        if let Some(led) = ctx.led() {
            let hand = state.deck.cards_of(&player.hand);
            if card.suit != led && hand_has_suit(&hand, led) {
                return Err(DomainError::rule(
                    RuleKind::MustFollowSuit,
                    format!("Must follow suit {led:?}; {card} is {:?}", card.suit),
                ));
            }
        }
    }

    Ok(card)
}

/// Play a card into the current trick, enforcing turn, phase and follow-suit.
pub fn play_card(
    state: &mut GameState,
    who: PlayerId,
    hand_index: usize,
) -> Result<PlayAccepted, DomainError> {
    let card = validate_play(state, who, hand_index)?;

    if who == state.round.leader {
        if let Some(ctx) = state.context.as_mut() {
            ctx.set_led(card.suit);
        }
    }

    let card_id = state.players[who as usize].hand.remove(hand_index);
    state.round.trick.push((who, card_id));

    let trick_completed = state.round.trick.len() == state.num_players as usize;
    let next = if trick_completed {
        state.round.to_move = None;
        state.phase = Phase::TrickComplete;
        None
    } else {
        let next = next_player(who, state.num_players);
        state.round.to_move = Some(next);
        Some(next)
    };

    Ok(PlayAccepted {
        player: who,
        card,
        trick_completed,
        next_player: next,
    })
}

/// Winner of a trick: fold over the plays carrying the best card so far.
///
/// `plays` must be in play order (leader first) with the led suit set in
/// `ctx`; the leader's card is then comparable with every other card, so the
/// result is unique. Incomparable pairs keep the current best.
pub fn evaluate_trick(
    plays: &[(PlayerId, CardId)],
    deck: &Deck,
    ctx: &RoundContext,
) -> Option<(PlayerId, Card)> {
    let mut iter = plays.iter().map(|&(p, id)| (p, deck.card(id)));
    let first = iter.next()?;
    Some(iter.fold(first, |best, candidate| {
        match ctx.precedence(candidate.1, best.1) {
            Some(Ordering::Greater) => candidate,
            _ => best,
        }
    }))
}

/// Take the completed trick: credit the winner, make them leader, clear the
/// led suit, and either open the next trick or finish the round.
pub fn resolve_trick(state: &mut GameState) -> Result<TrickResolved, DomainError> {
    require_phase(state, Phase::TrickComplete, "resolve_trick")?;
    let ctx = require_context(state, "resolve_trick")?;

    let (winner, winning_card) = evaluate_trick(&state.round.trick, &state.deck, &ctx)
        .ok_or_else(|| {
            DomainError::protocol(
                ProtocolKind::PhaseMismatch,
                "Invariant violated: completed trick has no plays",
            )
        })?;

    let trick_no = state.round.trick_no;
    state.players[winner as usize].tricks_won += 1;
    state.last_trick = Some(CompletedTrick {
        trick_no,
        leader: state.round.leader,
        plays: std::mem::take(&mut state.round.trick),
        winner,
    });
    if let Some(ctx) = state.context.as_mut() {
        ctx.clear_led();
    }
    state.round.leader = winner;

    let phase_after = if trick_no >= state.round.trick_count {
        state.round.to_move = None;
        Phase::RoundComplete
    } else {
        state.round.trick_no = trick_no + 1;
        state.round.to_move = Some(winner);
        Phase::Playing
    };
    state.phase = phase_after;

    Ok(TrickResolved {
        trick_no,
        winner,
        winning_card,
        phase_after,
    })
}
