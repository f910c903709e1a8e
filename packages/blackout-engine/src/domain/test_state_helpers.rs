//! Test-only game state builders for domain unit tests.

use crate::domain::round_context::RoundContext;
use crate::domain::seats::{left_of_dealer, PlayerId};
use crate::domain::state::{GameState, Phase, Round};
use crate::domain::tricks::{play_card, PlayAccepted};
use crate::domain::{Card, CardId, Suit};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, Copy)]
pub struct MakeGameStateArgs {
    pub phase: Phase,
    pub round_no: u8,
    pub trick_count: u8,
    pub max_tricks: u8,
    pub dealer: PlayerId,
    pub trump: Suit,
}

impl Default for MakeGameStateArgs {
    fn default() -> Self {
        Self {
            phase: Phase::Bidding,
            round_no: 1,
            trick_count: 1,
            max_tricks: 7,
            dealer: 0,
            trump: Suit::Clubs,
        }
    }
}

pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("hardcoded valid card token"))
        .collect()
}

/// Build a dealt round with explicit hands (one token slice per seat).
///
/// Bidding starts left of the dealer; in `Playing` the leader (left of the
/// dealer) is to move with every bid set to 0.
pub fn make_game_state(hands: &[&[&str]], args: MakeGameStateArgs) -> GameState {
    let num_players = hands.len() as u8;
    let mut state = GameState::new(num_players, args.max_tricks, args.dealer);
    state.round = Round::new(args.round_no, args.trick_count, args.dealer, num_players);
    for (player, tokens) in state.players.iter_mut().zip(hands) {
        player.hand = parse_cards(tokens)
            .into_iter()
            .map(card_id)
            .collect();
    }
    state.context = Some(RoundContext::new(args.trump));
    state.phase = args.phase;
    match args.phase {
        Phase::Bidding => {
            state.round.bidder = Some(left_of_dealer(args.dealer, num_players));
        }
        Phase::Playing => {
            for p in &mut state.players {
                p.bid = Some(0);
            }
            state.round.bids_placed = num_players;
            state.round.to_move = Some(state.round.leader);
        }
        _ => {}
    }
    state
}

pub fn card_id(card: Card) -> CardId {
    crate::domain::Deck::standard()
        .id_of(card)
        .expect("every card is in the standard deck")
}

/// Play the card named by `token` from `who`'s hand.
pub fn play_token(state: &mut GameState, who: PlayerId, token: &str) -> Result<PlayAccepted, DomainError> {
    let card = token.parse::<Card>().expect("hardcoded valid card token");
    let id = card_id(card);
    let idx = state.players[who as usize]
        .hand
        .iter()
        .position(|&c| c == id)
        .expect("card is in the player's hand");
    play_card(state, who, idx)
}
