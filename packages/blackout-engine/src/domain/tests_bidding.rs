use crate::domain::bidding::{legal_bids, place_bid};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{make_game_state, MakeGameStateArgs};
use crate::errors::domain::{ProtocolKind, RuleKind};

fn empty_hands(n: usize) -> Vec<&'static [&'static str]> {
    vec![&[][..]; n]
}

#[test]
fn bidding_runs_left_of_dealer_and_ends_with_dealer() {
    let mut state = make_game_state(
        &empty_hands(4),
        MakeGameStateArgs {
            trick_count: 5,
            dealer: 3,
            ..Default::default()
        },
    );

    let bids = legal_bids(&state, 0);
    assert_eq!(bids.first().copied(), Some(0));
    assert_eq!(bids.last().copied(), Some(5));

    assert_eq!(place_bid(&mut state, 0, 3).unwrap().next_bidder, Some(1));
    assert_eq!(place_bid(&mut state, 1, 4).unwrap().next_bidder, Some(2));
    assert_eq!(place_bid(&mut state, 2, 1).unwrap().next_bidder, Some(3));
    let last = place_bid(&mut state, 3, 4).unwrap();
    assert_eq!(last.next_bidder, None);
    assert_eq!(last.phase_transitioned, Some(Phase::Playing));

    assert_eq!(state.phase, Phase::Playing);
    // First trick is led by the player left of the dealer
    assert_eq!(state.round.leader, 0);
    assert_eq!(state.round.to_move, Some(0));
    assert_eq!(state.round.bidder, None);
    let recorded: Vec<_> = state.players.iter().map(|p| p.bid).collect();
    assert_eq!(recorded, [Some(3), Some(4), Some(1), Some(4)]);
}

#[test]
fn dealer_bid_rejected_when_sum_would_equal_trick_count() {
    // trick_count = 2, dealer = 0 -> bid order: 1, 2, 3, 0
    let mut state = make_game_state(
        &empty_hands(4),
        MakeGameStateArgs {
            trick_count: 2,
            dealer: 0,
            ..Default::default()
        },
    );

    place_bid(&mut state, 1, 0).unwrap();
    place_bid(&mut state, 2, 1).unwrap();
    place_bid(&mut state, 3, 0).unwrap();

    // 0 + 1 + 0 + 1 == 2
    let err = place_bid(&mut state, 0, 1).unwrap_err();
    assert_eq!(err.rule_kind(), Some(RuleKind::DealerHook));
    assert!(err.is_rejection());
    assert!(err.to_string().contains("Dealer cannot bid"));

    // Nothing moved: same bidder, same phase, no bid recorded
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.round.bidder, Some(0));
    assert_eq!(state.players[0].bid, None);
    assert_eq!(state.round.bids_placed, 3);

    assert_eq!(legal_bids(&state, 0), vec![0, 2]);
    place_bid(&mut state, 0, 2).unwrap();
    assert_ne!(state.bids_sum(), 2);
}

#[test]
fn dealer_may_bid_anything_when_others_overshoot() {
    let mut state = make_game_state(
        &empty_hands(3),
        MakeGameStateArgs {
            trick_count: 2,
            dealer: 2,
            ..Default::default()
        },
    );
    place_bid(&mut state, 0, 2).unwrap();
    place_bid(&mut state, 1, 2).unwrap();
    assert_eq!(legal_bids(&state, 2), vec![0, 1, 2]);
}

#[test]
fn bid_out_of_range_is_rejected_without_change() {
    let mut state = make_game_state(
        &empty_hands(4),
        MakeGameStateArgs {
            trick_count: 3,
            dealer: 3,
            ..Default::default()
        },
    );
    let before = state.clone();
    let err = place_bid(&mut state, 0, 4).unwrap_err();
    assert_eq!(err.rule_kind(), Some(RuleKind::BidOutOfRange));
    assert_eq!(state.players, before.players);
    assert_eq!(state.round, before.round);
}

#[test]
fn out_of_turn_bid_is_a_protocol_violation() {
    let mut state = make_game_state(
        &empty_hands(4),
        MakeGameStateArgs {
            trick_count: 3,
            dealer: 3,
            ..Default::default()
        },
    );
    let err = place_bid(&mut state, 2, 1).unwrap_err();
    assert_eq!(err.protocol_kind(), Some(ProtocolKind::OutOfTurn));
    assert!(!err.is_rejection());
    assert_eq!(state.round.bids_placed, 0);

    let err = place_bid(&mut state, 9, 1).unwrap_err();
    assert_eq!(err.protocol_kind(), Some(ProtocolKind::UnknownPlayer));
}

#[test]
fn bidding_cannot_wrap_past_the_leader() {
    let mut state = make_game_state(
        &empty_hands(2),
        MakeGameStateArgs {
            trick_count: 1,
            dealer: 1,
            ..Default::default()
        },
    );
    place_bid(&mut state, 0, 1).unwrap();
    place_bid(&mut state, 1, 1).unwrap();
    // Auction closed; the leader may not bid again
    let err = place_bid(&mut state, 0, 0).unwrap_err();
    assert_eq!(err.protocol_kind(), Some(ProtocolKind::PhaseMismatch));
}

#[test]
fn overrun_is_detected_even_if_phase_was_not_advanced() {
    let mut state = make_game_state(
        &empty_hands(2),
        MakeGameStateArgs {
            trick_count: 1,
            dealer: 1,
            ..Default::default()
        },
    );
    state.round.bids_placed = 2;
    let err = place_bid(&mut state, 0, 0).unwrap_err();
    assert_eq!(err.protocol_kind(), Some(ProtocolKind::BiddingOverrun));
}

#[test]
fn legal_bids_empty_for_non_bidder() {
    let state = make_game_state(
        &empty_hands(4),
        MakeGameStateArgs {
            trick_count: 3,
            dealer: 3,
            ..Default::default()
        },
    );
    assert!(legal_bids(&state, 1).is_empty());
}
