//! Drives games forward by picking among the engine's legal moves.

use blackout_engine::{Game, Phase};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// How a simulated player chooses among legal options.
pub enum Pick {
    First,
    Last,
    Random(ChaCha8Rng),
}

impl Pick {
    pub fn random(seed: u64) -> Self {
        Pick::Random(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn pick<T: Copy>(&mut self, options: &[T]) -> T {
        assert!(!options.is_empty(), "engine offered no legal option");
        match self {
            Pick::First => options[0],
            Pick::Last => options[options.len() - 1],
            Pick::Random(rng) => options[rng.random_range(0..options.len())],
        }
    }
}

/// Bid until the round moves to Playing.
pub fn bid_round(game: &mut Game, pick: &mut Pick) {
    while game.phase() == Phase::Bidding {
        let who = game.to_act().expect("someone bids during Bidding");
        let amount = pick.pick(&game.legal_bids(who));
        game.bid(who, amount).expect("legal bid accepted");
    }
}

/// Play tricks until the round is complete.
pub fn play_tricks(game: &mut Game, pick: &mut Pick) {
    loop {
        match game.phase() {
            Phase::Playing => {
                let who = game.to_act().expect("someone plays during Playing");
                let idx = pick.pick(&game.legal_plays(who));
                game.play(who, idx).expect("legal play accepted");
            }
            Phase::TrickComplete => {
                game.trick_winner().expect("completed trick resolves");
            }
            Phase::RoundComplete => return,
            other => panic!("unexpected phase {other:?} while playing tricks"),
        }
    }
}

/// Deal, bid and play one whole round, leaving it in RoundComplete.
pub fn play_round(game: &mut Game, pick: &mut Pick) {
    game.deal().expect("deal in Dealing phase");
    bid_round(game, pick);
    play_tricks(game, pick);
}

/// Play every remaining round to the end of the game.
pub fn play_game(game: &mut Game, pick: &mut Pick) {
    while !game.is_finished() {
        play_round(game, pick);
        game.advance_round().expect("round advances");
    }
}
