//! Property-based tests for precedence and trick winner resolution

use std::cmp::Ordering;

use blackout_test_support::proptest_config::proptest_config;
use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::test_state_helpers::card_id;
use crate::domain::tricks::evaluate_trick;
use crate::domain::{precedence, Card, Deck, PlayerId, RoundContext, Suit};

/// Independent oracle: the highest (is_trump, is_led, rank) key wins.
fn oracle_trick_winner(plays: &[(PlayerId, Card)], trump: Suit) -> PlayerId {
    let lead = plays[0].1.suit;
    plays
        .iter()
        .max_by_key(|(_, c)| (c.suit == trump, c.suit == lead, c.rank.value()))
        .map(|&(p, _)| p)
        .expect("a trick has at least one play")
}

fn ctx_with_led(trump: Suit, led: Option<Suit>) -> RoundContext {
    let mut ctx = RoundContext::new(trump);
    if let Some(suit) = led {
        ctx.set_led(suit);
    }
    ctx
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Swapping the arguments reverses the answer.
    #[test]
    fn prop_precedence_antisymmetric(
        (a, b) in test_gens::two_distinct_cards(),
        trump in test_gens::suit(),
        led in proptest::option::of(test_gens::suit()),
    ) {
        let ctx = ctx_with_led(trump, led);
        let ab = precedence(a, b, &ctx);
        let ba = precedence(b, a, &ctx);
        prop_assert_eq!(ab, ba.map(Ordering::reverse));
        prop_assert_ne!(ab, Some(Ordering::Equal));
    }

    /// Trump always beats a non-trump card, whatever the rank.
    #[test]
    fn prop_trump_beats_non_trump(
        (a, b) in test_gens::two_distinct_cards(),
        led in proptest::option::of(test_gens::suit()),
    ) {
        let ctx = ctx_with_led(a.suit, led);
        if b.suit != a.suit {
            prop_assert_eq!(precedence(a, b, &ctx), Some(Ordering::Greater));
        }
    }

    /// The folded winner matches the oracle and beats every other card.
    #[test]
    fn prop_trick_winner_unique(
        (_n, _leader, plays, trump) in test_gens::complete_trick(),
    ) {
        let deck = Deck::standard();
        let lead = plays[0].1.suit;
        let ctx = ctx_with_led(trump, Some(lead));
        let ids: Vec<_> = plays.iter().map(|&(p, c)| (p, card_id(c))).collect();

        let (winner, winning_card) = evaluate_trick(&ids, &deck, &ctx).unwrap();
        prop_assert_eq!(winner, oracle_trick_winner(&plays, trump));

        for &(p, card) in &plays {
            if p != winner {
                prop_assert_eq!(
                    precedence(winning_card, card, &ctx),
                    Some(Ordering::Greater),
                    "winner {} must beat {}", winning_card, card
                );
            }
        }

        // Winner is trump if any trump was played, else of the led suit
        let any_trump = plays.iter().any(|(_, c)| c.suit == trump);
        if any_trump {
            prop_assert_eq!(winning_card.suit, trump);
        } else {
            prop_assert_eq!(winning_card.suit, lead);
        }
    }
}
