//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod round_context;
pub mod rules;
pub mod scoring;
pub mod seats;
pub mod snapshot;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_trick_winner;

// Re-exports for ergonomics
pub use cards_logic::{hand_has_suit, rank_order};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, CardId, Rank, Suit};
pub use dealing::{deal_hands, Deal};
pub use deck::{Deck, DECK_SIZE};
pub use round_context::{precedence, RoundContext};
pub use rules::{total_rounds, trick_count_for_round, valid_bid_range};
pub use seats::{PlayerId, TurnOrder};
pub use state::{CompletedTrick, GameState, Phase, Player, Round, RoundSummary};
