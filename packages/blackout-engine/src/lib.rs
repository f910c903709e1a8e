#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for Blackout (Oh Hell): deal, bid with the dealer hook,
//! play tricks under follow-suit and trump, score, rotate the dealer.
//!
//! The engine is a synchronous state machine. It never prompts anyone; a
//! caller asks [`Game::to_act`] who is up, submits a bid or play, and on a
//! rejected move (see [`DomainError::is_rejection`]) re-prompts the same
//! player.

pub mod config;
pub mod domain;
pub mod errors;
pub mod game_flow;

// Re-exports for public API
pub use config::{GameConfig, StartingDealer};
pub use domain::bidding::BidAccepted;
pub use domain::snapshot::GameSnapshot;
pub use domain::tricks::{PlayAccepted, TrickResolved};
pub use domain::{Card, CompletedTrick, Phase, PlayerId, Rank, RoundContext, RoundSummary, Suit};
pub use errors::{ConfigKind, DomainError, ProtocolKind, RuleKind};
pub use game_flow::{Game, RoundAdvanced};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    blackout_test_support::logging::init();
}
