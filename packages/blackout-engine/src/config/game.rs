//! Table size, trick ceiling and first dealer for one game.
//!
//! Front ends usually build this from JSON:
//!
//! ```json
//! {"num_players": 5, "max_tricks": 7, "starting_dealer": "Random"}
//! ```
//!
//! `max_tricks` defaults to 7 and `starting_dealer` to seat 0.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{
    clamp_max_tricks, deck_max_tricks, DEFAULT_MAX_TRICKS, MAX_TRICKS_LIMIT, MIN_PLAYERS,
};
use crate::domain::PlayerId;
use crate::errors::domain::{ConfigKind, DomainError};

/// Who deals the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingDealer {
    Seat(PlayerId),
    /// Drawn from the game's random source at construction.
    Random,
}

impl Default for StartingDealer {
    fn default() -> Self {
        StartingDealer::Seat(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub num_players: u8,
    #[serde(default = "default_max_tricks")]
    pub max_tricks: u8,
    #[serde(default)]
    pub starting_dealer: StartingDealer,
}

fn default_max_tricks() -> u8 {
    DEFAULT_MAX_TRICKS
}

impl GameConfig {
    pub fn new(num_players: u8) -> Self {
        Self {
            num_players,
            max_tricks: DEFAULT_MAX_TRICKS,
            starting_dealer: StartingDealer::default(),
        }
    }

    pub fn with_max_tricks(mut self, max_tricks: u8) -> Self {
        self.max_tricks = max_tricks;
        self
    }

    pub fn with_starting_dealer(mut self, dealer: StartingDealer) -> Self {
        self.starting_dealer = dealer;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.num_players < MIN_PLAYERS {
            return Err(DomainError::config(
                ConfigKind::TooFewPlayers,
                format!(
                    "At least {MIN_PLAYERS} players required, got {}",
                    self.num_players
                ),
            ));
        }
        if deck_max_tricks(self.num_players) == 0 {
            return Err(DomainError::config(
                ConfigKind::TooManyPlayers,
                format!(
                    "{} players cannot each be dealt a card and still turn up trump",
                    self.num_players
                ),
            ));
        }
        if !(1..=MAX_TRICKS_LIMIT).contains(&self.max_tricks) {
            return Err(DomainError::config(
                ConfigKind::MaxTricksOutOfRange,
                format!(
                    "max_tricks must be in 1..={MAX_TRICKS_LIMIT}, got {}",
                    self.max_tricks
                ),
            ));
        }
        if let StartingDealer::Seat(seat) = self.starting_dealer {
            if seat >= self.num_players {
                return Err(DomainError::config(
                    ConfigKind::StartingDealerOutOfRange,
                    format!(
                        "Starting dealer {seat} is not a seat at a table of {}",
                        self.num_players
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Requested `max_tricks` reduced so every round fits in one deck with a
    /// trump card to spare.
    pub fn effective_max_tricks(&self) -> u8 {
        clamp_max_tricks(self.num_players, self.max_tricks)
    }
}
