//! Domain-level error type used by every engine operation.
//!
//! Two classes matter to callers:
//!
//! - `Protocol`: the caller broke the turn/phase protocol (a bug in the front
//!   end, never a player's mistake). The operation is aborted.
//! - `Rule`: a legal-in-protocol request the rules reject (bad bid, failing to
//!   follow suit). The same player should be re-prompted.
//!
//! In both cases the game state is left exactly as it was.

use thiserror::Error;

/// Caller-side protocol violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProtocolKind {
    PhaseMismatch,
    OutOfTurn,
    UnknownPlayer,
    HandIndexOutOfRange,
    EmptyHand,
    BiddingOverrun,
}

/// Rule violations reported as a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RuleKind {
    BidOutOfRange,
    /// Dealer's bid would make the bids sum to the trick count.
    DealerHook,
    MustFollowSuit,
}

/// Game construction and deal configuration problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigKind {
    TooFewPlayers,
    TooManyPlayers,
    MaxTricksOutOfRange,
    StartingDealerOutOfRange,
    DeckExhausted,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("protocol violation {0:?}: {1}")]
    Protocol(ProtocolKind, String),
    #[error("rule violation {0:?}: {1}")]
    Rule(RuleKind, String),
    #[error("configuration error {0:?}: {1}")]
    Config(ConfigKind, String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl DomainError {
    pub fn protocol(kind: ProtocolKind, detail: impl Into<String>) -> Self {
        Self::Protocol(kind, detail.into())
    }
    pub fn rule(kind: RuleKind, detail: impl Into<String>) -> Self {
        Self::Rule(kind, detail.into())
    }
    pub fn config(kind: ConfigKind, detail: impl Into<String>) -> Self {
        Self::Config(kind, detail.into())
    }
    pub fn parse(detail: impl Into<String>) -> Self {
        Self::Parse(detail.into())
    }

    /// True for expected in-game rejections; the caller may re-prompt.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rule(..))
    }

    pub fn protocol_kind(&self) -> Option<ProtocolKind> {
        match self {
            Self::Protocol(kind, _) => Some(*kind),
            _ => None,
        }
    }

    pub fn rule_kind(&self) -> Option<RuleKind> {
        match self {
            Self::Rule(kind, _) => Some(*kind),
            _ => None,
        }
    }

    pub fn config_kind(&self) -> Option<ConfigKind> {
        match self {
            Self::Config(kind, _) => Some(*kind),
            _ => None,
        }
    }
}
