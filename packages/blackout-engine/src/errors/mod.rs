//! Error handling for the Blackout engine.

pub mod domain;

pub use domain::{ConfigKind, DomainError, ProtocolKind, RuleKind};
