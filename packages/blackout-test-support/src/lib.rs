//! Test support for the Blackout engine.
//!
//! Shared by the engine's unit tests and integration tests: one-time
//! logging installation and the proptest configuration knobs.

pub mod logging;
pub mod proptest_config;
