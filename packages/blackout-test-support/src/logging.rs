//! Tracing subscriber for engine test binaries.
//!
//! The engine only emits events; this installs the one subscriber that
//! renders them while tests run. Unit tests reach it through the engine's
//! `#[ctor]` hook, integration binaries through `tests/common`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither variable is set: refusals and round chatter stay hidden.
const QUIET_FILTER: &str = "warn";

static INSTALLED: OnceCell<()> = OnceCell::new();

fn filter_from_env() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(QUIET_FILTER))
}

/// Install the test subscriber once per process; later calls do nothing.
///
/// `TEST_LOG` wins over `RUST_LOG`. To watch bids, plays and round
/// transitions:
///
/// ```bash
/// TEST_LOG=blackout_engine=debug cargo test -p blackout-engine -- --nocapture
/// ```
pub fn init() {
    INSTALLED.get_or_init(|| {
        // Output goes through the test harness so passing tests stay silent;
        // timestamps are dropped to keep failure logs diffable. A subscriber
        // installed by someone else is left in place.
        let _ = fmt()
            .with_env_filter(filter_from_env())
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
