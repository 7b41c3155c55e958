//! Tracing subscriber setup.
//!
//! # Responsibilities
//! - Install the global `tracing` subscriber once at startup
//! - Honour `RUST_LOG`, falling back to the given directives
//!
//! # Design Decisions
//! - Crate diagnostics go through `tracing`; request logs go through the
//!   leveled logger, which can itself forward to `tracing` (`TracingSink`)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default directives when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "reqlog=debug,tower_http=debug";

/// Install the fmt subscriber with an env filter.
///
/// Returns false when a subscriber was already installed.
pub fn init_tracing(default_directives: &str) -> bool {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directives)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
