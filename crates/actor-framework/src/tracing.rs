//! # Tracing Setup
//!
//! Installs the process-wide `tracing` subscriber. Filtering comes from `RUST_LOG`
//! and defaults to `info`:
//!
//! ```bash
//! RUST_LOG=info krazz      # actor lifecycle, refreshes, placements
//! RUST_LOG=debug krazz     # every Get/Action with its payload
//! ```

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Initialise the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .try_init();
}
