//! Tracing subscriber setup
//!
//! Installed by the binary before asset loading starts, so the `[ASSETS]` and
//! `[GAME_INIT]` lines emitted during async initialization are not lost.
//! Bevy's own `LogPlugin` is disabled in favour of this subscriber.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info,wgpu=warn,naga=warn";

/// Install the global fmt subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
