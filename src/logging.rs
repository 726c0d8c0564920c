//! `tracing` subscriber setup for hosts that don't install their own.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `scene_assets=debug`.
pub const LOG_ENV: &str = "SCENE_ASSETS_LOG";

/// Install a global fmt subscriber.
///
/// The filter comes from [`LOG_ENV`] when set and valid, else `default_filter`.
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Whichever test in this binary gets here first installs it.
        let _ = init_tracing("debug");
        assert!(!init_tracing("debug"));
        tracing::debug!("subscriber active");
    }
}
