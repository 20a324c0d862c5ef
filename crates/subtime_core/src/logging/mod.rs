//! Logging infrastructure for subtime.
//!
//! Everything logs through `tracing`; this module only installs the global
//! subscriber. `RUST_LOG` always wins over the configured level.

mod types;

pub use types::LogLevel;

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr
///
/// Should be called once at application startup. Panics if a global
/// subscriber is already installed; see [`try_init_tracing`].
pub fn init_tracing(default_level: LogLevel) {
    subscriber(default_level).init();
}

/// Like [`init_tracing`], but returns `false` instead of panicking when a
/// global subscriber is already set.
pub fn try_init_tracing(default_level: LogLevel) -> bool {
    subscriber(default_level).try_init().is_ok()
}

fn subscriber(default_level: LogLevel) -> impl SubscriberInitExt {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .with(filter)
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_to_filter_works() {
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
        assert_eq!(LogLevel::Info.as_filter_str(), "info");
    }

    #[test]
    fn second_init_does_not_panic() {
        init_test_tracing();
        assert!(!try_init_tracing(LogLevel::Info));
    }
}
