//! Tracing setup and structured spans for chat requests.

mod spans;

pub use spans::{DispatchSpan, SpanContext};

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Builds the log filter: `RUST_LOG` wins, then the configured level, then `info`.
pub fn env_filter(settings: &LogSettings) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    match EnvFilter::try_new(&settings.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!(
                "WARN: log level '{}' is not a valid tracing filter ({e}); falling back to 'info'",
                settings.level
            );
            EnvFilter::new("info")
        }
    }
}

/// Installs the global `fmt` subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init_tracing(settings: &LogSettings) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_target(true);

    let result = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
