//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Reads the `QA_LOG` environment variable for filter directives, e.g.
/// `QA_LOG=qa_status=debug,qa_checker=info`. Falls back to `info` if
/// `QA_LOG` is unset or invalid.
///
/// Only the first call installs a subscriber; later calls are no-ops.
pub fn init_tracing() {
    init_with(|| {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"))
    });
}

/// Initialize tracing with an explicit filter string, such as
/// [`LoggingConfig::level`](crate::config::LoggingConfig). `QA_LOG` still wins when set.
pub fn init_tracing_with_filter(default_filter: &str) {
    let default_filter = default_filter.to_string();
    init_with(move || {
        EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&default_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    });
}

fn init_with(filter: impl FnOnce() -> EnvFilter) {
    INIT.call_once(|| {
        // A subscriber installed by the host application takes precedence.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter())
            .try_init();
    });
}
