//! Tracing setup
//!
//! Diagnostics go to stderr so they never mix with command output.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "FINANCEHUB_LOG";

static TRACING_INIT: Once = Once::new();

/// Resolve the filter: `FINANCEHUB_LOG` if set and valid, else `fallback`,
/// else `warn`
pub fn resolve_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the global tracing subscriber once per process
pub fn init_tracing(fallback_level: &str) {
    TRACING_INIT.call_once(|| {
        let _ = fmt()
            .with_env_filter(resolve_filter(fallback_level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
