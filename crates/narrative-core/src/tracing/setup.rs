//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize logging for a presentation layer or test harness.
///
/// Reads `NARRATIVE_LOG` for per-module log levels.
/// Format: `NARRATIVE_LOG=narrative_analysis::loader=debug,narrative_core=warn`
///
/// Falls back to `narrative_core=info,narrative_analysis=info` when unset or invalid.
/// Calling it more than once is a no-op, and a global subscriber installed
/// by the host is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
        if let Err(err) = installed {
            tracing::debug!(%err, "keeping existing global subscriber");
        }
    });
}
