//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "URPG_LOG";

/// Initialize the URPG tracing/logging system.
///
/// Reads `URPG_LOG` for per-subsystem log levels.
/// Format: `URPG_LOG=urpg_storage=debug,urpg_service=info`
///
/// Falls back to `urpg=info` if `URPG_LOG` is not set or is invalid.
/// Idempotent, and a no-op if another global subscriber is already installed.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("urpg=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .try_init();
    });
}
