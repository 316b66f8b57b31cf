// Process-wide log output for the binary.
//
// Responsibilities
// - Install one fmt subscriber filtered by `RUST_LOG` or the configured directive.
//
// Boundaries
// - Called once from `main`; library code only emits through `tracing` macros.

use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global fmt subscriber. `RUST_LOG` wins over the configured filter when set.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    fmt().with_env_filter(filter).with_target(false).init();
}
