//! Tracing setup and common imports.

pub mod prelude {
    pub use ::tracing::{debug, error, info, trace, warn};
}

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` controls filtering and
/// defaults to `info`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
