//! Diagnostics setup shared by the demo binaries.
//!
//! Events go to stderr so the printed transcript on stdout is never touched.
//! Set `RUST_LOG=oop_patterns=trace` to watch every draw call and product.

use std::io;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global fmt subscriber.
///
/// `try_init` fails only when a global subscriber is already set (a second
/// call, or a test harness that installed its own); that one is kept.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        tracing::debug!("still alive after double init");
    }
}
