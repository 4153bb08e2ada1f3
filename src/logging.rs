//! Logging initialization utilities.
//!
//! The library itself only emits through the `log` facade; this helper is
//! for host programs and tests that want a ready-made `env_logger` setup.

use env_logger::Env;

/// Initialize logging with a default filter level.
///
/// Call at most once per process; `env_logger` rejects a second logger.
pub fn init() {
    let env = Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
}
