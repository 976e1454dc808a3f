//! Tracing subscriber setup.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global `tracing` subscriber when debug mode is on.
///
/// `RUST_LOG` drives the filter; without it everything from this crate at
/// `debug` and above is shown. Outside debug mode no subscriber is installed
/// and messages go straight to the console.
pub fn init() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fieldstat=debug"));
    let _ = fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).try_init();
}
