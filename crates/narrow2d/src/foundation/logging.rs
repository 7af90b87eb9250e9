//! Logging initialization and macro re-exports
//!
//! Thin shim over `env_logger`. The GJK and EPA loops emit `trace!`
//! progress and `warn!` convergence events through it; binaries call
//! [`init`] once at startup and filter with `RUST_LOG`.

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}
