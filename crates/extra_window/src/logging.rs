//! Logging setup for applications embedding the window system

pub use log::{debug, error, info, trace, warn};

/// Install the `env_logger` backend.
///
/// Call once at program start. `RUST_LOG=extra_window=debug` surfaces
/// per-window lifecycle and context-switch events.
pub fn init() {
    env_logger::init();
}
