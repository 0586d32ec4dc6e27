//! Region screenshots for Wayland desktops.
//!
//! Grab the screen, let the user drag out a rectangle on a full-screen
//! overlay, then crop, save, notify and copy to the clipboard.

pub mod app;
pub mod capture;
pub mod error;
pub mod notify;
pub mod output;
pub mod selection;
pub mod ui;

pub use error::{CaptureError, Result, SaveError, SnipError};

/// Log to stderr, filtered by `RUST_LOG`, `warn` when unset
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
