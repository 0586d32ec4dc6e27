//! Application module
//!
//! Startup configuration, the capture sequence and its exit policy.

pub mod config;
pub mod controller;
pub mod settings;
pub mod state;

pub use config::{Action, AppConfig, ShortcutConfig};
pub use controller::{
    complete_selection, next_step, AppController, CaptureReport, LaunchMode, NextStep, StatusKind,
};
pub use settings::OutputSettings;
pub use state::AppState;
