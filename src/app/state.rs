//! Application state shared by the settings window and the controller.

use log::debug;
use std::path::{Path, PathBuf};

/// Main application state
#[derive(Default, Debug)]
pub struct AppState {
    /// A capture is between trigger and report
    capturing: bool,
    /// Where the most recent screenshot went
    last_saved: Option<PathBuf>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the single capture slot. False if a capture is already running.
    pub fn try_begin_capture(&mut self) -> bool {
        if self.capturing {
            debug!("Capture already in flight, ignoring trigger");
            return false;
        }
        self.capturing = true;
        true
    }

    pub fn finish_capture(&mut self, saved: Option<&Path>) {
        self.capturing = false;
        if let Some(path) = saved {
            self.last_saved = Some(path.to_path_buf());
        }
    }

    pub fn last_saved(&self) -> Option<&Path> {
        self.last_saved.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_trigger_is_noop() {
        let mut state = AppState::new();
        assert!(state.try_begin_capture());
        assert!(!state.try_begin_capture());
        assert!(!state.try_begin_capture());

        state.finish_capture(None);
        assert!(state.try_begin_capture());
    }

    #[test]
    fn test_last_saved_survives_cancel() {
        let mut state = AppState::new();
        state.try_begin_capture();
        state.finish_capture(Some(Path::new("/tmp/a.png")));
        state.try_begin_capture();
        state.finish_capture(None);
        assert_eq!(state.last_saved(), Some(Path::new("/tmp/a.png")));
    }
}
