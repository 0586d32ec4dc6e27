//! Desktop notification and clipboard hand-off for saved screenshots.
//!
//! Both are advisory: every failure is logged at debug level and dropped.
//! Children are spawned detached and never waited on.

pub mod clipboard;

pub use clipboard::ClipboardManager;

use log::debug;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::output::OutputFormat;

pub const NOTIFY_PROGRAM: &str = "notify-send";
pub const NOTIFY_TITLE: &str = "Screenshot Captured";

/// Tells the user about a saved screenshot
pub trait Notify {
    fn notify(&self, path: &Path, format: OutputFormat);
}

/// `notify-send` plus `wl-copy`
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    notify_program: String,
    clipboard: ClipboardManager,
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(NOTIFY_PROGRAM, ClipboardManager::default())
    }
}

impl DesktopNotifier {
    pub fn new(notify_program: impl Into<String>, clipboard: ClipboardManager) -> Self {
        Self {
            notify_program: notify_program.into(),
            clipboard,
        }
    }

    fn send_notification(&self, path: &Path) {
        let body = format!("Saved to: {}", path.display());
        let spawned = Command::new(&self.notify_program)
            .args([NOTIFY_TITLE, body.as_str()])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => debug!("{} started (pid {})", self.notify_program, child.id()),
            Err(e) => debug!("Notification skipped, {} failed: {}", self.notify_program, e),
        }
    }
}

impl Notify for DesktopNotifier {
    fn notify(&self, path: &Path, format: OutputFormat) {
        self.send_notification(path);
        if let Err(e) = self.clipboard.copy_file(path, format) {
            debug!("Clipboard skipped: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_programs_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shot.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let notifier = DesktopNotifier::new(
            "snipper-test-no-such-notifier",
            ClipboardManager::new("snipper-test-no-such-clipboard"),
        );
        notifier.notify(&path, OutputFormat::Png);
    }

    #[test]
    fn test_missing_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        let notifier = DesktopNotifier::new("true", ClipboardManager::new("true"));
        notifier.notify(&dir.path().join("gone.png"), OutputFormat::Jpg);
    }
}
