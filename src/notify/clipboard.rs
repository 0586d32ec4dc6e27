use log::debug;
use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::output::OutputFormat;

pub const CLIPBOARD_PROGRAM: &str = "wl-copy";

pub type ClipboardResult<T> = Result<T, ClipboardError>;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Puts image files on the Wayland clipboard through `wl-copy`.
///
/// `wl-copy` forks and keeps serving the selection after we exit, which the
/// in-process GDK clipboard cannot do once the application quits.
#[derive(Debug, Clone)]
pub struct ClipboardManager {
    program: String,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new(CLIPBOARD_PROGRAM)
    }
}

impl ClipboardManager {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Start `wl-copy --type <mime>` reading the file on stdin. Does not wait.
    pub fn copy_file(&self, path: &Path, format: OutputFormat) -> ClipboardResult<()> {
        let file = File::open(path).map_err(|source| ClipboardError::Open {
            path: path.display().to_string(),
            source,
        })?;

        let child = Command::new(&self.program)
            .args(["--type", format.mime_type()])
            .stdin(Stdio::from(file))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        debug!(
            "{} started (pid {}) for {}",
            self.program,
            child.id(),
            path.display()
        );
        Ok(())
    }
}
