//! Full-screen grab through an external `grim`-compatible program.

use log::debug;
use std::path::Path;
use std::process::Command;

use super::ScreenGrabber;
use crate::error::CaptureError;

pub const DEFAULT_PROGRAM: &str = "grim";

/// Runs `<program> <dest>` and expects an image file at `dest`.
#[derive(Debug, Clone)]
pub struct GrimGrabber {
    program: String,
}

impl Default for GrimGrabber {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl GrimGrabber {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ScreenGrabber for GrimGrabber {
    fn name(&self) -> &str {
        &self.program
    }

    fn grab(&self, dest: &Path) -> Result<(), CaptureError> {
        debug!("Running {} {}", self.program, dest.display());

        let output = Command::new(&self.program)
            .arg(dest)
            .output()
            .map_err(|source| CaptureError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CaptureError::NonZeroExit {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
