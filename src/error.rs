//! Error types shared across the capture pipeline.

use std::path::PathBuf;

/// Failure to obtain a full-screen capture.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    NonZeroExit {
        program: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("no monitors available")]
    NoMonitor,

    #[error("screen grab failed: {0}")]
    Grab(String),

    #[error("failed to create temporary capture file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("captured image could not be decoded: {0}")]
    Decode(#[from] image::ImageError),
}

/// Failure to crop or persist the selected region.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("selection has no area ({width}x{height})")]
    InvalidGeometry { width: u32, height: u32 },

    #[error(
        "selection ({},{} {}x{}) exceeds image bounds ({}x{})",
        requested.0, requested.1, requested.2, requested.3,
        image_size.0, image_size.1
    )]
    OutOfBounds {
        requested: (i32, i32, u32, u32),
        image_size: (u32, u32),
    },

    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no home directory to save screenshots under")]
    NoHomeDir,

    #[error("failed to read source image: {0}")]
    Source(#[source] image::ImageError),

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Top-level failure reported by the controller.
#[derive(Debug, thiserror::Error)]
pub enum SnipError {
    #[error("Capture failed: {0}")]
    CaptureFailed(#[from] CaptureError),

    #[error("Save failed: {0}")]
    SaveFailed(#[from] SaveError),

    #[error("Cannot open selection overlay: {0}")]
    SurfaceInitFailed(String),
}

pub type Result<T, E = SnipError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_geometry_message() {
        let err = SnipError::from(SaveError::InvalidGeometry {
            width: 0,
            height: 12,
        });
        assert_eq!(err.to_string(), "Save failed: selection has no area (0x12)");
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = SaveError::OutOfBounds {
            requested: (80, 80, 30, 30),
            image_size: (100, 100),
        };
        assert_eq!(
            err.to_string(),
            "selection (80,80 30x30) exceeds image bounds (100x100)"
        );
    }
}
