//! Screen capture using the xcap library, for sessions where grim is not an
//! option (X11).

use log::debug;
use std::path::Path;
use xcap::Monitor;

use super::ScreenGrabber;
use crate::error::CaptureError;

/// Information about a monitor
#[derive(Debug, Clone)]
pub struct MonitorInfo {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub is_primary: bool,
}

impl MonitorInfo {
    /// Create MonitorInfo from xcap Monitor
    fn from_xcap(monitor: &Monitor) -> Self {
        Self {
            name: monitor.name().unwrap_or_default(),
            x: monitor.x().unwrap_or(0),
            y: monitor.y().unwrap_or(0),
            width: monitor.width().unwrap_or(0),
            height: monitor.height().unwrap_or(0),
            is_primary: monitor.is_primary().unwrap_or(false),
        }
    }
}

/// Get the primary monitor, or the first one if none is flagged primary
fn primary_monitor() -> Result<Monitor, CaptureError> {
    let monitors =
        Monitor::all().map_err(|e| CaptureError::Grab(format!("Failed to get monitors: {}", e)))?;

    let index = monitors
        .iter()
        .position(|m| m.is_primary().unwrap_or(false))
        .unwrap_or(0);

    monitors
        .into_iter()
        .nth(index)
        .ok_or(CaptureError::NoMonitor)
}

/// Captures the primary monitor and writes it as PNG.
#[derive(Debug, Clone, Default)]
pub struct XcapGrabber;

impl ScreenGrabber for XcapGrabber {
    fn name(&self) -> &str {
        "xcap"
    }

    fn grab(&self, dest: &Path) -> Result<(), CaptureError> {
        let monitor = primary_monitor()?;
        let info = MonitorInfo::from_xcap(&monitor);
        debug!(
            "Capturing monitor {} ({}x{}) at ({}, {}), primary: {}",
            info.name, info.width, info.height, info.x, info.y, info.is_primary
        );

        let image = monitor
            .capture_image()
            .map_err(|e| CaptureError::Grab(format!("Failed to capture screen: {}", e)))?;

        image
            .save_with_format(dest, image::ImageFormat::Png)
            .map_err(|e| CaptureError::Grab(format!("Failed to write capture: {}", e)))
    }
}
