//! Capture module for full-screen grabs
//!
//! A [`ScreenGrabber`] writes the whole screen to a temporary file, which is
//! then decoded into a [`CapturedImage`]. The temporary file lives exactly as
//! long as the `CapturedImage` that owns it.

pub mod grim;
pub mod screen;
pub mod session;

pub use grim::GrimGrabber;
pub use screen::XcapGrabber;
pub use session::DisplayServer;

use gtk4 as gtk;

use gtk::gdk_pixbuf::{Colorspace, Pixbuf};
use gtk::glib;
use image::RgbaImage;
use log::{debug, info};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::error::CaptureError;

/// Something that can write a full-screen image to a path
pub trait ScreenGrabber {
    /// Short name for logs
    fn name(&self) -> &str;

    fn grab(&self, dest: &Path) -> Result<(), CaptureError>;
}

/// Which grabber to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendChoice {
    /// Pick from the running display server
    #[default]
    Auto,
    Grim,
    Xcap,
}

impl BackendChoice {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(BackendChoice::Auto),
            "grim" => Some(BackendChoice::Grim),
            "xcap" => Some(BackendChoice::Xcap),
            _ => None,
        }
    }

    /// Settle `Auto`; never returns `Auto`.
    pub fn resolve(self, server: DisplayServer) -> Self {
        match (self, server) {
            (BackendChoice::Auto, DisplayServer::X11) => BackendChoice::Xcap,
            (BackendChoice::Auto, _) => BackendChoice::Grim,
            (choice, _) => choice,
        }
    }
}

pub fn grabber_for(choice: BackendChoice, server: DisplayServer) -> Box<dyn ScreenGrabber> {
    let resolved = choice.resolve(server);
    info!("Using {:?} capture backend on {}", resolved, server);
    match resolved {
        BackendChoice::Xcap => Box::new(XcapGrabber),
        _ => Box::new(GrimGrabber::default()),
    }
}

/// A full-screen snapshot and the raw capture file it came from.
pub struct CapturedImage {
    image: RgbaImage,
    temp: NamedTempFile,
}

impl std::fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedImage")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .field("path", &self.temp.path())
            .finish()
    }
}

impl CapturedImage {
    /// Decode the capture file; the file is removed when the result drops.
    pub fn load(temp: NamedTempFile) -> Result<Self, CaptureError> {
        let image = open_image(temp.path())?.to_rgba8();
        Ok(Self { image, temp })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    pub fn to_pixbuf(&self) -> Pixbuf {
        rgba_to_pixbuf(&self.image)
    }
}

impl Drop for CapturedImage {
    fn drop(&mut self) {
        debug!("Removing raw capture {}", self.temp.path().display());
    }
}

/// Grab the screen into a fresh temporary file and load it
pub fn capture(grabber: &dyn ScreenGrabber) -> Result<CapturedImage, CaptureError> {
    let temp = tempfile::Builder::new()
        .prefix("snipper-")
        .suffix(".png")
        .tempfile()
        .map_err(CaptureError::TempFile)?;

    grabber.grab(temp.path())?;
    let captured = CapturedImage::load(temp)?;

    info!(
        "Captured {}x{} screen with {}",
        captured.image.width(),
        captured.image.height(),
        grabber.name()
    );
    Ok(captured)
}

/// Decode an image file, trusting its content over its extension
pub fn open_image(path: &Path) -> image::ImageResult<image::DynamicImage> {
    image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
}

/// Convert an RGBA image to a GDK Pixbuf
pub fn rgba_to_pixbuf(image: &RgbaImage) -> Pixbuf {
    let width = image.width() as i32;
    let height = image.height() as i32;
    let stride = width * 4; // RGBA = 4 bytes per pixel
    let bytes = glib::Bytes::from(image.as_raw().as_slice());

    Pixbuf::from_bytes(
        &bytes,
        Colorspace::Rgb,
        true, // has_alpha
        8,    // bits_per_sample
        width,
        height,
        stride,
    )
}
