//! Cropping the capture down to the selection and writing it out.

use image::buffer::ConvertBuffer;
use image::{RgbImage, RgbaImage};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::paths::ensure_dir;
use super::OutputFormat;
use crate::capture::{open_image, CapturedImage};
use crate::error::SaveError;
use crate::selection::Rect;

/// Copy `rect` out of `image`.
///
/// Zero-area rectangles are rejected rather than producing an empty image.
pub fn crop(image: &RgbaImage, rect: Rect) -> Result<RgbaImage, SaveError> {
    if rect.is_empty() {
        return Err(SaveError::InvalidGeometry {
            width: rect.width,
            height: rect.height,
        });
    }

    let (img_width, img_height) = image.dimensions();
    let fits = rect.x >= 0
        && rect.y >= 0
        && rect.x as u64 + rect.width as u64 <= img_width as u64
        && rect.y as u64 + rect.height as u64 <= img_height as u64;

    if !fits {
        return Err(SaveError::OutOfBounds {
            requested: (rect.x, rect.y, rect.width, rect.height),
            image_size: (img_width, img_height),
        });
    }

    Ok(image::imageops::crop_imm(image, rect.x as u32, rect.y as u32, rect.width, rect.height)
        .to_image())
}

/// Encode `image` to `dest`, creating parent directories.
///
/// A partially written file is removed on failure.
pub fn save(image: &RgbaImage, dest: &Path, format: OutputFormat) -> Result<(), SaveError> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let result = match format {
        OutputFormat::Png => image.save_with_format(dest, image::ImageFormat::Png),
        OutputFormat::Jpg => {
            // JPEG has no alpha channel
            let rgb: RgbImage = image.convert();
            rgb.save_with_format(dest, image::ImageFormat::Jpeg)
        }
    };

    result.map_err(|source| {
        if fs::remove_file(dest).is_ok() {
            debug!("Removed partial output {}", dest.display());
        }
        SaveError::Encode {
            path: dest.to_path_buf(),
            source,
        }
    })
}

/// Crop a capture to `rect` and write it to `dest`.
///
/// Consumes the capture, so its raw temp file is gone once this returns,
/// whichever way it returns.
pub fn crop_and_save(
    captured: CapturedImage,
    rect: Rect,
    dest: &Path,
    format: OutputFormat,
) -> Result<PathBuf, SaveError> {
    let cropped = crop(captured.image(), rect)?;
    drop(captured);

    save(&cropped, dest, format)?;
    info!(
        "Saved {}x{} selection to {}",
        rect.width,
        rect.height,
        dest.display()
    );
    Ok(dest.to_path_buf())
}

/// Like [`crop_and_save`] for a source image already on disk.
pub fn crop_file_and_save(
    source: &Path,
    rect: Rect,
    dest: &Path,
    format: OutputFormat,
) -> Result<PathBuf, SaveError> {
    let image = open_image(source).map_err(SaveError::Source)?.to_rgba8();
    let cropped = crop(&image, rect)?;
    save(&cropped, dest, format)?;
    Ok(dest.to_path_buf())
}
