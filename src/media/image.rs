// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding from the supported formats (PNG, JPEG, GIF, BMP, TIFF).

use crate::error::DecodeError;
use image_rs::ImageError;
use std::path::Path;
use std::sync::Arc;

/// Decoded image data without presentation dependencies.
///
/// This is the pure pixel representation of an image. The presentation layer
/// converts it to whatever handle its framework needs.
#[derive(Debug, Clone)]
pub struct ImageData {
    width: u32,
    height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            pixels.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            pixels.len()
        );

        Self {
            width,
            height,
            rgba_bytes: Arc::new(pixels),
        }
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the RGBA pixel data.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

/// Load an image from the given path and decode it to RGBA.
///
/// # Errors
///
/// Returns a [`DecodeError`] if:
/// - The file cannot be read
/// - The format is not supported
/// - The data is corrupted
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData, DecodeError> {
    let bytes = std::fs::read(path.as_ref()).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DecodeError::NotFound,
        _ => DecodeError::IoError(e.to_string()),
    })?;

    let decoded = image_rs::load_from_memory(&bytes).map_err(decode_error_from)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(ImageData::from_rgba(width, height, rgba.into_vec()))
}

/// Categorizes an `image` crate error into the decode taxonomy.
fn decode_error_from(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        ImageError::IoError(e) => DecodeError::IoError(e.to_string()),
        ImageError::Decoding(e) => DecodeError::CorruptedData(e.to_string()),
        other => DecodeError::CorruptedData(other.to_string()),
    }
}
