// SPDX-License-Identifier: MPL-2.0
//! Image format support shared by the directory scanner and the loader.

pub mod image;

use std::path::Path;

// Re-export commonly used types
pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, ImageData};

/// Supported image extensions
pub mod extensions {
    /// Image file extensions recognized during a folder scan.
    /// Matching is case-insensitive; the scan lowercases before comparing.
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff"];
}

/// Checks if a file has a supported image extension.
#[must_use]
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .is_some_and(|ext| extensions::IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
