// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::path::Path;

use image::{RgbImage, open as open_dynamic};

use crate::constant;
use crate::error::VergeError;

/// Open a source image from a provided path and convert it to 8-bit RGB
///
/// Only the pixel dimensions and (for the overlay visualization) the RGB
/// pixel values of the source image are ever consumed, so every supported
/// input format is normalized here.
///
/// # Arguments
///
/// * `path` - A path to an image with a valid extension
///
/// ```no_run
/// use verge_core::im::open_rgb;
/// let image = open_rgb("image.jpg");
/// ```
pub fn open_rgb<P: AsRef<Path>>(path: P) -> Result<RgbImage, VergeError> {
    let extension = path
        .as_ref()
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());

    if let Some(ext) = extension {
        if constant::SUPPORTED_IMAGE_FORMATS.iter().any(|e| e == &ext) {
            if let Ok(image) = open_dynamic(&path) {
                return Ok(image.to_rgb8());
            }

            return Err(VergeError::ImageReadError);
        }
    }

    Err(VergeError::ImageExtensionError)
}
