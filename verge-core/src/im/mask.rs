// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::path::Path;

use image::{DynamicImage, ImageBuffer, Luma, open as open_dynamic};

use crate::constant;
use crate::error::VergeError;

/// A row-major container storing label mask pixels
///
/// Each pixel holds a u8 class index where 0 is the background class. The
/// length of the container must be equal to the product of `w` * `h`.
///
/// # Examples
///
/// ```
/// use verge_core::im::LabelMask;
///
/// let mask = LabelMask::new(10, 10).unwrap();
///
/// assert_eq!(mask.len(), 100);
/// assert!(mask.iter().all(|&p| p == 0));
/// ```
///
/// ```
/// use verge_core::im::LabelMask;
///
/// let mask = LabelMask::from_raw(10, 10, vec![0u8; 10]);
///
/// assert!(mask.is_err()); // Buffer size does not match dimensions
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMask {
    w: u32,
    h: u32,
    buffer: Vec<u8>,
}

impl LabelMask {
    /// Initialize a zeroed (all background) mask
    ///
    /// # Arguments
    ///
    /// * `width` - Mask width, must be positive
    /// * `height` - Mask height, must be positive
    pub fn new(width: u32, height: u32) -> Result<LabelMask, VergeError> {
        if width == 0 || height == 0 {
            return Err(VergeError::MaskError("Mask dimensions must be positive."));
        }

        Ok(LabelMask {
            w: width,
            h: height,
            buffer: vec![0u8; (width * height) as usize],
        })
    }

    /// Initialize a mask from an existing row-major buffer
    ///
    /// # Arguments
    ///
    /// * `width` - Mask width
    /// * `height` - Mask height
    /// * `buffer` - Row-major class indices with length `width` * `height`
    pub fn from_raw(width: u32, height: u32, buffer: Vec<u8>) -> Result<LabelMask, VergeError> {
        if width * height != buffer.len() as u32 {
            return Err(VergeError::BufferSizeError);
        }

        Ok(LabelMask {
            w: width,
            h: height,
            buffer,
        })
    }
}

// >>> PROPERTY METHODS

impl LabelMask {
    /// Width of the mask
    pub fn width(&self) -> u32 {
        self.w
    }

    /// Height of the mask
    pub fn height(&self) -> u32 {
        self.h
    }

    /// Length of the raw mask
    pub fn len(&self) -> usize {
        (self.w * self.h) as usize
    }

    /// Check if the mask is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Class index at an (x, y) coordinate
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.buffer[(y * self.w + x) as usize]
    }
}

// <<< PROPERTY METHODS

// >>> CONVERSION METHODS

impl LabelMask {
    /// Returns a reference to the raw mask
    pub fn as_raw(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns a mutable reference to the raw mask
    pub fn as_mut_raw(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Returns the raw mask
    pub fn into_raw(self) -> Vec<u8> {
        self.buffer
    }

    // An iterator over the raw mask
    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        self.buffer.iter()
    }
}

// <<< CONVERSION METHODS

// >>> I/O METHODS

impl LabelMask {
    /// Open a mask from a provided path
    ///
    /// # Arguments
    ///
    /// * `path` - A path to a grayscale image with a valid extension
    ///
    /// ```no_run
    /// use verge_core::im::LabelMask;
    /// let mask = LabelMask::open("mask.png");
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<LabelMask, VergeError> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());

        if let Some(ext) = extension {
            if constant::SUPPORTED_IMAGE_FORMATS.iter().any(|e| e == &ext) {
                if let Ok(image) = open_dynamic(&path) {
                    return Self::new_from_dynamic(image);
                }

                return Err(VergeError::ImageReadError);
            }
        }

        Err(VergeError::ImageExtensionError)
    }

    /// Initialize a mask from a DynamicImage
    ///
    /// # Arguments
    ///
    /// * `mask` - An 8-bit grayscale DynamicImage
    pub fn new_from_dynamic(mask: DynamicImage) -> Result<LabelMask, VergeError> {
        let width = mask.width();
        let height = mask.height();

        match mask {
            DynamicImage::ImageLuma8(buffer) => LabelMask::from_raw(width, height, buffer.into_raw()),
            DynamicImage::ImageLumaA8(buffer) => LabelMask::from_raw(
                width,
                height,
                buffer
                    .into_raw()
                    .chunks_exact(2)
                    .map(|pixel| pixel[0])
                    .collect(),
            ),
            _ => Err(VergeError::MaskError(
                "Only 8-bit grayscale masks are currently supported.",
            )),
        }
    }

    /// Save the mask as an 8-bit grayscale image
    ///
    /// # Arguments
    ///
    /// * `path` - A path to an image with a valid extension
    ///
    /// ```no_run
    /// use verge_core::im::LabelMask;
    /// let mask = LabelMask::new(10, 10).unwrap();
    /// mask.save("mask.png").unwrap();
    /// ```
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), VergeError> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());

        if let Some(ext) = extension {
            if constant::SUPPORTED_IMAGE_FORMATS.iter().any(|e| e == &ext) {
                ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(self.w, self.h, self.buffer.clone())
                    .unwrap()
                    .save(path)
                    .map_err(|_| VergeError::ImageWriteError)?;

                return Ok(());
            }
        }

        Err(VergeError::ImageExtensionError)
    }
}

// <<< I/O METHODS
