// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::collections::HashMap;

use image::{Rgb, RgbImage};

use crate::cv::transform::resize_rgb8;
use crate::im::LabelMask;

/// Map each class index of a label mask to its configured RGB color
///
/// Indices absent from the color table default to black. The mask values
/// themselves are never affected.
///
/// # Arguments
///
/// * `mask` - A single-channel label mask
/// * `class_colors` - Class index to RGB color
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use verge_core::cv::colorize;
/// use verge_core::im::LabelMask;
///
/// let mask = LabelMask::from_raw(2, 1, vec![0, 1]).unwrap();
/// let class_colors = HashMap::from([(0, [0, 0, 0]), (1, [255, 0, 0])]);
///
/// let image = colorize(&mask, &class_colors);
///
/// assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
/// assert_eq!(image.get_pixel(1, 0).0, [255, 0, 0]);
/// ```
pub fn colorize(mask: &LabelMask, class_colors: &HashMap<u8, [u8; 3]>) -> RgbImage {
    let mut image = RgbImage::new(mask.width(), mask.height());

    for (pixel, index) in image.pixels_mut().zip(mask.iter()) {
        let color = class_colors.get(index).copied().unwrap_or([0, 0, 0]);
        *pixel = Rgb(color);
    }

    image
}

/// Blend a colorized mask over the original image
///
/// Per-subpixel linear interpolation `alpha * colorized + (1 - alpha) *
/// original`. The colorized image is resized to match the original's pixel
/// dimensions first if they differ. Alpha is clamped to [0, 1].
///
/// # Arguments
///
/// * `original` - The source image
/// * `colorized` - A colorized mask visualization
/// * `alpha` - Weight of the colorized mask in the output
pub fn blend(original: &RgbImage, colorized: &RgbImage, alpha: f32) -> RgbImage {
    let alpha = alpha.clamp(0.0, 1.0);

    let resized;
    let colorized = if colorized.dimensions() != original.dimensions() {
        resized = resize_rgb8(colorized, original.width(), original.height());
        &resized
    } else {
        colorized
    };

    let buffer: Vec<u8> = original
        .as_raw()
        .iter()
        .zip(colorized.as_raw())
        .map(|(&o, &c)| (alpha * c as f32 + (1.0 - alpha) * o as f32).round() as u8)
        .collect();

    RgbImage::from_raw(original.width(), original.height(), buffer).unwrap()
}
