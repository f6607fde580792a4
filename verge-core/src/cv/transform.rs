// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use fast_image_resize;
use fast_image_resize::{FilterType, PixelType, images::Image};
use image::{DynamicImage, RgbImage};

/// Resize an 8-bit RGB image using the SIMD-accelerated fast-image-resize crate
///
/// # Arguments
///
/// * `source` - An 8-bit RGB image
/// * `new_width` - New width following resizing
/// * `new_height` - New height following resizing
pub fn resize_rgb8(source: &RgbImage, new_width: u32, new_height: u32) -> RgbImage {
    let source = DynamicImage::ImageRgb8(source.clone());
    let mut destination = Image::new(new_width, new_height, PixelType::U8x3);

    let mut resizer = fast_image_resize::Resizer::new();
    let option = fast_image_resize::ResizeOptions {
        algorithm: fast_image_resize::ResizeAlg::Convolution(FilterType::Bilinear),
        cropping: fast_image_resize::SrcCropping::None,
        mul_div_alpha: false,
    };

    resizer.resize(&source, &mut destination, &option).unwrap();

    RgbImage::from_raw(new_width, new_height, destination.into_vec()).unwrap()
}
