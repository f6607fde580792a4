// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

// All currently supported image formats
pub const SUPPORTED_IMAGE_FORMATS: [&str; 17] = [
    "avif", "bmp", "dds", "hdr", "ico", "jpeg", "jpg", "exr", "png", "pbm", "pgm", "ppm", "qoi",
    "tga", "tif", "tiff", "webp",
];

// All currently supported annotation formats
pub const SUPPORTED_ANNOTATION_FORMATS: [&str; 1] = ["xml"];

// Masks and visualizations are always written with this extension
pub const MASK_EXTENSION: &str = "png";

// Suffixes appended to the filename stem of the two visualization outputs
pub const COLORED_SUFFIX: &str = "_colored";
pub const VISUAL_SUFFIX: &str = "_visual";

// Ordered (suffix, replacement) rules applied once when cleaning a filename
// stem back to its canonical key during renaming
pub const MASK_SUFFIX_RULES: [(&str, &str); 2] = [(COLORED_SUFFIX, ""), (VISUAL_SUFFIX, "")];

// Default weight of the colorized mask in the blended overlay
pub const DEFAULT_ALPHA: f32 = 0.5;
