mod annotation;
mod image;
mod mask;

pub use annotation::AnnotatedObject;
pub use annotation::Annotation;

pub use image::open_rgb;

pub use mask::LabelMask;
