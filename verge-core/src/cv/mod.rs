pub mod colorize;
pub mod fill;
pub mod rasterize;
pub mod transform;

pub use colorize::{blend, colorize};
pub use fill::fill_polygon_mut;
pub use rasterize::rasterize;
