// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

use std::collections::HashMap;

use crate::cv::fill_polygon_mut;
use crate::error::VergeError;
use crate::im::LabelMask;

/// Rasterize named polygonal regions into a single-channel label mask
///
/// Classes are painted in drawing order, so a class appearing later in the
/// order overwrites earlier classes at the pixel level. A drawing-order name
/// absent from the class map is skipped entirely (none of its polygons are
/// drawn, even at index 0) and returned in the unmapped list so the caller
/// can raise a warning. A name explicitly mapped to 0 is drawn at index 0.
/// Polygons with no points are skipped silently. The output is fully
/// determined by the inputs.
///
/// # Arguments
///
/// * `objects_by_class` - All polygons grouped by their class name
/// * `class_map` - Class name to class index
/// * `drawing_order` - Class names in compositing order
/// * `width` - Width of the source image, must be positive
/// * `height` - Height of the source image, must be positive
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use verge_core::cv::rasterize;
///
/// let objects = HashMap::from([
///     ("road".to_string(), vec![vec![[0., 0.], [3., 0.], [3., 3.], [0., 3.]]]),
/// ]);
///
/// let class_map = HashMap::from([("road".to_string(), 1u8)]);
/// let order = vec!["road".to_string()];
///
/// let (mask, unmapped) = rasterize(&objects, &class_map, &order, 4, 4).unwrap();
///
/// assert!(unmapped.is_empty());
/// assert!(mask.iter().all(|&p| p == 1));
/// ```
pub fn rasterize(
    objects_by_class: &HashMap<String, Vec<Vec<[f32; 2]>>>,
    class_map: &HashMap<String, u8>,
    drawing_order: &[String],
    width: u32,
    height: u32,
) -> Result<(LabelMask, Vec<String>), VergeError> {
    let mut mask = LabelMask::new(width, height)?;
    let mut unmapped: Vec<String> = Vec::new();

    for class_name in drawing_order {
        let Some(&index) = class_map.get(class_name) else {
            unmapped.push(class_name.clone());
            continue;
        };

        let Some(polygons) = objects_by_class.get(class_name) else {
            continue;
        };

        for polygon in polygons {
            if polygon.is_empty() {
                continue;
            }

            fill_polygon_mut(mask.as_mut_raw(), width, height, polygon, index);
        }
    }

    Ok((mask, unmapped))
}
