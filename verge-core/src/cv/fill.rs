// Copyright (c) 2026, Verge Developers
// Licensed under the MIT License

/// Mutably fill a polygon onto a row-major canvas of specified size
///
/// Pixels strictly inside the polygon are filled with an even-odd scanline
/// pass and boundary pixels are painted with an explicit edge pass, so the
/// filled region always includes the polygon outline. Points outside the
/// canvas are clipped. An empty point list is a no-op.
///
/// # Arguments
///
/// * `buffer` - A row-major canvas for drawing the polygon onto
/// * `width` - Width of canvas
/// * `height` - Height of canvas
/// * `points` - A set of (x, y) polygon vertices
/// * `value` - Class index used as fill value
///
/// # References
///
/// Adapted/modified from: https://github.com/image-rs/imageproc
///
/// # Examples
///
/// ```
/// use verge_core::cv::fill_polygon_mut;
///
/// let width = 3;
/// let height = 3;
/// let mut buffer = vec![0, 0, 0, 0, 0, 0, 0, 0, 0];
/// let points = [[0., 0.], [1., 0.], [1., 1.], [0., 1.]];
///
/// fill_polygon_mut(&mut buffer, width, height, &points, 1);
///
/// assert_eq!(buffer, vec![1, 1, 0, 1, 1, 0, 0, 0, 0]);
/// ```
pub fn fill_polygon_mut(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    points: &[[f32; 2]],
    value: u8,
) {
    if points.is_empty() || width == 0 || height == 0 {
        return;
    }

    // Scanline range restricted to rows the polygon can touch
    let mut y_min = i32::MAX;
    let mut y_max = i32::MIN;
    for p in points {
        y_min = y_min.min(p[1] as i32);
        y_max = y_max.max(p[1] as i32);
    }

    y_min = y_min.clamp(0, height as i32 - 1);
    y_max = y_max.clamp(0, height as i32 - 1);

    // Close the polygon by connecting the last point to the first
    let mut closed: Vec<[f32; 2]> = points.to_vec();
    closed.push(points[0]);

    let edges: Vec<&[[f32; 2]]> = closed.windows(2).collect();
    let mut intersections: Vec<i32> = Vec::new();

    for y in y_min..=y_max {
        let scan = y as f32;

        for edge in &edges {
            let p0 = edge[0];
            let p1 = edge[1];

            if (p0[1] <= scan && p1[1] >= scan) || (p1[1] <= scan && p0[1] >= scan) {
                if p0[1] == p1[1] {
                    intersections.push(p0[0] as i32);
                    intersections.push(p1[0] as i32);
                } else if p0[1] == scan || p1[1] == scan {
                    if p1[1] > scan {
                        intersections.push(p0[0] as i32);
                    }
                    if p0[1] > scan {
                        intersections.push(p1[0] as i32);
                    }
                } else {
                    let fraction = (scan - p0[1]) / (p1[1] - p0[1]);
                    let inter = p0[0] + fraction * (p1[0] - p0[0]);
                    intersections.push(inter.round() as i32);
                }
            }
        }

        intersections.sort_unstable();

        for pair in intersections.chunks(2) {
            // A dangling intersection cannot span any pixels
            if pair.len() < 2 {
                continue;
            }

            let from = pair[0].max(0);
            let to = pair[1].min(width as i32 - 1);

            for x in from..=to {
                buffer[(y as u32 * width + x as u32) as usize] = value;
            }
        }

        intersections.clear();
    }

    // Paint the polygon outline so boundary pixels are always included
    for edge in &edges {
        draw_line_mut(buffer, width, height, edge[0], edge[1], value);
    }
}

/// Mutably draw a line between two points with Bresenham's algorithm
fn draw_line_mut(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    start: [f32; 2],
    end: [f32; 2],
    value: u8,
) {
    let (x0, y0) = (start[0] as i32, start[1] as i32);
    let (x1, y1) = (end[0] as i32, end[1] as i32);

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
            buffer[(y as u32 * width + x as u32) as usize] = value;
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
