//! Rasterization of cell polygons onto an `embedded-graphics` draw target.

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Point as EgPoint, Size},
    primitives::Rectangle,
};

use crate::cells::{Point, Polygon};

/// Fills one convex cell polygon, translated by `origin`, into `target`.
///
/// Scanline fill over the outline: each pixel row is intersected with every
/// edge and filled between the outermost hits. Exact for the cell shapes,
/// whose edges are axis-aligned or at 45 degrees. Rows outside the target
/// are clipped by the draw target itself.
pub fn fill_cell<D>(
    target: &mut D,
    polygon: &Polygon,
    origin: Point,
    color: D::Color,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    let points = polygon.points();

    let mut y_min = i32::MAX;
    let mut y_max = i32::MIN;
    for p in points {
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }

    for y in y_min..=y_max {
        let mut x_min = i32::MAX;
        let mut x_max = i32::MIN;

        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];

            if y < a.y.min(b.y) || y > a.y.max(b.y) {
                continue;
            }

            if a.y == b.y {
                // Horizontal edge lying on this row.
                x_min = x_min.min(a.x.min(b.x));
                x_max = x_max.max(a.x.max(b.x));
            } else {
                let x = a.x + (b.x - a.x) * (y - a.y) / (b.y - a.y);
                x_min = x_min.min(x);
                x_max = x_max.max(x);
            }
        }

        if x_min > x_max {
            continue;
        }

        let row = Rectangle::new(
            EgPoint::new(origin.x + x_min, origin.y + y),
            Size::new((x_max - x_min + 1) as u32, 1),
        );
        target.fill_solid(&row, color)?;
    }

    Ok(())
}
