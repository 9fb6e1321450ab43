//! Canonical cell shapes.
//!
//! The bar cells are hexagons: a straight run of length `L - W + 1` with a
//! symmetric taper to a single-pixel point at both ends, which gives the
//! slanted LED-bar look. The colon dot is a diamond of the same width.

use crate::Config;

/// Pixel offset.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point translated by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Largest vertex count of any cell shape.
pub const MAX_POLYGON_POINTS: usize = 6;

/// Closed polygon outline, clockwise vertex order, implicit last-to-first
/// edge.
///
/// Bar cells are anchored at the top-left of their bounding box; the colon
/// dot is centered on the origin.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Polygon {
    points: [Point; MAX_POLYGON_POINTS],
    len: usize,
}

impl Polygon {
    const fn hexagon(points: [Point; 6]) -> Self {
        Self { points, len: 6 }
    }

    const fn diamond(points: [Point; 4]) -> Self {
        Self {
            points: [
                points[0],
                points[1],
                points[2],
                points[3],
                Point::new(0, 0),
                Point::new(0, 0),
            ],
            len: 4,
        }
    }

    /// Vertices in clockwise order.
    pub fn points(&self) -> &[Point] {
        &self.points[..self.len]
    }
}

/// Horizontal bar cell: x spans `0..=L`, y spans `0..=2*halfW`.
pub const fn horizontal_cell(config: &Config) -> Polygon {
    let l = config.segment_len;
    let h = config.half_width();

    Polygon::hexagon([
        Point::new(h, 0),
        Point::new(l - h, 0),
        Point::new(l, h),
        Point::new(l - h, 2 * h),
        Point::new(h, 2 * h),
        Point::new(0, h),
    ])
}

/// Vertical bar cell: x spans `0..=2*halfW`, y spans `0..=L`.
pub const fn vertical_cell(config: &Config) -> Polygon {
    let l = config.segment_len;
    let h = config.half_width();

    Polygon::hexagon([
        Point::new(h, 0),
        Point::new(2 * h, h),
        Point::new(2 * h, l - h),
        Point::new(h, l),
        Point::new(0, l - h),
        Point::new(0, h),
    ])
}

/// Colon dot: a diamond of half-width `(W - 1) / 2` centered on the origin.
pub const fn colon_cell(config: &Config) -> Polygon {
    let h = config.half_width();

    Polygon::diamond([
        Point::new(0, -h),
        Point::new(h, 0),
        Point::new(0, h),
        Point::new(-h, 0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(points: &[Point]) -> (i32, i32, i32, i32) {
        let mut x_min = i32::MAX;
        let mut x_max = i32::MIN;
        let mut y_min = i32::MAX;
        let mut y_max = i32::MIN;

        for p in points {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }

        (x_min, x_max, y_min, y_max)
    }

    #[test]
    fn horizontal_cell_matches_reference_shape() {
        let cell = horizontal_cell(&Config::default());

        assert_eq!(
            cell.points(),
            &[
                Point::new(1, 0),
                Point::new(11, 0),
                Point::new(12, 1),
                Point::new(11, 2),
                Point::new(1, 2),
                Point::new(0, 1),
            ]
        );
    }

    #[test]
    fn vertical_cell_matches_reference_shape() {
        let cell = vertical_cell(&Config::default());

        assert_eq!(
            cell.points(),
            &[
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(2, 11),
                Point::new(1, 12),
                Point::new(0, 11),
                Point::new(0, 1),
            ]
        );
    }

    #[test]
    fn colon_cell_is_a_centered_diamond() {
        let dot = colon_cell(&Config::default());

        assert_eq!(
            dot.points(),
            &[
                Point::new(0, -1),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(-1, 0),
            ]
        );
    }

    #[test]
    fn bar_cells_span_len_by_width() {
        let config = Config {
            segment_len: 20,
            segment_width: 5,
            ..Config::default()
        };

        let (x_min, x_max, y_min, y_max) = span(horizontal_cell(&config).points());
        assert_eq!((x_min, x_max), (0, 20));
        assert_eq!((y_min, y_max), (0, 4));

        let (x_min, x_max, y_min, y_max) = span(vertical_cell(&config).points());
        assert_eq!((x_min, x_max), (0, 4));
        assert_eq!((y_min, y_max), (0, 20));
    }

    #[test]
    fn straight_run_covers_len_minus_width_plus_one() {
        let config = Config {
            segment_len: 20,
            segment_width: 5,
            ..Config::default()
        };

        let cell = horizontal_cell(&config);
        let top_run = cell.points()[1].x - cell.points()[0].x;
        assert_eq!(top_run, config.segment_len - config.segment_width + 1);
    }

    #[test]
    fn single_pixel_width_degenerates_to_a_line() {
        let config = Config {
            segment_len: 6,
            segment_width: 1,
            ..Config::default()
        };

        let (_, _, y_min, y_max) = span(horizontal_cell(&config).points());
        assert_eq!((y_min, y_max), (0, 0));
    }
}
