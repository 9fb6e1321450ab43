#![cfg_attr(not(test), no_std)]

//! Seven-segment cell primitives for a polygon-styled clock face.
//!
//! Digits are drawn from up to seven hexagonal "LED bar" cells instead of
//! plain rectangles. This crate owns the canonical cell shapes, the
//! digit-to-segment illumination table, and the per-digit layout metrics;
//! a drawing surface consumes the placed polygons it emits.

mod cells;
mod digit;

#[cfg(feature = "embedded-graphics")]
pub mod graphics;

pub use cells::{MAX_POLYGON_POINTS, Point, Polygon, colon_cell, horizontal_cell, vertical_cell};
pub use digit::{
    Digit, DigitCells, PlacedCell, Segment, colon_width, digit_cells, digit_height, digit_width,
    illuminated, lit_segments,
};

/// Segment layout parameters.
///
/// Every cell shape and layout offset is a pure function of these values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// Segment length in pixels, taper tip to taper tip.
    pub segment_len: i32,
    /// Segment width in pixels. Must be odd so the taper ends in one pixel.
    pub segment_width: i32,
    /// Spacing between neighbouring segments of one digit.
    pub segment_gap: i32,
    /// Gap between neighbouring glyphs of the time string.
    pub digit_gap: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segment_len: 12,
            segment_width: 3,
            segment_gap: 1,
            digit_gap: 4,
        }
    }
}

/// Rejected layout parameters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Segment width below one pixel.
    WidthTooSmall,
    /// Even segment width cannot taper symmetrically.
    WidthEven,
    /// Segment length must at least cover both tapers.
    LengthTooShort,
    /// Spacing below one pixel would let neighbouring cells touch.
    SpacingTooSmall,
    /// Negative glyph gap.
    GapNegative,
}

impl Config {
    /// Checks the parameters once, at configuration time.
    ///
    /// Layout and rasterization assume a validated config.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.segment_width < 1 {
            return Err(ConfigError::WidthTooSmall);
        }
        if self.segment_width % 2 == 0 {
            return Err(ConfigError::WidthEven);
        }
        if self.segment_len < self.segment_width {
            return Err(ConfigError::LengthTooShort);
        }
        if self.segment_gap < 1 {
            return Err(ConfigError::SpacingTooSmall);
        }
        if self.digit_gap < 0 {
            return Err(ConfigError::GapNegative);
        }
        Ok(())
    }

    /// Half the segment width, rounded down: `(W - 1) / 2`.
    pub const fn half_width(&self) -> i32 {
        (self.segment_width - 1) / 2
    }
}
