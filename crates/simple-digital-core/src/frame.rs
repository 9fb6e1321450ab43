//! Frame planning: time-string layout and centering.

use heapless::Vec;
use sevencell::{
    Config, Digit, PlacedCell, Point, colon_cell, colon_width, digit_cells, digit_height,
    digit_width,
};

use crate::settings::{Color, Palette};
use crate::time::{HourFormat, TimeDigits, TimeOfDay};

/// Usable drawing rectangle, re-queried from the host every redraw.
///
/// The host may shrink it between redraws to make room for overlays, so a
/// plan never outlives the bounds it was built from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

/// One redraw's inputs. Built per tick, consumed, and dropped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RenderRequest {
    pub time: TimeOfDay,
    pub format: HourFormat,
    pub bounds: Bounds,
}

/// Upper bound on cells in one frame: four digit glyphs plus the colon dots.
pub const MAX_FRAME_CELLS: usize = 4 * 7 + 2;

/// Fully laid-out frame, ready for the drawing surface.
///
/// Cell order carries no meaning: every cell is filled in the same
/// foreground color.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FramePlan {
    pub bounds: Bounds,
    pub background: Color,
    pub foreground: Color,
    pub cells: Vec<PlacedCell, MAX_FRAME_CELLS>,
}

/// Lays out the time string centered in the request's bounds.
///
/// A string wider than the rectangle starts at a negative x and is left to
/// the drawing surface to clip.
pub fn plan_frame(config: &Config, palette: Palette, request: RenderRequest) -> FramePlan {
    let digits = TimeDigits::of(request.time, request.format);
    let gap = config.digit_gap;

    let start_x = (request.bounds.width as i32 - string_width(config, &digits)) / 2;
    let start_y = (request.bounds.height as i32 - digit_height(config)) / 2;

    let mut cells = Vec::new();
    let mut x = start_x;

    if let Some(tens) = digits.hour_tens {
        x += push_digit(config, tens, Point::new(x, start_y), &mut cells) + gap;
    }
    x += push_digit(config, digits.hour_ones, Point::new(x, start_y), &mut cells) + gap;
    x += push_colon(config, Point::new(x, start_y), &mut cells) + gap;
    x += push_digit(config, digits.minute_tens, Point::new(x, start_y), &mut cells) + gap;
    push_digit(config, digits.minute_ones, Point::new(x, start_y), &mut cells);

    FramePlan {
        bounds: request.bounds,
        background: palette.background,
        foreground: palette.foreground,
        cells,
    }
}

/// Advance width of the rendered string, counting only the glyphs actually
/// drawn; a suppressed leading digit drops out together with its gap.
fn string_width(config: &Config, digits: &TimeDigits) -> i32 {
    let gap = config.digit_gap;
    let mut width = digit_width(config, digits.hour_ones)
        + gap
        + colon_width(config)
        + gap
        + digit_width(config, digits.minute_tens)
        + gap
        + digit_width(config, digits.minute_ones);

    if let Some(tens) = digits.hour_tens {
        width += digit_width(config, tens) + gap;
    }

    width
}

fn push_digit(
    config: &Config,
    digit: Digit,
    anchor: Point,
    cells: &mut Vec<PlacedCell, MAX_FRAME_CELLS>,
) -> i32 {
    for cell in digit_cells(config, digit, anchor) {
        let _ = cells.push(cell);
    }
    digit_width(config, digit)
}

/// Places the two colon dots in a `W`-wide glyph slot: the upper dot a fixed
/// distance below the digit top, the lower the mirror distance above the
/// digit bottom.
fn push_colon(
    config: &Config,
    anchor: Point,
    cells: &mut Vec<PlacedCell, MAX_FRAME_CELLS>,
) -> i32 {
    let h = config.half_width();
    let center_x = anchor.x + h;
    let upper_y = anchor.y + h + config.segment_gap + config.segment_len / 2 - 1;
    let lower_y = anchor.y + digit_height(config)
        - (config.segment_width + config.segment_len - 2 * config.segment_gap - 1);

    let dot = colon_cell(config);
    let _ = cells.push(PlacedCell {
        origin: Point::new(center_x, upper_y),
        polygon: dot,
    });
    let _ = cells.push(PlacedCell {
        origin: Point::new(center_x, lower_y),
        polygon: dot,
    });

    colon_width(config)
}
