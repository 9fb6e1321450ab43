//! Digit glyph layout: which segments light and where each cell lands.

use crate::Config;
use crate::cells::{Point, Polygon, horizontal_cell, vertical_cell};

/// One of the seven strokes of a digit glyph.
///
/// ```text
///  aaaa
/// f    b
/// f    b
///  gggg
/// e    c
/// e    c
///  dddd
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    /// All segments in canonical table order.
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    const fn is_horizontal(self) -> bool {
        matches!(self, Segment::A | Segment::D | Segment::G)
    }
}

/// Decimal digit validated into `0..=9`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Digit(u8);

impl Digit {
    /// Accepts `0..=9`, rejects everything else.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    /// Digit from the last decimal place of `value`.
    pub const fn mod10(value: u8) -> Self {
        Self(value % 10)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Which segments light per digit, table order `a..g`.
///
/// The tails of 6 and 9 (segments `a` and `d`) stay on.
const ILLUMINATION: [[bool; 7]; 10] = [
    //  a      b      c      d      e      f      g
    [true, true, true, true, true, true, false],      // 0
    [false, true, true, false, false, false, false],  // 1
    [true, true, false, true, true, false, true],     // 2
    [true, true, true, true, false, false, true],     // 3
    [false, true, true, false, false, true, true],    // 4
    [true, false, true, true, false, true, true],     // 5
    [true, false, true, true, true, true, true],      // 6
    [true, true, true, false, false, false, false],   // 7
    [true, true, true, true, true, true, true],       // 8
    [true, true, true, true, false, true, true],      // 9
];

/// Whether `segment` lights for `digit`.
pub const fn illuminated(digit: Digit, segment: Segment) -> bool {
    ILLUMINATION[digit.0 as usize][segment as usize]
}

/// Number of lit segments of `digit`.
pub const fn lit_segments(digit: Digit) -> usize {
    let row = &ILLUMINATION[digit.0 as usize];
    let mut count = 0;
    let mut i = 0;
    while i < row.len() {
        if row[i] {
            count += 1;
        }
        i += 1;
    }
    count
}

/// Cell origin of `segment` relative to the glyph anchor, before the
/// narrow-digit trim.
const fn segment_origin(config: &Config, segment: Segment) -> Point {
    let l = config.segment_len;
    let s = config.segment_gap;
    let h = config.half_width();

    match segment {
        Segment::A => Point::new(h + s, 0),
        Segment::B => Point::new(l - 1 + 2 * s, h + s),
        Segment::C => Point::new(l - 1 + 2 * s, l - 1 + 3 * s + h),
        Segment::D => Point::new(h + s, 2 * (l - 1) + 4 * s),
        Segment::E => Point::new(0, l - 1 + 3 * s + h),
        Segment::F => Point::new(0, h + s),
        Segment::G => Point::new(h + s, l - 1 + 2 * s),
    }
}

/// How far a digit's unlit left column is folded away.
///
/// 1 keeps only the right verticals, 3 and 7 have no left verticals; their
/// lit cells shift left so the ink starts at the anchor and the glyph width
/// below stays exact.
const fn left_trim(config: &Config, digit: Digit) -> i32 {
    match digit.0 {
        1 => config.segment_len - 1 + 2 * config.segment_gap,
        3 | 7 => config.segment_gap + config.half_width(),
        _ => 0,
    }
}

/// Advance width of a digit glyph.
///
/// The rightmost vertical cell's right edge always lands on `width - 1`.
pub const fn digit_width(config: &Config, digit: Digit) -> i32 {
    let h = config.half_width();
    match digit.0 {
        1 => config.segment_width,
        3 | 7 => config.segment_len + config.segment_gap + h,
        _ => config.segment_len + 2 * (config.segment_gap + h),
    }
}

/// Glyph height, shared by every digit.
pub const fn digit_height(config: &Config) -> i32 {
    2 * config.segment_len + 2 * config.half_width() + 4 * config.segment_gap
}

/// Advance width of the colon glyph.
pub const fn colon_width(config: &Config) -> i32 {
    config.segment_width
}

/// One cell outline translated to its final position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlacedCell {
    pub origin: Point,
    pub polygon: Polygon,
}

/// Lit cells of `digit` anchored at `anchor` (top-left of the glyph box).
pub const fn digit_cells(config: &Config, digit: Digit, anchor: Point) -> DigitCells {
    DigitCells {
        config: *config,
        digit,
        anchor,
        next: 0,
    }
}

/// Iterator over the lit cells of one digit glyph.
pub struct DigitCells {
    config: Config,
    digit: Digit,
    anchor: Point,
    next: usize,
}

impl Iterator for DigitCells {
    type Item = PlacedCell;

    fn next(&mut self) -> Option<PlacedCell> {
        while self.next < Segment::ALL.len() {
            let segment = Segment::ALL[self.next];
            self.next += 1;

            if !illuminated(self.digit, segment) {
                continue;
            }

            let offset = segment_origin(&self.config, segment);
            let trim = left_trim(&self.config, self.digit);
            let polygon = if segment.is_horizontal() {
                horizontal_cell(&self.config)
            } else {
                vertical_cell(&self.config)
            };

            return Some(PlacedCell {
                origin: self.anchor.offset(offset.x - trim, offset.y),
                polygon,
            });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn out_of_range_digits_are_rejected() {
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::new(255), None);
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert_eq!(Digit::mod10(27).value(), 7);
    }

    #[test]
    fn lit_counts_match_the_glyph_table() {
        let expected = [6, 2, 5, 5, 4, 5, 6, 3, 7, 6];
        for (value, expected) in expected.iter().enumerate() {
            assert_eq!(lit_segments(digit(value as u8)), *expected, "digit {value}");
        }
    }

    #[test]
    fn tails_of_six_and_nine_stay_on() {
        assert!(illuminated(digit(6), Segment::A));
        assert!(illuminated(digit(9), Segment::D));
    }

    #[test]
    fn emitted_cell_count_equals_lit_count() {
        let config = Config::default();
        for value in 0..=9 {
            let count = digit_cells(&config, digit(value), Point::new(0, 0)).count();
            assert_eq!(count, lit_segments(digit(value)), "digit {value}");
        }
    }

    #[test]
    fn digit_one_is_just_the_right_verticals() {
        let config = Config::default();
        let cells: Vec<PlacedCell> =
            digit_cells(&config, digit(1), Point::new(0, 0)).collect();

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].origin, Point::new(0, 2));
        assert_eq!(cells[1].origin, Point::new(0, 15));
        assert_eq!(cells[0].polygon, vertical_cell(&config));
    }

    #[test]
    fn widths_follow_the_narrow_digit_rules() {
        let config = Config::default();

        assert_eq!(digit_width(&config, digit(1)), 3);
        assert_eq!(digit_width(&config, digit(3)), 14);
        assert_eq!(digit_width(&config, digit(7)), 14);
        assert_eq!(digit_width(&config, digit(0)), 16);
        assert_eq!(digit_width(&config, digit(8)), 16);
        assert_eq!(colon_width(&config), 3);
    }

    #[test]
    fn height_is_constant_and_width_positive_for_all_digits() {
        let config = Config {
            segment_len: 17,
            segment_width: 5,
            segment_gap: 2,
            digit_gap: 3,
        };
        assert_eq!(config.validate(), Ok(()));

        let height = digit_height(&config);
        assert_eq!(height, 2 * 17 + 2 * 2 + 4 * 2);

        for value in 0..=9 {
            assert!(digit_width(&config, digit(value)) > 0);
            assert_eq!(digit_height(&config), height);
        }
    }

    fn ink_extent(config: &Config, value: u8) -> (i32, i32, i32, i32) {
        let mut x_min = i32::MAX;
        let mut x_max = i32::MIN;
        let mut y_min = i32::MAX;
        let mut y_max = i32::MIN;

        for cell in digit_cells(config, digit(value), Point::new(0, 0)) {
            for p in cell.polygon.points() {
                x_min = x_min.min(cell.origin.x + p.x);
                x_max = x_max.max(cell.origin.x + p.x);
                y_min = y_min.min(cell.origin.y + p.y);
                y_max = y_max.max(cell.origin.y + p.y);
            }
        }

        (x_min, x_max, y_min, y_max)
    }

    #[test]
    fn ink_starts_at_the_anchor_and_ends_on_the_width_edge() {
        for config in [
            Config::default(),
            Config {
                segment_len: 17,
                segment_width: 5,
                segment_gap: 2,
                digit_gap: 3,
            },
        ] {
            for value in 0..=9 {
                let (x_min, x_max, y_min, y_max) = ink_extent(&config, value);

                assert_eq!(x_min, 0, "digit {value} left edge");
                assert_eq!(
                    x_max + 1,
                    digit_width(&config, digit(value)),
                    "digit {value} right edge"
                );
                assert!(y_min >= 0, "digit {value} top edge");
                assert!(
                    y_max < digit_height(&config),
                    "digit {value} overflows its height box"
                );
            }
        }
    }

    #[test]
    fn upper_and_lower_right_cells_share_no_rows() {
        let config = Config::default();
        let b = segment_origin(&config, Segment::B);
        let c = segment_origin(&config, Segment::C);
        assert!(b.y + config.segment_len < c.y);
    }

    #[test]
    fn glyphs_with_a_top_bar_start_at_the_anchor_row() {
        let config = Config::default();
        for value in [0, 2, 3, 5, 6, 7, 8, 9] {
            let (_, _, y_min, _) = ink_extent(&config, value);
            assert_eq!(y_min, 0, "digit {value}");
        }
    }
}
