//! Wall-clock values and digit splitting.

use sevencell::Digit;

/// Hour display preference.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HourFormat {
    H12,
    H24,
}

/// Validated wall-clock time of day.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Accepts hour `0..=23` and minute `0..=59`.
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour <= 23 && minute <= 59 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    pub const fn hour(self) -> u8 {
        self.hour
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }
}

/// Hour value as shown on the face.
///
/// In 12-hour format midnight reads 12 and afternoon hours wrap to `1..=11`.
pub const fn display_hour(hour: u8, format: HourFormat) -> u8 {
    match format {
        HourFormat::H24 => hour,
        HourFormat::H12 => match hour % 12 {
            0 => 12,
            wrapped => wrapped,
        },
    }
}

/// The four glyph digits of one displayed time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeDigits {
    /// `None` when the leading hour digit is suppressed.
    pub hour_tens: Option<Digit>,
    pub hour_ones: Digit,
    pub minute_tens: Digit,
    pub minute_ones: Digit,
}

impl TimeDigits {
    /// Splits `time` for display, applying the 12-hour conversion before
    /// deciding on leading-zero suppression.
    pub const fn of(time: TimeOfDay, format: HourFormat) -> Self {
        let hour = display_hour(time.hour(), format);
        let hour_tens = hour / 10;
        let suppress = matches!(format, HourFormat::H12) && hour_tens == 0;

        Self {
            hour_tens: if suppress {
                None
            } else {
                Some(Digit::mod10(hour_tens))
            },
            hour_ones: Digit::mod10(hour),
            minute_tens: Digit::mod10(time.minute() / 10),
            minute_ones: Digit::mod10(time.minute()),
        }
    }
}
