//! Wall-clock abstraction layer.

use crate::time::{HourFormat, TimeOfDay};

pub mod mock;

/// Time source behind the host's minute-tick service.
pub trait ClockSource {
    type Error;

    /// Current wall-clock time.
    fn now(&mut self) -> Result<TimeOfDay, Self::Error>;

    /// The user's hour display preference.
    fn hour_format(&self) -> HourFormat;
}
