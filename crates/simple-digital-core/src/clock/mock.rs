use super::ClockSource;
use crate::time::{HourFormat, TimeOfDay};

/// Fixed-time source used during bring-up and in tests.
#[derive(Debug, Clone, Copy)]
pub struct MockClock {
    time: TimeOfDay,
    format: HourFormat,
}

impl MockClock {
    pub const fn new(time: TimeOfDay, format: HourFormat) -> Self {
        Self { time, format }
    }

    /// Moves the mock clock to `time`.
    pub fn set(&mut self, time: TimeOfDay) {
        self.time = time;
    }
}

impl ClockSource for MockClock {
    type Error = core::convert::Infallible;

    fn now(&mut self) -> Result<TimeOfDay, Self::Error> {
        Ok(self.time)
    }

    fn hour_format(&self) -> HourFormat {
        self.format
    }
}
