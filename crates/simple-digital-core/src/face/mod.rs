//! Watchface state machine: redraw coalescing and palette lifecycle.

use log::debug;
use sevencell::{Config, ConfigError};

use crate::frame::{Bounds, FramePlan, RenderRequest, plan_frame};
use crate::settings::{Palette, SettingsStore};
use crate::time::{HourFormat, TimeOfDay};


/// Outcome of one tick: whether the host should repaint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// State kept across redraws.
///
/// Single-threaded by construction: the host calls [`tick`](Self::tick) and
/// [`frame`](Self::frame) from its update callback, and settings changes
/// land between redraws as a whole-palette replacement.
pub struct Watchface {
    config: Config,
    palette: Palette,
    format: HourFormat,
    shown: Option<TimeOfDay>,
    pending_redraw: bool,
}

impl Watchface {
    /// Builds a face over validated layout parameters.
    ///
    /// Invalid parameters are rejected here so render paths never see them.
    pub fn new(config: Config, format: HourFormat) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            palette: Palette::default(),
            format,
            shown: None,
            pending_redraw: true,
        })
    }

    pub const fn config(&self) -> Config {
        self.config
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    pub const fn hour_format(&self) -> HourFormat {
        self.format
    }

    /// Whether the minute boundary (or a pending settings change) warrants a
    /// repaint. Repeated ticks within one shown minute coalesce to
    /// [`TickResult::NoRender`]; there is no redraw queue to drain.
    pub fn tick(&mut self, now: TimeOfDay) -> TickResult {
        if self.pending_redraw {
            return TickResult::RenderRequested;
        }

        match self.shown {
            Some(shown) if shown == now => TickResult::NoRender,
            _ => TickResult::RenderRequested,
        }
    }

    /// Lays out the frame for `now` inside `bounds` and records the minute
    /// as shown.
    ///
    /// Centering is re-derived from `bounds` on every call; the host may
    /// have shrunk the rectangle since the last redraw.
    pub fn frame(&mut self, now: TimeOfDay, bounds: Bounds) -> FramePlan {
        self.pending_redraw = false;
        self.shown = Some(now);

        debug!(
            "frame {:02}:{:02} in {}x{}",
            now.hour(),
            now.minute(),
            bounds.width,
            bounds.height
        );

        plan_frame(
            &self.config,
            self.palette,
            RenderRequest {
                time: now,
                format: self.format,
                bounds,
            },
        )
    }

    /// Replaces the whole palette in one assignment and schedules a repaint.
    pub fn apply_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.pending_redraw = true;
    }

    /// Restores the palette from `store`, falling back to the default
    /// white-on-black face when nothing has been saved yet.
    pub fn restore_palette<S: SettingsStore>(&mut self, store: &mut S) -> Result<(), S::Error> {
        let palette = store.load()?.unwrap_or_default();
        self.apply_palette(palette);
        Ok(())
    }

    /// Saves the current palette through `store`.
    pub fn persist_palette<S: SettingsStore>(&self, store: &mut S) -> Result<(), S::Error> {
        store.save(&self.palette)
    }
}
