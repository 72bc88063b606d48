//! Visible timeline window and pixel scale.
//!
//! # Invariants
//! - `start < end` and `tick_interval_minutes > 0`.
//! - The pixel origin is derived from `start` once, at construction; nothing
//!   else in the layout engine carries its own anchor.

use crate::model::time::{time_of_day, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEFAULT_WINDOW_START: TimeOfDay = time_of_day(16, 0);
pub const DEFAULT_WINDOW_END: TimeOfDay = time_of_day(18, 0);
pub const DEFAULT_TICK_INTERVAL_MINUTES: u16 = 30;
pub const DEFAULT_PIXELS_PER_MINUTE: f64 = 2.0;

/// Rejected window or scale configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowError {
    /// `end` is not strictly after `start`.
    EmptyWindow { start: TimeOfDay, end: TimeOfDay },
    /// Tick interval of zero minutes.
    ZeroTickInterval,
    /// Pixel scale that is zero, negative or not finite.
    InvalidScale(f64),
}

impl Display for WindowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyWindow { start, end } => {
                write!(f, "timeline window end ({end}) must be after start ({start})")
            }
            Self::ZeroTickInterval => f.write_str("tick interval must be greater than zero"),
            Self::InvalidScale(value) => {
                write!(f, "pixels per minute must be a positive number, got {value}")
            }
        }
    }
}

impl Error for WindowError {}

/// Fixed `(start, end, tick interval)` extent of the rendered timeline.
///
/// Deserialization fills missing fields from the defaults and applies the
/// same checks as [`TimelineWindow::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimelineWindowRecord")]
pub struct TimelineWindow {
    start: TimeOfDay,
    end: TimeOfDay,
    tick_interval_minutes: u16,
}

impl TimelineWindow {
    /// Creates a window.
    ///
    /// # Errors
    /// - `EmptyWindow` when `end <= start`.
    /// - `ZeroTickInterval` when `tick_interval_minutes == 0`.
    pub fn new(
        start: TimeOfDay,
        end: TimeOfDay,
        tick_interval_minutes: u16,
    ) -> Result<Self, WindowError> {
        if start >= end {
            return Err(WindowError::EmptyWindow { start, end });
        }
        if tick_interval_minutes == 0 {
            return Err(WindowError::ZeroTickInterval);
        }
        Ok(Self {
            start,
            end,
            tick_interval_minutes,
        })
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn tick_interval_minutes(&self) -> u16 {
        self.tick_interval_minutes
    }

    /// Window length in minutes.
    pub fn span_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }
}

impl Default for TimelineWindow {
    /// `16:00`–`18:00` with a tick every 30 minutes.
    fn default() -> Self {
        Self {
            start: DEFAULT_WINDOW_START,
            end: DEFAULT_WINDOW_END,
            tick_interval_minutes: DEFAULT_TICK_INTERVAL_MINUTES,
        }
    }
}

#[derive(Deserialize)]
struct TimelineWindowRecord {
    #[serde(default = "default_start")]
    start: TimeOfDay,
    #[serde(default = "default_end")]
    end: TimeOfDay,
    #[serde(default = "default_tick_interval")]
    tick_interval_minutes: u16,
}

fn default_start() -> TimeOfDay {
    DEFAULT_WINDOW_START
}

fn default_end() -> TimeOfDay {
    DEFAULT_WINDOW_END
}

fn default_tick_interval() -> u16 {
    DEFAULT_TICK_INTERVAL_MINUTES
}

impl TryFrom<TimelineWindowRecord> for TimelineWindow {
    type Error = WindowError;

    fn try_from(record: TimelineWindowRecord) -> Result<Self, Self::Error> {
        Self::new(record.start, record.end, record.tick_interval_minutes)
    }
}

/// Window plus the linear time-to-pixel mapping used for every event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineLayout {
    window: TimelineWindow,
    pixels_per_minute: f64,
    reference_offset: u16,
}

impl TimelineLayout {
    /// Creates a layout anchored at `window.start()`.
    ///
    /// # Errors
    /// - `InvalidScale` when `pixels_per_minute` is not a positive finite number.
    pub fn new(window: TimelineWindow, pixels_per_minute: f64) -> Result<Self, WindowError> {
        if !pixels_per_minute.is_finite() || pixels_per_minute <= 0.0 {
            return Err(WindowError::InvalidScale(pixels_per_minute));
        }
        Ok(Self {
            window,
            pixels_per_minute,
            reference_offset: window.start().minutes(),
        })
    }

    pub fn window(&self) -> &TimelineWindow {
        &self.window
    }

    pub fn pixels_per_minute(&self) -> f64 {
        self.pixels_per_minute
    }

    /// Minute offset mapped to pixel `0`; always the window start.
    pub fn reference_offset(&self) -> u16 {
        self.reference_offset
    }

    /// Vertical pixel offset of a time of day; negative before the window.
    pub fn offset_of(&self, time: TimeOfDay) -> f64 {
        (f64::from(time.minutes()) - f64::from(self.reference_offset)) * self.pixels_per_minute
    }

    /// Total pixel height of the window.
    pub fn extent(&self) -> f64 {
        f64::from(self.window.span_minutes()) * self.pixels_per_minute
    }
}

impl Default for TimelineLayout {
    fn default() -> Self {
        let window = TimelineWindow::default();
        Self {
            window,
            pixels_per_minute: DEFAULT_PIXELS_PER_MINUTE,
            reference_offset: window.start().minutes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TimelineLayout, TimelineWindow, WindowError};
    use crate::model::time::TimeOfDay;

    fn t(text: &str) -> TimeOfDay {
        text.parse().unwrap()
    }

    #[test]
    fn default_window_is_four_to_six_pm_every_half_hour() {
        let window = TimelineWindow::default();
        assert_eq!(window.start(), t("16:00"));
        assert_eq!(window.end(), t("18:00"));
        assert_eq!(window.tick_interval_minutes(), 30);
        assert_eq!(window.span_minutes(), 120);
    }

    #[test]
    fn window_rejects_empty_or_reversed_range() {
        let err = TimelineWindow::new(t("18:00"), t("18:00"), 30).unwrap_err();
        assert!(matches!(err, WindowError::EmptyWindow { .. }));
        let err = TimelineWindow::new(t("18:00"), t("16:00"), 30).unwrap_err();
        assert!(matches!(err, WindowError::EmptyWindow { .. }));
    }

    #[test]
    fn window_rejects_zero_interval() {
        let err = TimelineWindow::new(t("16:00"), t("18:00"), 0).unwrap_err();
        assert_eq!(err, WindowError::ZeroTickInterval);
    }

    #[test]
    fn layout_anchor_follows_configured_window() {
        let window = TimelineWindow::new(t("9:00"), t("12:00"), 60).unwrap();
        let layout = TimelineLayout::new(window, 1.5).unwrap();
        assert_eq!(layout.reference_offset(), 540);
        assert_eq!(layout.offset_of(t("9:00")), 0.0);
        assert_eq!(layout.offset_of(t("10:00")), 90.0);
        assert_eq!(layout.extent(), 270.0);
    }

    #[test]
    fn layout_rejects_non_positive_scale() {
        let window = TimelineWindow::default();
        assert!(TimelineLayout::new(window, 0.0).is_err());
        assert!(TimelineLayout::new(window, -2.0).is_err());
        assert!(TimelineLayout::new(window, f64::NAN).is_err());
    }

    #[test]
    fn default_layout_matches_default_window_at_two_pixels_per_minute() {
        let layout = TimelineLayout::default();
        assert_eq!(layout.reference_offset(), 960);
        assert_eq!(layout.pixels_per_minute(), 2.0);
        assert_eq!(layout.extent(), 240.0);
    }
}
