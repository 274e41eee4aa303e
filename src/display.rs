//! Numeric display presenter.
//!
//! Alternates the temperature and humidity readings on a fixed 1-second
//! cadence. Values are truncated toward zero, not rounded.

use embassy_time::{Duration, Instant};

use crate::{DisplayDriver, sensor::EnvironmentReading};

/// Cadence at which the shown value flips.
pub const DISPLAY_INTERVAL: Duration = Duration::from_secs(1);

pub struct DisplayPresenter {
    showing_temperature: bool,
    last_update: Instant,
}

impl DisplayPresenter {
    pub const fn new() -> Self {
        Self {
            showing_temperature: true,
            last_update: Instant::from_millis(0),
        }
    }

    /// Update the display if the cadence elapsed.
    ///
    /// An invalid reading skips the update entirely: no clear, no toggle,
    /// no cadence advance. The display keeps whatever it showed last.
    #[allow(clippy::cast_possible_truncation)]
    pub fn present<D: DisplayDriver>(
        &mut self,
        reading: &EnvironmentReading,
        now: Instant,
        display: &mut D,
    ) {
        if !reading.valid {
            return;
        }
        if now.duration_since(self.last_update) < DISPLAY_INTERVAL {
            return;
        }
        self.last_update = now;

        display.clear();
        let value = if self.showing_temperature {
            reading.temperature
        } else {
            reading.humidity
        };
        display.show_number(value as i32);

        self.showing_temperature = !self.showing_temperature;
    }
}

impl Default for DisplayPresenter {
    fn default() -> Self {
        Self::new()
    }
}
