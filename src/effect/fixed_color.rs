//! Fixed color fill effect
//!
//! Fills all LEDs with a single operator-chosen color. Brightness for this
//! mode goes through the strip driver's global linear control, not the
//! per-pixel video scaling the temperature mode uses.

use embassy_time::Instant;

use super::Effect;
use crate::color::Rgb;

/// Fixed color effect - fills all LEDs with one color
#[derive(Debug, Clone, Copy)]
pub struct FixedColorEffect {
    color: Rgb,
}

impl FixedColorEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Effect for FixedColorEffect {
    fn render(&self, _now: Instant, leds: &mut [Rgb]) {
        for led in leds {
            *led = self.color;
        }
    }
}
