//! Temperature gradient effect
//!
//! Maps the current temperature onto a red/blue gradient and fills every
//! pixel with the same color. Brightness is applied per pixel with the
//! video scaling law; the strip driver's global brightness stays untouched
//! for this mode.

use embassy_time::Instant;
use libm::roundf;

use super::Effect;
use crate::{
    color::Rgb,
    math8::{rescale_f32, scale8_video},
};

/// Comfortable indoor range mapped across the full channel span.
const RANGE_MIN_CELSIUS: f32 = 15.0;
const RANGE_MAX_CELSIUS: f32 = 30.0;

/// Temperature effect - red rises and blue falls with the temperature
#[derive(Debug, Clone, Copy)]
pub struct TemperatureEffect {
    temperature: f32,
    drive: u8,
}

impl TemperatureEffect {
    pub const fn new(temperature: f32, drive: u8) -> Self {
        Self { temperature, drive }
    }

    /// Gradient color before brightness scaling.
    ///
    /// The red and blue channels are complementary by construction;
    /// out-of-range temperatures clamp to the channel bounds.
    pub fn base_color(temperature: f32) -> Rgb {
        let red = red_channel(temperature);
        Rgb {
            r: red,
            g: 0,
            b: 255 - red,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn red_channel(temperature: f32) -> u8 {
    let scaled = rescale_f32(temperature, RANGE_MIN_CELSIUS, RANGE_MAX_CELSIUS, 0.0, 255.0);
    roundf(scaled.clamp(0.0, 255.0)) as u8
}

impl Effect for TemperatureEffect {
    fn render(&self, _now: Instant, leds: &mut [Rgb]) {
        let base = Self::base_color(self.temperature);
        let color = Rgb {
            r: scale8_video(base.r, self.drive),
            g: 0,
            b: scale8_video(base.b, self.drive),
        };

        for led in leds {
            *led = color;
        }
    }
}
