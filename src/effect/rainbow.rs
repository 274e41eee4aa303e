//! Rainbow cycling effect
//!
//! A hue sweep across the pixel sequence whose phase advances one hue step
//! per 10 ms of wall-clock time. Brightness goes through the strip
//! driver's global linear control.

use embassy_time::Instant;

use super::Effect;
use crate::color::{Rgb, fill_rainbow};

/// Milliseconds of wall-clock time per hue phase step.
const PHASE_STEP_MS: u64 = 10;
/// Hue advance between adjacent pixels.
const HUE_DELTA: u8 = 7;

/// Rainbow effect - time-phased hue sweep
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowEffect;

impl Effect for RainbowEffect {
    fn render(&self, now: Instant, leds: &mut [Rgb]) {
        #[allow(clippy::cast_possible_truncation)]
        let base_hue = ((now.as_millis() / PHASE_STEP_MS) % 256) as u8;
        fill_rainbow(leds, base_hue, HUE_DELTA);
    }
}
