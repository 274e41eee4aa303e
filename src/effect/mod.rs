//! Render modes for the strip.
//!
//! Modes are pure functions of the current state: the engine rebuilds the
//! active effect from [`crate::render::RenderState`] every tick, so there
//! is no transition history to carry between frames.

mod fixed_color;
mod rainbow;
mod temperature;

use embassy_time::Instant;
pub use fixed_color::FixedColorEffect;
pub use rainbow::RainbowEffect;
pub use temperature::TemperatureEffect;

use crate::color::Rgb;

// Wire names used by the control panel. The control page has always
// called the temperature gradient mode "static".
const MODE_NAME_TEMPERATURE: &str = "static";
const MODE_NAME_FIXED: &str = "rgb";
const MODE_NAME_RAINBOW: &str = "rainbow";

pub trait Effect {
    /// Render a single frame
    fn render(&self, now: Instant, leds: &mut [Rgb]);
}

/// Known render modes that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Temperature mapped to a red/blue gradient color
    Temperature,
    /// One operator-chosen color on every pixel
    Fixed,
    /// Continuously cycling hue sweep
    Rainbow,
}

impl RenderMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Temperature => MODE_NAME_TEMPERATURE,
            Self::Fixed => MODE_NAME_FIXED,
            Self::Rainbow => MODE_NAME_RAINBOW,
        }
    }

    /// Parse a wire name. Unknown names yield `None`, so callers keep
    /// whatever mode was previously set.
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_TEMPERATURE => Some(Self::Temperature),
            MODE_NAME_FIXED => Some(Self::Fixed),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }
}
