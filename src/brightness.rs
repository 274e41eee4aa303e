//! Ambient light to brightness mapping.

use crate::math8::rescale;

/// Full scale of the photoresistor ADC.
pub const ADC_MAX: u16 = 1023;

/// Ambient light level derived from one ADC sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightLevel {
    /// Raw ADC reading, 0-1023.
    pub raw: u16,
    /// Linear rescale of `raw` to 0-100.
    pub percent: u8,
}

impl LightLevel {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_raw(raw: u16) -> Self {
        let percent = rescale(raw as i32, 0, ADC_MAX as i32, 0, 100) as u8;
        Self { raw, percent }
    }
}

/// Compute the auto-brightness drive level from an ambient light percent.
///
/// The mapping is inverted: brighter ambient light yields a lower drive,
/// following `255 - round(percent * 2.55)`.
#[allow(clippy::cast_possible_truncation)]
pub const fn auto_drive(percent: u8) -> u8 {
    let scaled = (percent as u16 * 255 + 50) / 100;
    255 - scaled as u8
}
