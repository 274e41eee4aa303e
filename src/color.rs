//! Color types and helpers for the strip engine.

use smart_leds::{RGB8, hsv::Hsv as HSV};

pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

// fill_rainbow keeps a touch of white in every hue, matching the
// FastLED function the strip behavior was tuned against.
const RAINBOW_SATURATION: u8 = 240;
const RAINBOW_VALUE: u8 = 255;

/// Error returned when a `"#RRGGBB"` string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// The leading `#` is missing.
    MissingHash,
    /// The digit part is not exactly six characters.
    BadLength,
    /// A character is not a hex digit.
    BadDigit,
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Parse a `"#RRGGBB"` hex string into a color.
///
/// Malformed input yields a typed error so callers can tell a parse
/// failure apart from a valid black.
pub fn parse_hex_color(s: &str) -> Result<Rgb, ColorParseError> {
    let digits = s.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;
    if digits.len() != 6 {
        return Err(ColorParseError::BadLength);
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::BadDigit);
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::BadDigit)?;
    Ok(rgb_from_u32(value))
}

/// Fill the strip with a hue sweep starting at `initial_hue`,
/// advancing by `hue_delta` per pixel.
pub fn fill_rainbow(leds: &mut [Rgb], initial_hue: u8, hue_delta: u8) {
    let mut hue = initial_hue;
    for led in leds {
        *led = hsv2rgb(Hsv {
            hue,
            sat: RAINBOW_SATURATION,
            val: RAINBOW_VALUE,
        });
        hue = hue.wrapping_add(hue_delta);
    }
}
