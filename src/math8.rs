/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value by a factor using the "video" law
///
/// Unlike [`scale8`], a nonzero value scaled by a nonzero factor never
/// drops to zero. This keeps dim channels lit at low brightness and
/// avoids the color shift a plain multiply causes on LED strips.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8_video(value: u8, scale: u8) -> u8 {
    let scaled = ((value as u16 * scale as u16) >> 8) as u8;
    if value != 0 && scale != 0 {
        scaled + 1
    } else {
        scaled
    }
}

/// Linear integer rescale from one range to another
///
/// Same law as the classic Arduino `map`: truncating integer division,
/// no clamping. Inverted output ranges are allowed.
#[inline]
pub const fn rescale(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Linear float rescale from one range to another
///
/// No clamping; callers clamp where the output feeds an 8-bit channel.
#[inline]
pub fn rescale_f32(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (value - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}
