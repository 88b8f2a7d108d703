use crate::models::color::Rgb;
use crate::utils::error::{ColorError, ColorResult, INVALID_PERCENT_MESSAGE};

pub fn adjust_channel(value: u8, percent: f64) -> u8 {
    let adjusted = (f64::from(value) + 255.0 * percent / 100.0).clamp(0.0, 255.0);
    adjusted.round() as u8
}

pub fn adjust_brightness(color: &str, percent: f64) -> ColorResult<String> {
    let rgb = Rgb::from_hex(color)?;

    if percent.is_nan() {
        return Err(ColorError::InvalidArgument(INVALID_PERCENT_MESSAGE));
    }

    let adjusted = Rgb::new(
        adjust_channel(rgb.r, percent),
        adjust_channel(rgb.g, percent),
        adjust_channel(rgb.b, percent),
    );

    tracing::trace!(from = %rgb, to = %adjusted, percent, "adjusted brightness");

    Ok(adjusted.to_hex())
}
