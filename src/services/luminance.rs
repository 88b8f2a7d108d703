use crate::models::color::Rgb;
use crate::utils::error::ColorResult;

pub fn perceived_brightness(color: &str) -> ColorResult<f64> {
    Ok(Rgb::from_hex(color)?.brightness())
}

pub fn is_dark_color(color: &str) -> ColorResult<bool> {
    Ok(Rgb::from_hex(color)?.is_dark())
}
