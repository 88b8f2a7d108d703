use serde_json::Value;

use crate::utils::error::{ColorError, ColorResult};

pub fn string_hash(input: &str) -> i32 {
    input.encode_utf16().fold(0i32, |acc, unit| {
        i32::from(unit).wrapping_add(acc.wrapping_shl(5).wrapping_sub(acc))
    })
}

/// The low byte of the hash becomes the first channel, so the digits read
/// byte0, byte1, byte2 from least significant upwards.
pub fn string_to_color(input: &str) -> ColorResult<String> {
    if input.is_empty() {
        return Err(ColorError::invalid_input());
    }

    let hash = string_hash(input);
    let color: String = (0..3)
        .map(|i| format!("{:02x}", (hash >> (i * 8)) & 0xff))
        .collect();

    tracing::trace!(hash, %color, "hashed string to color");

    Ok(format!("#{}", color))
}

pub fn string_to_color_value(input: &Value) -> ColorResult<String> {
    match input {
        Value::String(s) => string_to_color(s),
        _ => Err(ColorError::invalid_input()),
    }
}
