use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::error::{ColorError, ColorResult};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#(?:[0-9a-f]{6}|[0-9a-f]{3})$").expect("valid hex color regex"));

pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR_RE.is_match(color)
}

// Returns the digits without the leading `#`.
pub fn validate_hex_color(color: &str) -> ColorResult<&str> {
    if !is_hex_color(color) {
        return Err(ColorError::InvalidFormat);
    }

    Ok(&color[1..])
}
