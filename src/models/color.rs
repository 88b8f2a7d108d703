use std::fmt;
use std::str::FromStr;

use crate::utils::error::{ColorError, ColorResult};
use crate::utils::validation::validate_hex_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(color: &str) -> ColorResult<Self> {
        let hex = validate_hex_color(color)?;

        let channel = |range: std::ops::Range<usize>| -> ColorResult<u8> {
            let digits = &hex[range];
            let digits = if digits.len() == 1 {
                digits.repeat(2)
            } else {
                digits.to_string()
            };
            u8::from_str_radix(&digits, 16).map_err(|_| ColorError::InvalidFormat)
        };

        if hex.len() == 3 {
            Ok(Self::new(channel(0..1)?, channel(1..2)?, channel(2..3)?))
        } else {
            Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
        }
    }

    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        }
    }

    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    pub fn brightness(&self) -> f64 {
        (f64::from(self.r) * 299.0 + f64::from(self.g) * 587.0 + f64::from(self.b) * 114.0)
            / 1000.0
    }

    pub fn is_dark(&self) -> bool {
        self.brightness() < DARK_THRESHOLD
    }
}

pub const DARK_THRESHOLD: f64 = 128.0;

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
