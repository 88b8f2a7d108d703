pub mod brightness;
pub mod hash_color;
pub mod luminance;
pub mod random_color;
