pub mod api;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

pub use models::color::Rgb;
pub use services::{
    brightness::adjust_brightness, hash_color::string_to_color, luminance::is_dark_color,
    random_color::generate_random_color,
};
pub use utils::error::{ColorError, ColorResult};
