mod aabb;
mod color;

pub use aabb::AABB;
pub use color::{color_from_string, hex_from_string, string_hash, Rgb};
