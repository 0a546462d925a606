use serde::{Deserialize, Serialize};

/// Linear RGB triple in `0.0..=1.0`
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([1.0, 1.0, 1.0]);
    pub const BLACK: Rgb = Rgb([0.0, 0.0, 0.0]);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    /// Build from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self([r, g, b])
    }

    pub fn to_hex(self) -> u32 {
        let [r, g, b] = self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u32);
        (r << 16) | (g << 8) | b
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb([
            self.0[0] + (other.0[0] - self.0[0]) * t,
            self.0[1] + (other.0[1] - self.0[1]) * t,
            self.0[2] + (other.0[2] - self.0[2]) * t,
        ])
    }

    pub fn scale(self, factor: f32) -> Rgb {
        Rgb(self.0.map(|c| (c * factor).clamp(0.0, 1.0)))
    }
}

const COLOR_MIX: u32 = 2_654_435_761;

/// Rolling hash over UTF-16 code units, `h = h * 31 + unit`, wrapping at 32 bits
pub fn string_hash(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as u32))
}

/// Packed 24-bit color derived from a seed string.
///
/// The arithmetic is fixed: any change alters every generated palette.
pub fn hex_from_string(seed: &str) -> u32 {
    string_hash(seed).wrapping_mul(COLOR_MIX) & 0x00ff_ffff
}

pub fn color_from_string(seed: &str) -> Rgb {
    Rgb::from_hex(hex_from_string(seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash_known_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn test_string_hash_wraps() {
        // 19 units overflow u32; the result must match wrapping arithmetic exactly
        assert_eq!(string_hash("a giant battle mech"), 0x6bd6_8a8b);
        assert_eq!(hex_from_string("a giant battle mech"), 0x00ae_7d1b);
        assert_eq!(hex_from_string("tiger"), 0x001c_bb0f);
    }

    #[test]
    fn test_string_hash_uses_utf16_units() {
        assert_eq!(string_hash("café"), 0x002e_7a21);
        // One astral code point is a surrogate pair of two units
        assert_eq!(string_hash("\u{1F42F}"), 0xd83d * 31 + 0xdc2f);
        assert_eq!(hex_from_string("\u{1F42F}"), 0x0089_01f2);
    }

    #[test]
    fn test_hex_from_string_is_24_bit() {
        for seed in ["", "tiger", "banana", "a much longer prompt with spaces"] {
            assert!(hex_from_string(seed) <= 0x00ff_ffff);
        }
    }

    #[test]
    fn test_hex_from_string_exact() {
        // 97 * 2654435761 = 257480268817, low 32 bits = 0xf305_1c11
        assert_eq!(hex_from_string("a"), 0x0005_1c11);
    }

    #[test]
    fn test_color_from_string_deterministic() {
        assert_eq!(color_from_string("tiger"), color_from_string("tiger"));
        assert_ne!(color_from_string("tiger"), color_from_string("tigers"));
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb::from_hex(0x12ab_ef);
        assert_eq!(color.to_hex(), 0x12ab_ef);
    }
}
