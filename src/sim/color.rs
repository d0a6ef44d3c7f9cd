//! Typed RGB color with the two operations the game needs
//!
//! Channels are bytes so every value is in range by construction.

use serde::{Deserialize, Serialize};

/// An opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Linear interpolation toward `other`; `t` is clamped to [0, 1]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Scale every channel by `factor` (0..=1 darkens)
    pub fn darken(self, factor: f32) -> Rgb {
        let scale = |c: u8| -> u8 { (c as f32 * factor).round().clamp(0.0, 255.0) as u8 };
        Rgb {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    /// Normalized RGBA for the GPU
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

/// Regular balloon colors
pub const BALLOON_PALETTE: [Rgb; 10] = [
    Rgb::from_hex(0xFF6B6B), // Red
    Rgb::from_hex(0x4ECDC4), // Teal
    Rgb::from_hex(0x45B7D1), // Blue
    Rgb::from_hex(0x96CEB4), // Green
    Rgb::from_hex(0xFFEAA7), // Yellow
    Rgb::from_hex(0xDDA0DD), // Plum
    Rgb::from_hex(0x98D8C8), // Mint
    Rgb::from_hex(0xF7DC6F), // Light yellow
    Rgb::from_hex(0xBB8FCE), // Light purple
    Rgb::from_hex(0x85C1E9), // Light blue
];

/// Bonus balloons are always gold
pub const BONUS_GOLD: Rgb = Rgb::from_hex(0xFFD700);

/// Fresh catcher body color
pub const CATCHER_BROWN: Rgb = Rgb::from_hex(0x8B4513);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex(0x8B4513), Rgb::new(0x8B, 0x45, 0x13));
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(100, 100, 100));
        // Out-of-range factors are clamped
        assert_eq!(a.lerp(b, 7.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }

    #[test]
    fn test_darken() {
        assert_eq!(Rgb::new(100, 50, 255).darken(0.8), Rgb::new(80, 40, 204));
    }

    #[test]
    fn test_bonus_gold_not_in_palette() {
        assert!(!BALLOON_PALETTE.contains(&BONUS_GOLD));
    }
}
