//! Color value types and palette helpers.
//!
//! Provides byte-space [`Rgb`] and CSS-space [`Hsl`] colors, hex string
//! parsing and formatting, and the random/harmonious palette generators
//! used by the gradient tooling.

use rhizome_patina_core::SineRng;

// ============================================================================
// RGB
// ============================================================================

/// An 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from the low 24 bits of a value (0xRRGGBB).
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Parses a six-digit hex color, with or without a leading `#`.
    ///
    /// Anything else (shorthand, wrong length, stray characters) returns
    /// `None`.
    pub fn from_hex_str(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Self::from_u24(value))
    }

    /// Formats as a lowercase `#rrggbb` string.
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts to CSS-space HSL.
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self)
    }
}

// ============================================================================
// HSL
// ============================================================================

/// A CSS-space HSL color with integer components.
///
/// Hue is in degrees (0-360), saturation and lightness in percent (0-100),
/// each rounded to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees (0-360).
    pub h: u16,
    /// Saturation in percent (0-100).
    pub s: u8,
    /// Lightness in percent (0-100).
    pub l: u8,
}

impl Hsl {
    /// Creates a new HSL color.
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Converts an RGB color to HSL.
    ///
    /// Achromatic colors map to hue 0 and saturation 0.
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let mut h = 0.0;
        let mut s = 0.0;
        if max != min {
            let d = max - min;
            s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
            h = if max == r {
                ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
            } else if max == g {
                ((b - r) / d + 2.0) / 6.0
            } else {
                ((r - g) / d + 4.0) / 6.0
            };
        }

        Self {
            h: (h * 360.0).round() as u16,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }

    /// Formats as a CSS `hsl(h, s%, l%)` string.
    pub fn to_css_string(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

// ============================================================================
// Palette generators
// ============================================================================

/// Draws a random 24-bit color from the generator.
///
/// The value is `floor(next * 16777215)`, so pure white is never produced.
pub fn random_color(rng: &mut SineRng) -> Rgb {
    Rgb::from_u24((rng.next_f64() * 16_777_215.0).floor() as u32)
}

/// Builds `count` evenly hue-rotated CSS color strings from a base hex
/// color.
///
/// The base is parsed with [`Rgb::from_hex_str`]; a malformed base is
/// passed through unchanged as the only element. Rotated hues keep the
/// base saturation and lightness and may be fractional.
pub fn harmonious_colors(base_hex: &str, count: usize) -> Vec<String> {
    let Some(rgb) = Rgb::from_hex_str(base_hex) else {
        return vec![base_hex.to_string()];
    };
    let hsl = rgb.to_hsl();

    (0..count)
        .map(|i| {
            let hue = (hsl.h as f64 + (360.0 / count as f64) * i as f64) % 360.0;
            format!("hsl({}, {}%, {}%)", hue, hsl.s, hsl.l)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parse_accepts_both_prefixes() {
        assert_eq!(Rgb::from_hex_str("#ff6b6b"), Some(Rgb::new(255, 107, 107)));
        assert_eq!(Rgb::from_hex_str("ff6b6b"), Some(Rgb::new(255, 107, 107)));
        assert_eq!(Rgb::from_hex_str("#FF6B6B"), Some(Rgb::new(255, 107, 107)));
    }

    #[test]
    fn test_hex_parse_rejects_malformed() {
        // Three-digit shorthand is not accepted
        assert_eq!(Rgb::from_hex_str("#fff"), None);
        assert_eq!(Rgb::from_hex_str("#ff6b6"), None);
        assert_eq!(Rgb::from_hex_str("#ff6b6b7"), None);
        assert_eq!(Rgb::from_hex_str("not a color"), None);
        assert_eq!(Rgb::from_hex_str(""), None);
        assert_eq!(Rgb::from_hex_str("#gggggg"), None);
    }

    #[test]
    fn test_hex_format_roundtrip() {
        let c = Rgb::new(102, 126, 234);
        assert_eq!(c.to_hex_string(), "#667eea");
        assert_eq!(Rgb::from_hex_str(&c.to_hex_string()), Some(c));
    }

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Hsl::from_rgb(Rgb::new(255, 0, 0)), Hsl::new(0, 100, 50));
        assert_eq!(Hsl::from_rgb(Rgb::new(0, 255, 0)), Hsl::new(120, 100, 50));
        assert_eq!(Hsl::from_rgb(Rgb::new(0, 0, 255)), Hsl::new(240, 100, 50));
    }

    #[test]
    fn test_hsl_achromatic() {
        assert_eq!(Hsl::from_rgb(Rgb::BLACK), Hsl::new(0, 0, 0));
        assert_eq!(Hsl::from_rgb(Rgb::WHITE), Hsl::new(0, 0, 100));
        assert_eq!(Hsl::from_rgb(Rgb::new(128, 128, 128)), Hsl::new(0, 0, 50));
    }

    #[test]
    fn test_harmonious_rotation() {
        let colors = harmonious_colors("#ff0000", 3);
        assert_eq!(
            colors,
            vec![
                "hsl(0, 100%, 50%)",
                "hsl(120, 100%, 50%)",
                "hsl(240, 100%, 50%)"
            ]
        );
    }

    #[test]
    fn test_harmonious_malformed_base_passthrough() {
        assert_eq!(harmonious_colors("#zzz", 4), vec!["#zzz"]);
        assert_eq!(harmonious_colors("", 4), vec![""]);
    }

    #[test]
    fn test_harmonious_zero_count() {
        assert!(harmonious_colors("#ff0000", 0).is_empty());
    }

    #[test]
    fn test_random_color_deterministic() {
        let mut a = SineRng::new(9);
        let mut b = SineRng::new(9);
        assert_eq!(random_color(&mut a), random_color(&mut b));
    }
}
