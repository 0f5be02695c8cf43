use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// An opaque 8-bit-per-channel color, as written in `#rrggbb` form.
///
/// Values are passed to shaders unconverted (`channel / 255`), the same way a
/// browser canvas treats CSS hex colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` literal.
    #[inline]
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parses `#rrggbb` (case-insensitive). The leading `#` is required.
    pub fn from_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ColorParseError::new(s))?;

        let packed = u32::from_str_radix(digits, 16).map_err(|_| ColorParseError::new(s))?;
        Ok(Self::from_u32(packed))
    }

    /// Lower-case `#rrggbb`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Channels normalized to `[0, 1]`.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parses_lower_and_upper_case() {
        assert_eq!(Rgb::from_hex("#ff00ff").unwrap(), Rgb::new(255, 0, 255));
        assert_eq!(Rgb::from_hex("#C084FC").unwrap(), Rgb::new(0xc0, 0x84, 0xfc));
    }

    #[test]
    fn rejects_malformed() {
        assert!(Rgb::from_hex("ff00ff").is_err());
        assert!(Rgb::from_hex("#ff00f").is_err());
        assert!(Rgb::from_hex("#ff00ff00").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("#+f0000").is_err());
    }

    #[test]
    fn error_mentions_input() {
        let err = "#12".parse::<Rgb>().unwrap_err();
        assert!(err.to_string().contains("#12"));
    }

    // ── formatting ───────────────────────────────────────────────────────

    #[test]
    fn hex_is_lower_case_and_padded() {
        assert_eq!(Rgb::new(1, 2, 255).to_hex(), "#0102ff");
        assert_eq!(Rgb::from_u32(0xe0e7ff).to_hex(), "#e0e7ff");
    }

    #[test]
    fn normalized_channels() {
        assert_eq!(Rgb::WHITE.to_f32(), [1.0, 1.0, 1.0]);
        assert_eq!(Rgb::BLACK.to_f32(), [0.0, 0.0, 0.0]);
    }
}
