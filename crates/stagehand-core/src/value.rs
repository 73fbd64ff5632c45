// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Plain geometry and color values exchanged with the host.

use std::fmt;

/// Item placement as fractions of the output canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge, 0.0..=1.0.
    pub left: f64,
    /// Top edge, 0.0..=1.0.
    pub top: f64,
    /// Right edge, 0.0..=1.0.
    pub right: f64,
    /// Bottom edge, 0.0..=1.0.
    pub bottom: f64,
}

impl Rect {
    /// Parse the host's `left,top,right,bottom` form.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut it = raw.split(',').map(|p| p.trim().parse::<f64>());
        let rect = Self {
            left: it.next()?.ok()?,
            top: it.next()?.ok()?,
            right: it.next()?.ok()?,
            bottom: it.next()?.ok()?,
        };
        it.next().is_none().then_some(rect)
    }

    /// Width as a fraction of the canvas.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Height as a fraction of the canvas.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque color from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Decode the host's packed `0xAABBGGRR` integer.
    pub fn from_bgr_int(raw: u32) -> Self {
        let [r, g, b, a] = raw.to_le_bytes();
        Self { r, g, b, a }
    }

    /// Encode as the host's packed `0xAABBGGRR` integer.
    pub fn to_bgr_int(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    /// Decode `RRGGBB` (with or without `#`), as used by chroma key colors.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }
        let v = u32::from_str_radix(hex, 16).ok()?;
        let [b, g, r, _] = v.to_le_bytes();
        Some(Self::rgb(r, g, b))
    }

    /// Encode as `RRGGBB`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rect_parses_host_form() {
        let r = Rect::parse("0.25, 0, 0.75,1").unwrap();
        assert!((r.width() - 0.5).abs() < f64::EPSILON);
        assert!(Rect::parse("0,0,1").is_none());
        assert!(Rect::parse("0,0,1,1,1").is_none());
        assert!(Rect::parse("a,b,c,d").is_none());
    }

    #[test]
    fn bgr_int_packs_red_low() {
        let c = Rgba::from_bgr_int(0xFF00_00FF);
        assert_eq!(c, Rgba::rgb(255, 0, 0));
        assert_eq!(c.to_bgr_int(), 0xFF00_00FF);
    }

    #[test]
    fn hex_colors() {
        assert_eq!(Rgba::from_hex("#00FF00"), Some(Rgba::rgb(0, 255, 0)));
        assert_eq!(Rgba::rgb(1, 2, 3).to_hex(), "010203");
        assert_eq!(Rgba::from_hex("12345"), None);
    }
}
