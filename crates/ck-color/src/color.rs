// SPDX-License-Identifier: MIT
//
// The `Color` value type and its strict hex parser.
//
// Only the six-digit form `#RRGGBB` is accepted. Shorthand (`#RGB`),
// alpha (`#RRGGBBAA`), a missing `#` and surrounding whitespace are all
// rejected: a palette entry that is not exactly a full-opacity hex color
// is an input error for the caller to surface, never something to guess at.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::space::{self, Lab};

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A string that does not satisfy `^#[0-9A-Fa-f]{6}$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The input is not a `#RRGGBB` hex color. Carries the offending input.
    #[error("invalid color format: {input:?} (expected #RRGGBB)")]
    InvalidColorFormat { input: String },
}

impl ParseColorError {
    /// The string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidColorFormat { input } => input,
        }
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8-bit channels.
///
/// Two colors are equal exactly when their channel bytes are equal, so
/// `#FF8000` and `#ff8000` parse to the same value.
///
/// # Examples
///
/// ```
/// use ck_color::Color;
///
/// let orange: Color = "#FF8000".parse().unwrap();
/// assert_eq!(orange, Color::rgb(255, 128, 0));
/// assert_eq!(orange.to_hex(), "#ff8000");
///
/// assert!(Color::parse("#f80").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value. The top byte is ignored.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse a `#RRGGBB` string (hex digits in either case).
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError::InvalidColorFormat`] naming `s` when it is
    /// not exactly `#` followed by six hex digits.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s).ok_or_else(|| ParseColorError::InvalidColorFormat {
            input: s.to_owned(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// The channels as an `(r, g, b)` tuple.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// The packed `0xRRGGBB` form.
    #[inline]
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Canonical lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as sRGB floats in [0.0, 1.0].
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Channels in linear light, [0.0, 1.0].
    #[must_use]
    pub fn to_linear(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_srgb();
        (
            space::srgb_to_linear(r),
            space::srgb_to_linear(g),
            space::srgb_to_linear(b),
        )
    }

    /// CIE XYZ tristimulus values under D65, Y normalized to [0.0, 1.0].
    #[must_use]
    pub fn to_xyz(self) -> (f64, f64, f64) {
        let (r, g, b) = self.to_linear();
        space::linear_srgb_to_xyz(r, g, b)
    }

    /// CIE L\*a\*b\* relative to the D65 white point.
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let (x, y, z) = self.to_xyz();
        space::xyz_to_lab(x, y, z)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ParseColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let bytes = s.as_bytes();
    if bytes.len() != 7 || bytes[0] != b'#' {
        return None;
    }
    let r = parse_hex_byte(&bytes[1..3])?;
    let g = parse_hex_byte(&bytes[3..5])?;
    let b = parse_hex_byte(&bytes[5..7])?;
    Some(Color::rgb(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::parse("#ff8000").unwrap();
        assert_eq!(color.to_rgb8(), (255, 128, 0));
    }

    #[test]
    fn hex_parsing_is_case_insensitive() {
        let upper = Color::parse("#C8A2FF").unwrap();
        let lower = Color::parse("#c8a2ff").unwrap();
        let mixed = Color::parse("#c8A2fF").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn hex_parsing_rejects_shorthand_and_alpha() {
        assert!(Color::parse("#f80").is_err());
        assert!(Color::parse("#ff000080").is_err());
    }

    #[test]
    fn hex_parsing_requires_hash() {
        assert!(Color::parse("00ff00").is_err());
        assert!(Color::parse("x00ff00").is_err());
    }

    #[test]
    fn hex_parsing_invalid() {
        let bad_inputs = [
            "", "#", "#12345", "#1234567", "#gg0000", "not-a-color", " #ffffff", "#ffffff ",
        ];
        for bad in bad_inputs {
            assert!(Color::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn hex_parsing_rejects_multibyte_input() {
        // Seven bytes, but not seven ASCII characters.
        assert!(Color::parse("#ffé00").is_err());
    }

    #[test]
    fn error_names_offending_input() {
        let err = Color::parse("blue").unwrap_err();
        assert_eq!(err.input(), "blue");
        assert_eq!(
            err,
            ParseColorError::InvalidColorFormat {
                input: "blue".to_owned()
            }
        );
        assert!(err.to_string().contains("\"blue\""));
    }

    #[test]
    fn hex_roundtrip_is_lowercase() {
        let color: Color = "#C86432".parse().unwrap();
        assert_eq!(color.to_hex(), "#c86432");
        assert_eq!(color.to_string(), "#c86432");
    }

    // ── Constructors ─────────────────────────────────────────────────────

    #[test]
    fn from_u32_unpacks_channels() {
        let color = Color::from_u32(0x12_34_56);
        assert_eq!(color.to_rgb8(), (0x12, 0x34, 0x56));
        assert_eq!(color.to_u32(), 0x12_34_56);
    }

    #[test]
    fn constants() {
        assert_eq!(Color::BLACK.to_hex(), "#000000");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Color::rgb(1, 2, 3)), "Color(#010203)");
    }

    // ── Serde ────────────────────────────────────────────────────────────

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(255, 0, 170)).unwrap();
        assert_eq!(json, "\"#ff00aa\"");
    }

    #[test]
    fn deserializes_through_strict_parser() {
        let color: Color = serde_json::from_str("\"#FF00AA\"").unwrap();
        assert_eq!(color, Color::rgb(255, 0, 170));
        assert!(serde_json::from_str::<Color>("\"#f0a\"").is_err());
    }
}
