use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::SkyError;

/// An sRGB triple rendered as lower-case `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const WHITE: Self = Self::from_u32(0xFF_FFFF);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a `0xRRGGBB` literal. Bits above 24 are ignored.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Rounds and clamps fractional channels into `0..=255`.
    #[must_use]
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
        }
    }

    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Linear interpolation toward `other`. `0.0` keeps `self`, `1.0` yields `other`.
    #[must_use]
    pub fn blend(self, other: Self, ratio: f64) -> Self {
        let ratio = ratio.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| f64::from(a) * (1.0 - ratio) + f64::from(b) * ratio;
        Self::from_channels(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Moves each channel toward white by `factor` of its remaining headroom.
    #[must_use]
    pub fn brighten(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let lift = |c: u8| f64::from(c) + (255.0 - f64::from(c)) * factor;
        Self::from_channels(lift(self.r), lift(self.g), lift(self.b))
    }

    /// Adds `delta * 255` to every channel. Negative deltas darken.
    #[must_use]
    pub fn shift_brightness(self, delta: f64) -> Self {
        let offset = delta.clamp(-1.0, 1.0) * 255.0;
        Self::from_channels(
            f64::from(self.r) + offset,
            f64::from(self.g) + offset,
            f64::from(self.b) + offset,
        )
    }
}

fn to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0).round() as u8
}

/// Parses `#rrggbb` or `rrggbb`, either case.
pub fn parse_hex(input: &str) -> Result<HexColor, SkyError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SkyError::hex(input));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| SkyError::hex(input))
    };
    Ok(HexColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl FromStr for HexColor {
    type Err = SkyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_hex(&raw).map_err(de::Error::custom)
    }
}
