//! Linear RGB colour.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Errors from parsing a `#RRGGBB` colour string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),

    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

/// A linear RGB colour sample.
///
/// Channels are unbounded until tone mapping; only
/// [`to_display_int`](Self::to_display_int) clamps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorRgb(DVec3);

impl ColorRgb {
    pub const BLACK: ColorRgb = ColorRgb(DVec3::ZERO);
    pub const WHITE: ColorRgb = ColorRgb(DVec3::ONE);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self(DVec3::new(r, g, b))
    }

    /// Same value on every channel.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self(DVec3::splat(v))
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.0.z
    }

    /// Elementwise power.
    #[inline]
    pub fn power(self, e: f64) -> Self {
        Self(self.0.powf(e))
    }

    /// Elementwise inverse. A zero channel becomes `+inf`.
    #[inline]
    pub fn inv(self) -> Self {
        Self(self.0.recip())
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Clamp each channel to [0, 1] and truncate to 8 bits.
    pub fn to_rgb8(self) -> [u8; 3] {
        let byte = |v: f64| (255.0 * v.clamp(0.0, 1.0)) as u8;
        [byte(self.0.x), byte(self.0.y), byte(self.0.z)]
    }

    /// Pack as `0xRRGGBB`.
    pub fn to_display_int(self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// Unpack a `0xRRGGBB` value, mapping each byte to `byte / 255`.
    pub fn from_display_int(packed: u32) -> Self {
        let channel = |shift: u32| ((packed >> shift) & 0xff) as f64 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }
}

impl From<DVec3> for ColorRgb {
    fn from(v: DVec3) -> Self {
        Self(v)
    }
}

impl From<ColorRgb> for DVec3 {
    fn from(c: ColorRgb) -> Self {
        c.0
    }
}

impl Add for ColorRgb {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Add<f64> for ColorRgb {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self(self.0 + rhs)
    }
}

impl AddAssign for ColorRgb {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for ColorRgb {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for ColorRgb {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f64> for ColorRgb {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl FromStr for ColorRgb {
    type Err = ColorParseError;

    /// Parse `#RRGGBB` (the `#` is optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 {
            return Err(ColorParseError::Length(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digits(s.to_string()));
        }
        let packed =
            u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::Digits(s.to_string()))?;
        Ok(Self::from_display_int(packed))
    }
}

impl fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4}, {:.4})", self.0.x, self.0.y, self.0.z)
    }
}

/// Accepted forms in scene files: `"#ff8800"`, `[1.0, 0.5, 0.0]` or `0.2`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels([f64; 3]),
    Uniform(f64),
}

impl<'de> Deserialize<'de> for ColorRgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ColorRepr::deserialize(deserializer)? {
            ColorRepr::Hex(s) => s.parse().map_err(serde::de::Error::custom),
            ColorRepr::Channels([r, g, b]) => Ok(Self::new(r, g, b)),
            ColorRepr::Uniform(v) => Ok(Self::splat(v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_int_packing() {
        assert_eq!(ColorRgb::WHITE.to_display_int(), 0xffffff);
        assert_eq!(ColorRgb::BLACK.to_display_int(), 0x000000);
        // 0.5 * 255 = 127.5 truncates to 127
        assert_eq!(ColorRgb::new(1.0, 0.5, 0.0).to_display_int(), 0xff7f00);
    }

    #[test]
    fn test_display_int_clamps() {
        let c = ColorRgb::new(-3.0, 42.0, f64::INFINITY);
        assert_eq!(c.to_display_int(), 0x00ffff);
    }

    #[test]
    fn test_algebra() {
        let a = ColorRgb::new(0.2, 0.4, 0.6);
        let b = ColorRgb::splat(0.5);

        assert_eq!(a * b, ColorRgb::new(0.1, 0.2, 0.3));
        assert_eq!(a * 2.0, ColorRgb::new(0.4, 0.8, 1.2));
        assert_eq!(b + 0.5, ColorRgb::WHITE);
        assert_eq!(ColorRgb::new(2.0, 4.0, 0.5).power(2.0), ColorRgb::new(4.0, 16.0, 0.25));
        assert_eq!(ColorRgb::new(2.0, 4.0, 0.5).inv(), ColorRgb::new(0.5, 0.25, 2.0));

        let mut acc = ColorRgb::BLACK;
        acc += a;
        acc += a;
        assert_eq!(acc, a + a);
    }

    #[test]
    fn test_parse_hex() {
        let c: ColorRgb = "#ff0080".parse().unwrap();
        assert_eq!(c.to_display_int(), 0xff0080);
        assert_eq!(c.r(), 1.0);
        assert_eq!(c.g(), 0.0);

        let no_hash: ColorRgb = "00ff00".parse().unwrap();
        assert_eq!(no_hash, ColorRgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(matches!("#fff".parse::<ColorRgb>(), Err(ColorParseError::Length(_))));
        assert!(matches!("#gg0000".parse::<ColorRgb>(), Err(ColorParseError::Digits(_))));
        assert!(matches!("#+12345".parse::<ColorRgb>(), Err(ColorParseError::Digits(_))));
        assert!(matches!("-12345".parse::<ColorRgb>(), Err(ColorParseError::Digits(_))));
    }

    #[test]
    fn test_deserialize_forms() {
        let hex: ColorRgb = serde_json::from_str("\"#ffffff\"").unwrap();
        let channels: ColorRgb = serde_json::from_str("[0.1, 0.2, 0.3]").unwrap();
        let uniform: ColorRgb = serde_json::from_str("0.25").unwrap();

        assert_eq!(hex, ColorRgb::WHITE);
        assert_eq!(channels, ColorRgb::new(0.1, 0.2, 0.3));
        assert_eq!(uniform, ColorRgb::splat(0.25));
        assert!(serde_json::from_str::<ColorRgb>("\"#12\"").is_err());
    }
}
