//! RGB color value and the HSV helpers the harmony rules are built on.
//!
//! Hue is kept as a fraction of a full turn in `[0, 1)`, saturation and value
//! in `[0, 1]`. Distances are plain Euclidean distances in 0-255 RGB space,
//! which is coarse but monotonic enough for "is this close" checks.

use crate::error::MatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A color in HSV space, every component normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integers, rejecting any channel outside 0-255.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self, MatchError> {
        let channel = |value: i64| {
            u8::try_from(value).map_err(|_| {
                MatchError::InvalidColor(format!("channel {value} is outside 0-255 in ({r}, {g}, {b})"))
            })
        };
        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    /// Achromatic colors (grays, black, white) have no meaningful hue.
    pub fn is_achromatic(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Same saturation and value, hue turned by `degrees`.
    pub fn rotate_hue(self, degrees: f64) -> Color {
        let hsv = self.to_hsv();
        hsv_to_rgb(rotate_hue(hsv.hue, degrees), hsv.saturation, hsv.value)
    }

    pub fn complementary(self) -> Color {
        self.rotate_hue(180.0)
    }

    pub fn distance(self, other: Color) -> f64 {
        color_distance(self, other)
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = MatchError;

    /// Accepts `#rrggbb`, `rrggbb`, `r,g,b` and `(r, g, b)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || MatchError::InvalidColor(format!("cannot parse '{s}' as a color"));

        if s.contains(',') {
            let inner = s
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .unwrap_or(s);
            let parts = inner
                .split(',')
                .map(|part| part.trim().parse::<i64>().map_err(|_| malformed()))
                .collect::<Result<Vec<_>, _>>()?;
            return match parts.as_slice() {
                [r, g, b] => Self::from_channels(*r, *g, *b),
                _ => Err(malformed()),
            };
        }

        Self::parse_hex(s.trim_start_matches('#')).ok_or_else(malformed)
    }
}

impl TryFrom<Vec<i64>> for Color {
    type Error = MatchError;

    fn try_from(channels: Vec<i64>) -> Result<Self, Self::Error> {
        match channels.as_slice() {
            [r, g, b] => Self::from_channels(*r, *g, *b),
            other => Err(MatchError::InvalidColor(format!(
                "expected 3 channels, got {}",
                other.len()
            ))),
        }
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.channels()
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Standard RGB to HSV conversion on channels normalized to `[0, 1]`.
pub fn rgb_to_hsv(color: Color) -> Hsv {
    let r = f64::from(color.r) / 255.0;
    let g = f64::from(color.g) / 255.0;
    let b = f64::from(color.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let value = max;
    if max == min {
        return Hsv {
            hue: 0.0,
            saturation: 0.0,
            value,
        };
    }

    let delta = max - min;
    let saturation = delta / max;
    let rc = (max - r) / delta;
    let gc = (max - g) / delta;
    let bc = (max - b) / delta;

    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hsv {
        hue: (sector / 6.0).rem_euclid(1.0),
        saturation,
        value,
    }
}

/// Inverse of [`rgb_to_hsv`]; channels are rounded half to even and clamped to 0-255.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Color {
    let to_channel = |x: f64| (x * 255.0).round_ties_even().clamp(0.0, 255.0) as u8;

    if saturation == 0.0 {
        let v = to_channel(value);
        return Color::new(v, v, v);
    }

    let scaled = hue.rem_euclid(1.0) * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * f);
    let t = value * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match sector as u8 % 6 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    Color::new(to_channel(r), to_channel(g), to_channel(b))
}

/// `(hue + degrees / 360) mod 1`, always landing in `[0, 1)`.
pub fn rotate_hue(hue: f64, degrees: f64) -> f64 {
    (hue + degrees / 360.0).rem_euclid(1.0)
}

/// Euclidean distance in raw 0-255 RGB space.
pub fn color_distance(a: Color, b: Color) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Circular hue difference in degrees, in `[0, 180]`.
pub fn hue_difference_degrees(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).abs();
    diff.min(1.0 - diff) * 360.0
}
