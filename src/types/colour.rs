//! Colour type, hex codec and contrast helpers.

use std::fmt;
use std::str::FromStr;

use crate::error::{CastError, Result};

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White. Also the colour of an unpigmented cast.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Neutral grey, substituted for undecodable hex strings and used
    /// as the starting colour of a custom pigment.
    pub const NEUTRAL_GREY: Self = Self::rgb(128, 128, 128);

    /// Parse a `#RRGGBB` (or bare `RRGGBB`) hex colour string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CastError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RRGGBB format, e.g. #0066CC".to_string()),
            });
        }

        let r = parse_hex_byte(&hex[0..2])?;
        let g = parse_hex_byte(&hex[2..4])?;
        let b = parse_hex_byte(&hex[4..6])?;
        Ok(Self::rgb(r, g, b))
    }

    /// Decode a hex colour, falling back to [`Colour::NEUTRAL_GREY`] when
    /// the string is not a valid `#RRGGBB` value.
    pub fn decode(s: &str) -> Self {
        Self::from_hex(s).unwrap_or(Self::NEUTRAL_GREY)
    }

    /// Build a colour from floating point channels, rounding each to the
    /// nearest integer and clamping to `0..=255`.
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(to_channel(r), to_channel(g), to_channel(b))
    }

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Normalized perceived luminance in `0.0..=1.0`.
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Black or white, whichever reads better on top of this colour.
    pub fn contrast(self) -> Self {
        if self.luminance() > 0.5 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }
}

impl FromStr for Colour {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Contrasting text colour (black or white) for a hex background.
pub fn contrast_colour(hex: &str) -> Colour {
    Colour::decode(hex).contrast()
}

fn to_channel(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| CastError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
