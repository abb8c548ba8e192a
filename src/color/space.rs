//! Color value types and conversions
//!
//! Provides the normalized RGB `Color` value type used throughout the capture
//! and matching pipeline, with:
//! - RGB <-> HSV conversion (via palette)
//! - Channel clamping to the [0,1] range
//! - Euclidean distance and Rec.709 luminance helpers
//! - Hex color representation for display

use palette::{FromColor, Hsv as PaletteHsv, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// A color as normalized channel intensities in [0,1] plus alpha
///
/// Immutable value type: operations that derive a new color return a new
/// instance with channels clamped back into range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// A color in HSV space with hue as a [0,1) fraction of the circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Color {
    /// Opaque white, the neutral fallback for degenerate frame data
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Opaque black
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Create an opaque color, clamping channels to [0,1]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: 1.0,
        }
    }

    /// Create a color with explicit alpha, clamping all channels
    pub fn with_alpha(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..Self::new(r, g, b)
        }
    }

    /// Create a color from 8-bit channel samples
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Return a copy with all channels clamped to [0,1]
    ///
    /// Used after any arithmetic that can push channels out of range.
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Scale each channel by a per-channel factor, clamping the result
    pub fn scaled(self, factors: [f32; 3]) -> Self {
        Self {
            r: self.r * factors[0],
            g: self.g * factors[1],
            b: self.b * factors[2],
            a: self.a,
        }
        .clamped()
    }

    /// Convert to HSV with hue normalized to a [0,1) fraction
    pub fn to_hsv(self) -> HsvColor {
        let hsv = PaletteHsv::from_color(Srgb::new(self.r, self.g, self.b));
        HsvColor {
            h: hsv.hue.into_positive_degrees() / 360.0,
            s: hsv.saturation,
            v: hsv.value,
        }
    }

    /// Convert from HSV, producing an opaque color
    pub fn from_hsv(hsv: HsvColor) -> Self {
        let srgb = Srgb::from_color(PaletteHsv::new(
            hsv.h * 360.0,
            hsv.s.clamp(0.0, 1.0),
            hsv.v.clamp(0.0, 1.0),
        ));
        Self::new(srgb.red, srgb.green, srgb.blue)
    }

    /// Euclidean distance in RGB space, in [0, sqrt(3)]
    pub fn distance(self, other: Color) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Rec.709 relative luminance
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Hexadecimal color string (e.g. "#FF0000")
    pub fn to_hex(self) -> String {
        let r = (self.r * 255.0).round() as u8;
        let g = (self.g * 255.0).round() as u8;
        let b = (self.b * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Parse a hexadecimal color string (with or without leading '#')
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the string is not a 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return Err(MatchError::InvalidParameter {
                parameter: "hex color".to_string(),
                value: hex.to_string(),
            });
        }

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| MatchError::InvalidParameter {
                parameter: "hex color".to_string(),
                value: hex.to_string(),
            })
        };

        Ok(Self::from_bytes(parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }
}

impl HsvColor {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}
