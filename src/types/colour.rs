//! Colour type and HSL token parsing.

use std::fmt;
use std::str::FromStr;

use palette::{Hsl, IntoColor, Srgb};

use crate::error::{Result, TintError};

/// An opaque sRGB colour value, used to preview token values.
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

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A palette token value in the `H S% L%` form consumed by `hsl(var(--x))`.
///
/// Hue is in degrees `[0, 360]`; saturation and lightness are percentages
/// in `[0, 100]`. Components are separated by ASCII whitespace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslTriplet {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl HslTriplet {
    pub fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Parse an `H S% L%` string.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split_ascii_whitespace().collect();
        if parts.len() != 3 {
            return Err(malformed(
                format!("expected 3 components, found {}", parts.len()),
            ));
        }

        let hue = parse_number(parts[0], "hue")?;
        if !(0.0..=360.0).contains(&hue) {
            return Err(malformed(format!("hue {} is outside 0..=360", parts[0])));
        }

        let saturation = parse_percent(parts[1], "saturation")?;
        let lightness = parse_percent(parts[2], "lightness")?;

        Ok(Self::new(hue, saturation, lightness))
    }

    /// Convert to an sRGB colour.
    pub fn to_colour(self) -> Colour {
        let hsl: Hsl = Hsl::new(self.hue, self.saturation / 100.0, self.lightness / 100.0);
        let rgb: Srgb<f32> = hsl.into_color();

        Colour::rgb(
            (rgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
            (rgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
        )
    }
}

impl FromStr for HslTriplet {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HslTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}

fn malformed(message: String) -> TintError {
    TintError::Parse {
        message,
        help: Some("Use the H S% L% form, e.g. \"240 5.9% 10%\"".to_string()),
    }
}

fn parse_number(s: &str, component: &str) -> Result<f32> {
    match s.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed(format!("{} '{}' is not a number", component, s))),
    }
}

fn parse_percent(s: &str, component: &str) -> Result<f32> {
    let number = s
        .strip_suffix('%')
        .ok_or_else(|| malformed(format!("{} '{}' must end with %", component, s)))?;
    let value = parse_number(number, component)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(malformed(format!("{} {} is outside 0%..=100%", component, s)));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triplet() {
        let t = HslTriplet::parse("240 5.9% 10%").unwrap();
        assert_eq!(t, HslTriplet::new(240.0, 5.9, 10.0));
    }

    #[test]
    fn test_parse_extra_whitespace() {
        let t = HslTriplet::parse("  0   0%\t98% ").unwrap();
        assert_eq!(t, HslTriplet::new(0.0, 0.0, 98.0));
    }

    #[test]
    fn test_parse_missing_percent() {
        assert!(HslTriplet::parse("0 0 100").is_err());
        assert!(HslTriplet::parse("0 0% 100").is_err());
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(HslTriplet::parse("400 0% 0%").is_err());
        assert!(HslTriplet::parse("0 101% 0%").is_err());
        assert!(HslTriplet::parse("-1 0% 0%").is_err());
    }

    #[test]
    fn test_parse_wrong_arity() {
        assert!(HslTriplet::parse("").is_err());
        assert!(HslTriplet::parse("0 0%").is_err());
        assert!(HslTriplet::parse("0 0% 0% 1").is_err());
    }

    #[test]
    fn test_parse_rejects_nan() {
        assert!(HslTriplet::parse("NaN 0% 0%").is_err());
        assert!(HslTriplet::parse("inf 0% 0%").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let t = HslTriplet::parse("0 0% 3.9%").unwrap();
        assert_eq!(t.to_string(), "0 0% 3.9%");
        assert_eq!(HslTriplet::parse(&t.to_string()).unwrap(), t);
    }

    #[test]
    fn test_to_colour() {
        assert_eq!(HslTriplet::new(0.0, 0.0, 100.0).to_colour(), Colour::WHITE);
        assert_eq!(HslTriplet::new(0.0, 0.0, 0.0).to_colour(), Colour::BLACK);
        assert_eq!(HslTriplet::new(0.0, 100.0, 50.0).to_colour(), Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_colour_display() {
        assert_eq!(Colour::rgb(255, 0, 0).to_string(), "#FF0000");
        assert_eq!(Colour::rgb(0x1a, 0x1a, 0x2e).to_string(), "#1A1A2E");
    }
}
