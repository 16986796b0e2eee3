//! 24-bit RGB colors and the textual formats they can be read from

use std::fmt;

use serde::{Deserialize, Serialize};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Decode a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_packed(packed: u32) -> Self {
        Rgb {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Pack into `0xRRGGBB`
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse `#rgb` or `#rrggbb` (case-insensitive)
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                // Each digit is doubled: #f80 == #ff8800
                let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
                Some(Rgb::new(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Rgb::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse `rgb(r, g, b)` with decimal channels in 0-255
    pub fn parse_function(s: &str) -> Option<Self> {
        let inner = s.trim().strip_prefix("rgb(")?.strip_suffix(')')?;

        let mut channels = inner.split(',').map(|part| {
            let part = part.trim();
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse::<u8>().ok()
        });
        let r = channels.next()??;
        let g = channels.next()??;
        let b = channels.next()??;
        if channels.next().is_some() {
            return None;
        }

        Some(Rgb::new(r, g, b))
    }

    /// The `rr/gg/bb` payload used by OSC color sequences
    pub fn to_osc_payload(self) -> String {
        format!("{:02x}/{:02x}/{:02x}", self.r, self.g, self.b)
    }

    /// Squared euclidean distance, used for palette approximation
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let d = |a: u8, b: u8| {
            let diff = i32::from(a) - i32::from(b);
            (diff * diff) as u32
        };
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed() {
        assert_eq!(Rgb::from_packed(0xff8000), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::new(1, 2, 3).to_packed(), 0x010203);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse_hex("#ff0000"), Some(Rgb::new(255, 0, 0)));
        assert_eq!(Rgb::parse_hex("#00FF00"), Some(Rgb::new(0, 255, 0)));
        assert_eq!(Rgb::parse_hex("#f80"), Some(Rgb::new(255, 136, 0)));
        assert_eq!(Rgb::parse_hex("ff0000"), None);
        assert_eq!(Rgb::parse_hex("#ff00"), None);
        assert_eq!(Rgb::parse_hex("#invalid"), None);
        assert_eq!(Rgb::parse_hex("#+1+2+3"), None);
    }

    #[test]
    fn test_parse_function() {
        assert_eq!(Rgb::parse_function("rgb(1,2,3)"), Some(Rgb::new(1, 2, 3)));
        assert_eq!(
            Rgb::parse_function(" rgb( 255 , 0, 16 ) "),
            Some(Rgb::new(255, 0, 16))
        );
        assert_eq!(Rgb::parse_function("rgb(256,0,0)"), None);
        assert_eq!(Rgb::parse_function("rgb(1,2)"), None);
        assert_eq!(Rgb::parse_function("rgb(1,2,3,4)"), None);
        assert_eq!(Rgb::parse_function("rgba(1,2,3)"), None);
        assert_eq!(Rgb::parse_function("rgb(+1,2,3)"), None);
        assert_eq!(Rgb::parse_function("rgb(1,-2,3)"), None);
        assert_eq!(Rgb::parse_function("rgb(,2,3)"), None);
        assert_eq!(Rgb::parse_function("rgb(1,2,)"), None);
    }

    #[test]
    fn test_osc_payload_is_zero_padded() {
        assert_eq!(Rgb::new(5, 0, 255).to_osc_payload(), "05/00/ff");
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(10, 171, 205).to_string(), "#0aabcd");
    }

    #[test]
    fn test_distance() {
        assert_eq!(Rgb::new(0, 0, 0).distance_squared(Rgb::new(0, 0, 0)), 0);
        assert_eq!(
            Rgb::new(0, 0, 0).distance_squared(Rgb::new(255, 255, 255)),
            3 * 255 * 255
        );
    }

    #[test]
    fn test_tuple_conversions() {
        let rgb = Rgb::from((10u8, 20u8, 30u8));
        assert_eq!(<(u8, u8, u8)>::from(rgb), (10, 20, 30));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3}"#);
        assert_eq!(serde_json::from_str::<Rgb>(&json).unwrap(), Rgb::new(1, 2, 3));
    }
}
