use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
/// Serializes as an uppercase hex string without `#` prefix.
///
/// # Examples
///
/// ```rust
/// use longan::common::RGBColor;
///
/// // Create a red color
/// let red = RGBColor::new(255, 0, 0);
///
/// // Create from hex string
/// let blue = RGBColor::from_hex("0000FF").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    pub const BLACK: RGBColor = RGBColor::new(0, 0, 0);
    pub const WHITE: RGBColor = RGBColor::new(255, 255, 255);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts `RRGGBB` and `AARRGGBB`, with or without a leading `#`.
    /// The alpha channel of the eight digit form is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::common::RGBColor;
    ///
    /// let red = RGBColor::from_hex("FF0000").unwrap();
    /// let blue = RGBColor::from_hex("#0000FF").unwrap();
    /// let green = RGBColor::from_hex("ff00ff00").unwrap();
    /// assert_eq!(green, RGBColor::new(0, 255, 0));
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        let hex = match hex.len() {
            6 => hex,
            8 => hex.get(2..)?,
            _ => return None,
        };

        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::common::RGBColor;
    ///
    /// let color = RGBColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "FF0000");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl Serialize for RGBColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RGBColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RGBColor::from_hex(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color '{}'", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(RGBColor::from_hex("3498db"), Some(RGBColor::new(0x34, 0x98, 0xdb)));
        assert_eq!(RGBColor::from_hex("#3498DB"), Some(RGBColor::new(0x34, 0x98, 0xdb)));
        assert_eq!(RGBColor::from_hex("ff000000"), Some(RGBColor::BLACK));
        assert_eq!(RGBColor::from_hex("12345"), None);
        assert_eq!(RGBColor::from_hex("zzzzzz"), None);
    }

    #[test]
    fn test_serde_as_hex() {
        let json = serde_json::to_string(&RGBColor::new(1, 2, 255)).unwrap();
        assert_eq!(json, "\"0102FF\"");
        let back: RGBColor = serde_json::from_str("\"#ffffff\"").unwrap();
        assert_eq!(back, RGBColor::WHITE);
        assert!(serde_json::from_str::<RGBColor>("\"nope\"").is_err());
    }
}
