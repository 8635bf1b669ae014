use std::fmt;

/// RGBA color representation.
///
/// Represents a color using red, green, blue and alpha components, each in
/// the range 0-255. An alpha of 255 is fully opaque.
///
/// # Examples
///
/// ```rust
/// use ooxml_dml::common::RGBColor;
///
/// // Create a red color
/// let red = RGBColor::new(255, 0, 0);
/// assert_eq!(red.as_rgb_string(), "FF0000");
///
/// // Create from hex string
/// let blue = RGBColor::from_hex("0000FF").unwrap();
/// assert!(blue.is_opaque());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl RGBColor {
    /// Create a new opaque RGB color.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ooxml_dml::common::RGBColor;
    ///
    /// let color = RGBColor::new(255, 128, 0); // Orange
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color with an alpha channel.
    #[inline]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a hex string.
    ///
    /// Accepts six digits (`RRGGBB`) or eight digits (`RRGGBBAA`), with an
    /// optional leading `#`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ooxml_dml::common::RGBColor;
    ///
    /// let red = RGBColor::from_hex("FF0000").unwrap();
    /// let faded = RGBColor::from_hex("#0000FF80").unwrap();
    /// assert_eq!(faded.a, 0x80);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };

        Some(Self::with_alpha(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Whether the alpha channel is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Six uppercase hex digits, `RRGGBB`.
    pub fn as_rgb_string(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Eight uppercase hex digits, `RRGGBBAA`.
    pub fn as_rgba_string(&self) -> String {
        format!("{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl Default for RGBColor {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_rgba_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_strings() {
        let c = RGBColor::with_alpha(0x12, 0xAB, 0x00, 0x7F);
        assert_eq!(c.as_rgb_string(), "12AB00");
        assert_eq!(c.as_rgba_string(), "12AB007F");
        assert_eq!(RGBColor::from_hex("12ab007f"), Some(c));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert_eq!(RGBColor::from_hex("FFF"), None);
        assert_eq!(RGBColor::from_hex("GG0000"), None);
        assert_eq!(RGBColor::from_hex("é00000"), None);
    }
}
