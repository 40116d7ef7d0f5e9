//! 8-bit RGB color type used for the duotone gradient endpoints.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// An opaque 8-bit RGB color.
///
/// Two of these define a duotone gradient: the `shadow` color is what the
/// darkest corrected luminance maps to, the `highlight` color is what the
/// lightest maps to. There is no alpha channel; pixel alpha always comes
/// from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use duotone::Color;
    /// let pink = Color::new(255, 62, 165);
    /// assert_eq!(pink.to_bytes(), [255, 62, 165]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as floats in 0.0..=255.0 space, for interpolation.
    #[inline]
    pub(crate) fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// Format as a lowercase `#rrggbb` string.
    ///
    /// # Example
    /// ```
    /// use duotone::Color;
    /// assert_eq!(Color::new(50, 255, 132).to_hex(), "#32ff84");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - 6-digit hex with or without hash
    /// - `#RGB` / `RGB` - shorthand, each digit is doubled (`abc` -> `aabbcc`)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use duotone::Color;
    ///
    /// let pink: Color = "#ff3ea5".parse().unwrap();
    /// assert_eq!(pink, Color::new(255, 62, 165));
    ///
    /// let short: Color = "#abc".parse().unwrap();
    /// assert_eq!(short, Color::new(170, 187, 204));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // Checked up front: from_str_radix would accept a leading '+'
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(s.to_string()));
        }

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            len => return Err(ParseColorError::InvalidLength(len)),
        };

        let value = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ParseColorError::InvalidHex(s.to_string()))?;

        Ok(Self::new(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_6digit() {
        let pink: Color = "#ff3ea5".parse().unwrap();
        assert_eq!(pink, Color::new(255, 62, 165));

        let green: Color = "32ff84".parse().unwrap();
        assert_eq!(green, Color::new(50, 255, 132));

        let black: Color = "#000000".parse().unwrap();
        assert_eq!(black, Color::new(0, 0, 0));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let color: Color = "#abc".parse().unwrap();
        assert_eq!(color, Color::new(170, 187, 204));

        let white: Color = "FFF".parse().unwrap();
        assert_eq!(white, Color::new(255, 255, 255));

        let red: Color = "#f00".parse().unwrap();
        assert_eq!(red, Color::new(255, 0, 0));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert_eq!(
            "#ffff".parse::<Color>(),
            Err(ParseColorError::InvalidLength(4))
        );
        assert_eq!("".parse::<Color>(), Err(ParseColorError::InvalidLength(0)));
        assert_eq!("#".parse::<Color>(), Err(ParseColorError::InvalidLength(0)));
        assert!(matches!(
            "#ggg".parse::<Color>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        // from_str_radix alone would read "+f" as 15
        assert!(matches!(
            "+fffff".parse::<Color>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        // Multi-byte characters must not panic on slicing
        assert!(matches!(
            "#éa".parse::<Color>(),
            Err(ParseColorError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let upper: Color = "  #ABCDEF  ".parse().unwrap();
        let lower: Color = "#abcdef".parse().unwrap();
        let mixed: Color = "#AbCdEf".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_to_hex_and_display() {
        let color = Color::new(255, 62, 165);
        assert_eq!(color.to_hex(), "#ff3ea5");
        assert_eq!(color.to_string(), "#ff3ea5");
        assert_eq!(color.to_hex().parse::<Color>().unwrap(), color);
    }
}
