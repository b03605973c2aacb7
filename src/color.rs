//! User display colors.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An RGB color assigned to a user by the chat server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red component.
    pub r: u8,
    /// The green component.
    pub g: u8,
    /// The blue component.
    pub b: u8,
}

/// The error returned when a string does not hold a `#rrggbb` color.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a `#rrggbb` hex color, got `{0}`")]
pub struct ParseColorError(String);

impl Color {
    /// Creates a color from its red, green and blue components.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| ParseColorError(s.to_string()))?;
        let value =
            u32::from_str_radix(hex, 16).map_err(|_| ParseColorError(s.to_string()))?;

        Ok(Color::from_rgb(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
