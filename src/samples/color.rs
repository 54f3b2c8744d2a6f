//! Display color modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color channel a display can be locked to.
///
/// Discriminants are stable and may be stored or sent as raw integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ColorMode {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [ColorMode::Red, ColorMode::Green, ColorMode::Blue];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Red => "red",
            ColorMode::Green => "green",
            ColorMode::Blue => "blue",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`ColorMode`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown color mode: {0}")]
pub struct ParseColorModeError(pub String);

impl FromStr for ColorMode {
    type Err = ParseColorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ColorMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseColorModeError(s.to_string()))
    }
}

impl TryFrom<u8> for ColorMode {
    type Error = ParseColorModeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ColorMode::ALL
            .into_iter()
            .find(|mode| *mode as u8 == value)
            .ok_or_else(|| ParseColorModeError(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminants() {
        assert_eq!(ColorMode::Red as u8, 0);
        assert_eq!(ColorMode::Green as u8, 1);
        assert_eq!(ColorMode::Blue as u8, 2);
        assert_eq!(ColorMode::try_from(2), Ok(ColorMode::Blue));
        assert!(ColorMode::try_from(3).is_err());
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("GREEN".parse::<ColorMode>(), Ok(ColorMode::Green));
        assert_eq!(" red ".parse::<ColorMode>(), Ok(ColorMode::Red));
        assert_eq!(
            "green_color".parse::<ColorMode>(),
            Err(ParseColorModeError("green_color".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for mode in ColorMode::ALL {
            assert_eq!(mode.to_string().parse::<ColorMode>(), Ok(mode));
        }
    }
}
