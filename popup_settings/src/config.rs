//! Immutable configuration snapshot
//!
//! A `Config` is read once per event and passed into every core call; the
//! host builds a fresh one whenever its settings change.

use alloc::string::{String, ToString};
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::keys;

/// What the popup shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Four bases, bit word and ruler
    #[default]
    Basic,
    /// Basic plus float reinterpretation and byte size
    Extended,
    /// Raw hex text compared across bases
    Tabled,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Basic => "basic",
            DisplayMode::Extended => "extended",
            DisplayMode::Tabled => "tabled",
        }
    }

    pub fn from_name(name: &str) -> Option<DisplayMode> {
        match name {
            "basic" => Some(DisplayMode::Basic),
            "extended" => Some(DisplayMode::Extended),
            "tabled" => Some(DisplayMode::Tabled),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Popup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum display width of a literal, in bytes
    pub bytes_in_word: u32,
    /// Number bit positions from the most significant end
    pub bit_positions_reversed: bool,
    pub display_mode: DisplayMode,
    pub hide_on_mouse_move_away: bool,
    pub show_swap_endianness: bool,
    pub show_float_reinterpretation: bool,
    pub show_byte_size: bool,
    /// Decimal places in the byte-size line
    pub size_precision: u32,
    /// Group digits in the base rows
    pub group_digits: bool,
    /// Separator between hex, octal and binary digit groups
    pub group_separator: char,
}

impl Config {
    pub const MAX_BYTES_IN_WORD: u32 = 64;
    pub const MAX_SIZE_PRECISION: u32 = 16;

    /// Word size in bits
    pub fn word_bits(&self) -> u64 {
        u64::from(self.bytes_in_word) * 8
    }

    /// Checks value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bytes_in_word == 0 || self.bytes_in_word > Self::MAX_BYTES_IN_WORD {
            return Err(ConfigError::OutOfRange {
                key: keys::BYTES_IN_WORD.to_string(),
                value: i64::from(self.bytes_in_word),
            });
        }
        if self.size_precision > Self::MAX_SIZE_PRECISION {
            return Err(ConfigError::OutOfRange {
                key: keys::SIZE_PRECISION.to_string(),
                value: i64::from(self.size_precision),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bytes_in_word: 4,
            bit_positions_reversed: false,
            display_mode: DisplayMode::Basic,
            hide_on_mouse_move_away: true,
            show_swap_endianness: true,
            show_float_reinterpretation: true,
            show_byte_size: true,
            size_precision: 2,
            group_digits: true,
            group_separator: ' ',
        }
    }
}

/// Errors building a configuration snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Setting holds a value of the wrong type
    WrongType { key: String, expected: &'static str },
    /// Numeric setting outside its allowed range
    OutOfRange { key: String, value: i64 },
    /// Setting value not recognised
    InvalidValue { key: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::WrongType { key, expected } => {
                write!(f, "Setting {} must be {}", key, expected)
            }
            ConfigError::OutOfRange { key, value } => {
                write!(f, "Setting {} out of range: {}", key, value)
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.word_bits(), 32);
        assert_eq!(config.display_mode, DisplayMode::Basic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_word_size() {
        let config = Config {
            bytes_in_word: 0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                key: "bytes_in_word".to_string(),
                value: 0
            })
        );
    }

    #[test]
    fn test_validate_precision() {
        let config = Config {
            size_precision: 40,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_display_mode_names() {
        for mode in [DisplayMode::Basic, DisplayMode::Extended, DisplayMode::Tabled] {
            assert_eq!(DisplayMode::from_name(mode.as_str()), Some(mode));
        }
        assert_eq!(DisplayMode::from_name("fancy"), None);
    }

    #[test]
    fn test_config_json_defaults_missing_fields() {
        let config: Config = serde_json::from_str(r#"{"display_mode":"extended"}"#).unwrap();
        assert_eq!(config.display_mode, DisplayMode::Extended);
        assert_eq!(config.bytes_in_word, 4);
    }
}
