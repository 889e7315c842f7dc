#![no_std]

//! # Popup Settings
//!
//! Typed settings for the number popup, reduced to an immutable [`Config`]
//! snapshot before any core call.
//!
//! ## Philosophy
//!
//! - **Typed settings**: All settings have explicit types, not stringly-typed
//! - **Layered**: Read-only defaults + host overrides
//! - **Snapshot, not globals**: The core only ever sees a `Config` value
//! - **Deterministic**: Settings are serializable and reproducible
//!
//! ## Example
//!
//! ```ignore
//! use popup_settings::{create_default_registry, keys, SettingValue};
//!
//! let mut registry = create_default_registry();
//! registry.set_override(keys::BYTES_IN_WORD, SettingValue::Integer(8));
//!
//! let config = registry.snapshot()?;
//! assert_eq!(config.word_bits(), 64);
//! ```

pub mod config;
pub mod persistence;

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

pub use config::{Config, ConfigError, DisplayMode};

/// Setting key
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SettingKey(String);

impl SettingKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SettingKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Setting value (strongly typed)
///
/// Untagged on the wire, so a settings file reads like
/// `{"bytes_in_word": 8, "display_mode": "extended"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Boolean(bool),
    Integer(i64),
    String(String),
}

impl SettingValue {
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            SettingValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            SettingValue::String(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Boolean(v) => write!(f, "{}", v),
            SettingValue::Integer(v) => write!(f, "{}", v),
            SettingValue::String(v) => write!(f, "{}", v),
        }
    }
}

/// Settings registry
pub struct SettingsRegistry {
    /// Default settings (read-only)
    defaults: BTreeMap<SettingKey, SettingValue>,
    /// Host overrides
    overrides: BTreeMap<SettingKey, SettingValue>,
}

impl SettingsRegistry {
    pub fn new() -> Self {
        Self {
            defaults: BTreeMap::new(),
            overrides: BTreeMap::new(),
        }
    }

    pub fn register_default(&mut self, key: impl Into<SettingKey>, value: SettingValue) {
        self.defaults.insert(key.into(), value);
    }

    pub fn set_override(&mut self, key: impl Into<SettingKey>, value: SettingValue) {
        self.overrides.insert(key.into(), value);
    }

    /// Removes an override, returning whether one existed
    pub fn remove_override(&mut self, key: &SettingKey) -> bool {
        self.overrides.remove(key).is_some()
    }

    /// Effective value: override, else default
    pub fn get(&self, key: &SettingKey) -> Option<&SettingValue> {
        self.overrides.get(key).or_else(|| self.defaults.get(key))
    }

    pub fn get_override(&self, key: &SettingKey) -> Option<&SettingValue> {
        self.overrides.get(key)
    }

    pub fn list_defaults(&self) -> Vec<SettingKey> {
        self.defaults.keys().cloned().collect()
    }

    pub fn list_overrides(&self) -> Vec<SettingKey> {
        self.overrides.keys().cloned().collect()
    }

    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// Exports overrides for persistence
    pub fn export_overrides(&self) -> BTreeMap<SettingKey, SettingValue> {
        self.overrides.clone()
    }

    /// Imports overrides (replaces existing overrides)
    pub fn import_overrides(&mut self, overrides: BTreeMap<SettingKey, SettingValue>) {
        self.overrides = overrides;
    }

    /// Builds a validated configuration snapshot
    ///
    /// Keys without a value fall back to [`Config::default`].
    pub fn snapshot(&self) -> Result<Config, ConfigError> {
        let fallback = Config::default();

        let display_mode = match self.string_setting(keys::DISPLAY_MODE)? {
            Some(name) => DisplayMode::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                key: keys::DISPLAY_MODE.to_string(),
                value: name.to_string(),
            })?,
            None => fallback.display_mode,
        };

        let group_separator = match self.string_setting(keys::GROUP_SEPARATOR)? {
            Some(text) => single_char(text).ok_or_else(|| ConfigError::InvalidValue {
                key: keys::GROUP_SEPARATOR.to_string(),
                value: text.to_string(),
            })?,
            None => fallback.group_separator,
        };

        let config = Config {
            bytes_in_word: self.u32_setting(keys::BYTES_IN_WORD, fallback.bytes_in_word)?,
            bit_positions_reversed: self
                .bool_setting(keys::BIT_POSITIONS_REVERSED, fallback.bit_positions_reversed)?,
            display_mode,
            hide_on_mouse_move_away: self
                .bool_setting(keys::HIDE_ON_MOUSE_MOVE_AWAY, fallback.hide_on_mouse_move_away)?,
            show_swap_endianness: self
                .bool_setting(keys::SHOW_SWAP_ENDIANNESS, fallback.show_swap_endianness)?,
            show_float_reinterpretation: self.bool_setting(
                keys::SHOW_FLOAT_REINTERPRETATION,
                fallback.show_float_reinterpretation,
            )?,
            show_byte_size: self.bool_setting(keys::SHOW_BYTE_SIZE, fallback.show_byte_size)?,
            size_precision: self.u32_setting(keys::SIZE_PRECISION, fallback.size_precision)?,
            group_digits: self.bool_setting(keys::GROUP_DIGITS, fallback.group_digits)?,
            group_separator,
        };

        config.validate()?;
        Ok(config)
    }

    fn bool_setting(&self, key: &str, fallback: bool) -> Result<bool, ConfigError> {
        match self.get(&SettingKey::new(key)) {
            None => Ok(fallback),
            Some(value) => value.as_boolean().ok_or_else(|| ConfigError::WrongType {
                key: key.to_string(),
                expected: "a boolean",
            }),
        }
    }

    fn u32_setting(&self, key: &str, fallback: u32) -> Result<u32, ConfigError> {
        let Some(value) = self.get(&SettingKey::new(key)) else {
            return Ok(fallback);
        };
        let integer = value.as_integer().ok_or_else(|| ConfigError::WrongType {
            key: key.to_string(),
            expected: "an integer",
        })?;
        u32::try_from(integer).map_err(|_| ConfigError::OutOfRange {
            key: key.to_string(),
            value: integer,
        })
    }

    fn string_setting(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match self.get(&SettingKey::new(key)) {
            None => Ok(None),
            Some(value) => value
                .as_string()
                .map(Some)
                .ok_or_else(|| ConfigError::WrongType {
                    key: key.to_string(),
                    expected: "a string",
                }),
        }
    }
}

impl Default for SettingsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Setting keys
pub mod keys {
    pub const BYTES_IN_WORD: &str = "bytes_in_word";
    pub const BIT_POSITIONS_REVERSED: &str = "bit_positions_reversed";
    pub const DISPLAY_MODE: &str = "display_mode";
    pub const HIDE_ON_MOUSE_MOVE_AWAY: &str = "hide_on_mouse_move_away";
    pub const SHOW_SWAP_ENDIANNESS: &str = "show_swap_endianness";
    pub const SHOW_FLOAT_REINTERPRETATION: &str = "show_float_reinterpretation";
    pub const SHOW_BYTE_SIZE: &str = "show_byte_size";
    pub const SIZE_PRECISION: &str = "size_precision";
    pub const GROUP_DIGITS: &str = "group_digits";
    pub const GROUP_SEPARATOR: &str = "group_separator";
}

/// Creates a settings registry with default settings
pub fn create_default_registry() -> SettingsRegistry {
    let defaults = Config::default();
    let mut registry = SettingsRegistry::new();

    registry.register_default(
        keys::BYTES_IN_WORD,
        SettingValue::Integer(i64::from(defaults.bytes_in_word)),
    );
    registry.register_default(
        keys::BIT_POSITIONS_REVERSED,
        SettingValue::Boolean(defaults.bit_positions_reversed),
    );
    registry.register_default(
        keys::DISPLAY_MODE,
        SettingValue::String(defaults.display_mode.as_str().to_string()),
    );
    registry.register_default(
        keys::HIDE_ON_MOUSE_MOVE_AWAY,
        SettingValue::Boolean(defaults.hide_on_mouse_move_away),
    );
    registry.register_default(
        keys::SHOW_SWAP_ENDIANNESS,
        SettingValue::Boolean(defaults.show_swap_endianness),
    );
    registry.register_default(
        keys::SHOW_FLOAT_REINTERPRETATION,
        SettingValue::Boolean(defaults.show_float_reinterpretation),
    );
    registry.register_default(keys::SHOW_BYTE_SIZE, SettingValue::Boolean(defaults.show_byte_size));
    registry.register_default(
        keys::SIZE_PRECISION,
        SettingValue::Integer(i64::from(defaults.size_precision)),
    );
    registry.register_default(keys::GROUP_DIGITS, SettingValue::Boolean(defaults.group_digits));
    registry.register_default(
        keys::GROUP_SEPARATOR,
        SettingValue::String(defaults.group_separator.to_string()),
    );

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_snapshot_matches_default_config() {
        let registry = create_default_registry();
        assert_eq!(registry.snapshot(), Ok(Config::default()));
        assert_eq!(registry.list_defaults().len(), 10);
    }

    #[test]
    fn test_empty_registry_snapshot_uses_fallbacks() {
        let registry = SettingsRegistry::new();
        assert_eq!(registry.snapshot(), Ok(Config::default()));
    }

    #[test]
    fn test_override_wins() {
        let mut registry = create_default_registry();
        registry.set_override(keys::BYTES_IN_WORD, SettingValue::Integer(8));
        registry.set_override(keys::DISPLAY_MODE, SettingValue::String("tabled".to_string()));

        let config = registry.snapshot().unwrap();
        assert_eq!(config.word_bits(), 64);
        assert_eq!(config.display_mode, DisplayMode::Tabled);
    }

    #[test]
    fn test_remove_override_falls_back() {
        let mut registry = create_default_registry();
        registry.set_override(keys::SHOW_BYTE_SIZE, SettingValue::Boolean(false));
        assert!(registry.remove_override(&SettingKey::new(keys::SHOW_BYTE_SIZE)));
        assert!(!registry.remove_override(&SettingKey::new(keys::SHOW_BYTE_SIZE)));
        assert!(registry.snapshot().unwrap().show_byte_size);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let mut registry = create_default_registry();
        registry.set_override(keys::SHOW_BYTE_SIZE, SettingValue::Integer(1));
        assert_eq!(
            registry.snapshot(),
            Err(ConfigError::WrongType {
                key: keys::SHOW_BYTE_SIZE.to_string(),
                expected: "a boolean",
            })
        );
    }

    #[test]
    fn test_negative_integer_is_out_of_range() {
        let mut registry = create_default_registry();
        registry.set_override(keys::SIZE_PRECISION, SettingValue::Integer(-1));
        assert_eq!(
            registry.snapshot(),
            Err(ConfigError::OutOfRange {
                key: keys::SIZE_PRECISION.to_string(),
                value: -1,
            })
        );
    }

    #[test]
    fn test_unknown_display_mode() {
        let mut registry = create_default_registry();
        registry.set_override(keys::DISPLAY_MODE, SettingValue::String("fancy".to_string()));
        assert!(matches!(
            registry.snapshot(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_group_separator_must_be_one_char() {
        let mut registry = create_default_registry();
        registry.set_override(keys::GROUP_SEPARATOR, SettingValue::String("_".to_string()));
        assert_eq!(registry.snapshot().unwrap().group_separator, '_');

        registry.set_override(keys::GROUP_SEPARATOR, SettingValue::String("--".to_string()));
        assert!(registry.snapshot().is_err());
    }

    #[test]
    fn test_import_export_overrides() {
        let mut registry = create_default_registry();
        registry.set_override(keys::GROUP_DIGITS, SettingValue::Boolean(false));

        let exported = registry.export_overrides();
        registry.clear_overrides();
        assert!(registry.list_overrides().is_empty());

        registry.import_overrides(exported);
        assert_eq!(
            registry.get_override(&SettingKey::new(keys::GROUP_DIGITS)),
            Some(&SettingValue::Boolean(false))
        );
    }

    #[test]
    fn test_setting_value_untagged_json() {
        let value: SettingValue = serde_json::from_str("8").unwrap();
        assert_eq!(value, SettingValue::Integer(8));
        let value: SettingValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, SettingValue::Boolean(true));
        let value: SettingValue = serde_json::from_str("\"basic\"").unwrap();
        assert_eq!(value.as_string(), Some("basic"));
    }
}
