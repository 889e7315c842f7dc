//! Settings persistence layer
//!
//! Loading and saving setting overrides as JSON. The host decides where the
//! bytes live; this module only converts them.

use crate::{SettingKey, SettingValue};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Serializable container for setting overrides
/// Uses BTreeMap for stable ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsData {
    /// Version of the settings format
    pub version: u32,
    /// Overrides keyed by setting name
    #[serde(default)]
    pub overrides: BTreeMap<String, SettingValue>,
}

impl SettingsData {
    /// Current version of the settings format
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            overrides: BTreeMap::new(),
        }
    }

    /// Creates settings data from registry overrides
    pub fn from_overrides(overrides: &BTreeMap<SettingKey, SettingValue>) -> Self {
        let mut data = Self::new();
        for (key, value) in overrides {
            data.overrides
                .insert(key.as_str().to_string(), value.clone());
        }
        data
    }

    /// Converts settings data to registry overrides
    pub fn to_overrides(&self) -> BTreeMap<SettingKey, SettingValue> {
        self.overrides
            .iter()
            .map(|(key, value)| (SettingKey::new(key.as_str()), value.clone()))
            .collect()
    }
}

impl Default for SettingsData {
    fn default() -> Self {
        Self::new()
    }
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors that can occur during persistence operations
#[derive(Debug, Clone, PartialEq)]
pub enum PersistenceError {
    /// Failed to serialize settings
    SerializationFailed(String),
    /// Failed to deserialize settings
    DeserializationFailed(String),
    /// Unsupported settings version
    UnsupportedVersion(u32),
}

impl core::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PersistenceError::SerializationFailed(msg) => {
                write!(f, "Failed to serialize settings: {}", msg)
            }
            PersistenceError::DeserializationFailed(msg) => {
                write!(f, "Failed to deserialize settings: {}", msg)
            }
            PersistenceError::UnsupportedVersion(version) => {
                write!(f, "Unsupported settings version: {}", version)
            }
        }
    }
}

impl core::error::Error for PersistenceError {}

/// Serializes setting overrides to JSON bytes
pub fn serialize_settings(data: &SettingsData) -> PersistenceResult<Vec<u8>> {
    serde_json::to_vec_pretty(data)
        .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
}

/// Deserializes setting overrides from JSON bytes
pub fn deserialize_settings(bytes: &[u8]) -> PersistenceResult<SettingsData> {
    let data: SettingsData = serde_json::from_slice(bytes)
        .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?;

    if data.version != SettingsData::CURRENT_VERSION {
        return Err(PersistenceError::UnsupportedVersion(data.version));
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_default_registry, keys, DisplayMode};

    #[test]
    fn test_settings_survive_serialization() {
        let mut registry = create_default_registry();
        registry.set_override(keys::BYTES_IN_WORD, SettingValue::Integer(2));
        registry.set_override(keys::DISPLAY_MODE, SettingValue::String("extended".to_string()));

        let data = SettingsData::from_overrides(&registry.export_overrides());
        let bytes = serialize_settings(&data).unwrap();
        let restored = deserialize_settings(&bytes).unwrap();
        assert_eq!(restored, data);

        let mut fresh = create_default_registry();
        fresh.import_overrides(restored.to_overrides());
        let config = fresh.snapshot().unwrap();
        assert_eq!(config.bytes_in_word, 2);
        assert_eq!(config.display_mode, DisplayMode::Extended);
    }

    #[test]
    fn test_deserialize_hand_written_file() {
        let json = br#"{
            "version": 1,
            "overrides": {
                "bit_positions_reversed": true,
                "size_precision": 3
            }
        }"#;
        let data = deserialize_settings(json).unwrap();
        assert_eq!(
            data.overrides.get("size_precision"),
            Some(&SettingValue::Integer(3))
        );
    }

    #[test]
    fn test_missing_overrides_is_empty() {
        let data = deserialize_settings(br#"{"version": 1}"#).unwrap();
        assert!(data.overrides.is_empty());
    }

    #[test]
    fn test_unsupported_version() {
        let result = deserialize_settings(br#"{"version": 99, "overrides": {}}"#);
        assert_eq!(result, Err(PersistenceError::UnsupportedVersion(99)));
    }

    #[test]
    fn test_malformed_json() {
        let result = deserialize_settings(b"{not json");
        assert!(matches!(
            result,
            Err(PersistenceError::DeserializationFailed(_))
        ));
    }
}
