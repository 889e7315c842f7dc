//! Action payload decoding

use literal_view::PopupAction;
use serde_json::Value;
use thiserror::Error;

/// Action decoding error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Empty action payload")]
    Empty,

    #[error("Malformed action payload: {0}")]
    Malformed(String),

    #[error("Unknown action function: {0}")]
    UnknownFunction(String),

    #[error("Invalid data for {func}: {reason}")]
    InvalidData { func: String, reason: String },
}

/// Action payload parser
pub struct ActionParser;

impl ActionParser {
    /// Parse a `{"func": .., "data": ..}` payload
    pub fn parse(payload: &str) -> Result<PopupAction, ActionError> {
        let trimmed = payload.trim();
        if trimmed.is_empty() {
            return Err(ActionError::Empty);
        }

        let value: Value =
            serde_json::from_str(trimmed).map_err(|e| ActionError::Malformed(e.to_string()))?;
        let func = value
            .get("func")
            .and_then(Value::as_str)
            .ok_or_else(|| ActionError::Malformed("missing \"func\"".to_string()))?
            .to_string();

        // The `func` tag is matched against the PopupAction variants by serde
        serde_json::from_value(value).map_err(|e| {
            let reason = e.to_string();
            if reason.starts_with("unknown variant") {
                ActionError::UnknownFunction(func)
            } else {
                ActionError::InvalidData { func, reason }
            }
        })
    }

    /// Encode an action in the payload form the UI sends
    pub fn encode(action: &PopupAction) -> String {
        // PopupAction holds only integers and unit-like enums
        serde_json::to_string(action).unwrap_or_default()
    }
}
