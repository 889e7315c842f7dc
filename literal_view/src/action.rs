//! Popup actions
//!
//! The UI reports clicks as a small JSON payload:
//!
//! ```text
//! {"func": "convert_base",    "data": {"base": 16}}
//! {"func": "toggle_bit",      "data": {"offset": 3}}
//! {"func": "swap_endianness", "data": {"bits": 32}}
//! ```
//!
//! Payloads are decoded once into [`PopupAction`] and dispatched by `match`.

use literal_core::{Base, WordSize};
use serde::{Deserialize, Serialize};

/// An edit requested from the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "func", content = "data", rename_all = "snake_case")]
pub enum PopupAction {
    /// Rewrite the literal in another base
    ConvertBase { base: Base },
    /// Flip one bit, offset counted from the least significant bit
    ToggleBit { offset: u64 },
    /// Reverse byte order inside each word
    SwapEndianness { bits: WordSize },
}
