//! # NumPeek Host Runtime
//!
//! A scriptable host for the number popup.
//!
//! ## Philosophy
//!
//! - **Host owns I/O**: The popup never reads files or prints
//! - **Input is explicit events**: Selections and clicks, not keystrokes
//! - **Deterministic**: The same script always yields the same transcript
//!
//! ## Responsibilities
//!
//! The host runtime:
//! - Loads popup settings from a JSON overrides file
//! - Keeps the current selection regions
//! - Feeds selection and click events to the popup
//! - Replaces the selection after a successful edit and re-renders
//!
//! ## Non-Responsibilities
//!
//! The host does NOT:
//! - Parse literals or build views itself
//! - Draw a real popup window
//! - Track mouse movement

pub mod runtime;
pub mod script;

pub use runtime::{load_settings, HostRuntime, HostRuntimeConfig, HostRuntimeError, TranscriptEntry};
pub use script::{EventScript, EventScriptError, ScriptedEvent};
