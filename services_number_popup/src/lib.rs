//! # Number Popup Service
//!
//! Host-facing entry points for the number popup.
//!
//! ## Philosophy
//!
//! - **Stateless**: Every call is a pure function of (selection text, config)
//! - **Explicit settings**: The host hands in an immutable `Config` snapshot
//! - **Typed actions**: Payloads are decoded once, then dispatched by `match`
//! - **Testable**: No host is needed; text in, text or view out
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An editor integration (selection tracking belongs to the host)
//! - An expression evaluator
//! - A GUI toolkit
//!
//! ## Design
//!
//! - `on_selection_changed` decides whether a popup is shown and what it holds
//! - Edit entry points return the replacement text for the selection
//! - A selection that is not a literal is silent: no popup, no edit

pub mod actions;
pub mod popup;
pub mod render;

pub use actions::{ActionError, ActionParser};
pub use popup::{NumberPopup, PopupError, PopupResult};
pub use render::{action_label, PopupRenderer};

pub use literal_core::{Base, LiteralError, WordSize};
pub use literal_view::{PopupAction, PopupContent, PopupView, TableView};
pub use popup_settings::{Config, DisplayMode};
