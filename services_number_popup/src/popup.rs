//! Number popup entry points

use crate::actions::{ActionError, ActionParser};
use literal_core::{parse, Base, LiteralError, NumericLiteral, WordSize};
use literal_view::{build_table, build_view, PopupAction, PopupContent};
use popup_settings::{Config, DisplayMode};
use thiserror::Error;
use tracing::{debug, error};

/// Popup error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PopupError {
    #[error("Literal error: {0}")]
    Literal(#[from] LiteralError),

    #[error("Bit offset {offset} outside display width {bit_width}")]
    InvalidBitOffset { offset: u64, bit_width: u64 },

    #[error("Action error: {0}")]
    Action(#[from] ActionError),
}

impl PopupError {
    /// Errors the host should swallow without telling the user
    pub fn is_silent(&self) -> bool {
        matches!(self, PopupError::Literal(LiteralError::NotANumber))
    }
}

/// Popup result
pub type PopupResult<T> = Result<T, PopupError>;

/// The number popup
///
/// Holds nothing but the configuration snapshot; the host replaces the
/// whole popup when settings change.
#[derive(Debug, Clone, Default)]
pub struct NumberPopup {
    config: Config,
}

impl NumberPopup {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decides what the popup shows for the current selections
    ///
    /// Returns `None` to hide the popup: no selection, several selections,
    /// or text that is not a literal.
    pub fn on_selection_changed(&self, selections: &[&str]) -> Option<PopupContent> {
        let [text] = selections else {
            debug!(count = selections.len(), "hiding popup: not a single selection");
            return None;
        };

        if self.config.display_mode == DisplayMode::Tabled {
            let table = build_table(text);
            if table.is_none() {
                debug!(text = %text, "selection is not hex text");
            }
            return table.map(PopupContent::Table);
        }

        let literal = self.parse(text).ok()?;
        Some(PopupContent::Number(build_view(&literal, &self.config)))
    }

    /// Replacement text for the selection rewritten in `base`
    pub fn on_convert_base(&self, text: &str, base: Base) -> PopupResult<String> {
        let literal = self.parse(text)?;
        Ok(literal.convert_base(base).to_source())
    }

    /// Replacement text with the bit at `offset` flipped
    pub fn on_toggle_bit(&self, text: &str, offset: u64) -> PopupResult<String> {
        let literal = self.parse(text)?;
        let min_bits = self.config.word_bits();
        match literal.checked_toggle_bit(offset, min_bits) {
            Some(toggled) => Ok(toggled.to_source()),
            None => {
                let bit_width = literal.bit_width(min_bits);
                error!(offset, bit_width, "bit offset outside display width");
                Err(PopupError::InvalidBitOffset { offset, bit_width })
            }
        }
    }

    /// Replacement text with bytes reversed inside each `group_bits` word
    pub fn on_swap_endianness(&self, text: &str, group_bits: u32) -> PopupResult<String> {
        let word = WordSize::try_from(group_bits)?;
        let literal = self.parse(text)?;
        Ok(literal.swap_endianness(word).to_source())
    }

    /// Runs a decoded action against the selection
    pub fn handle_action(&self, text: &str, action: PopupAction) -> PopupResult<String> {
        debug!(?action, "handling popup action");
        match action {
            PopupAction::ConvertBase { base } => self.on_convert_base(text, base),
            PopupAction::ToggleBit { offset } => self.on_toggle_bit(text, offset),
            PopupAction::SwapEndianness { bits } => self.on_swap_endianness(text, bits.bits()),
        }
    }

    /// Decodes a JSON action payload and runs it
    pub fn handle_payload(&self, text: &str, payload: &str) -> PopupResult<String> {
        let action = ActionParser::parse(payload)?;
        self.handle_action(text, action)
    }

    fn parse(&self, text: &str) -> PopupResult<NumericLiteral> {
        parse(text).map_err(|err| {
            debug!(text = %text, %err, "selection is not a literal");
            PopupError::from(err)
        })
    }
}
