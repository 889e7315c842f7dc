#![no_std]

//! # Literal View
//!
//! View model for the number popup, independent of how a host draws it.
//!
//! ## Philosophy
//!
//! - **Views, not markup**: Output is structured data, never HTML
//! - **Pure**: A view is a function of (literal, config); nothing is cached
//! - **Addressable**: Every bit cell carries the offset a toggle action needs
//! - **Testable**: Views are serializable and can be snapshot-tested
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A popup renderer
//! - An expression evaluator
//! - A place to keep state between selections

extern crate alloc;

pub mod action;
pub mod assemble;
pub mod extended;
pub mod table;

use alloc::string::String;
use alloc::vec::Vec;
use literal_core::Base;
use serde::{Deserialize, Serialize};

pub use action::PopupAction;
pub use assemble::build_view;
pub use extended::{float32_of, float64_of, human_size};
pub use table::build_table;

/// The literal rendered in one base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseRow {
    pub base: Base,
    /// Digits without prefix, grouped for reading
    pub text: String,
    /// This is the literal's own base
    pub current: bool,
}

impl BaseRow {
    pub fn label(&self) -> &'static str {
        self.base.label()
    }
}

/// One character of the display word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCell {
    pub ch: char,
    /// Bit offset from the least significant bit; `None` for separators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

/// The literal's bits, most significant first, split into nibbles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayWord {
    pub bit_width: u64,
    pub cells: Vec<WordCell>,
}

impl DisplayWord {
    pub fn as_string(&self) -> String {
        self.cells.iter().map(|cell| cell.ch).collect()
    }

    /// Column of the cell holding bit `offset`
    pub fn column_of(&self, offset: u64) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.offset == Some(offset))
    }

    /// A toggle action for every bit cell, left to right
    pub fn toggle_actions(&self) -> Vec<PopupAction> {
        self.cells
            .iter()
            .filter_map(|cell| cell.offset)
            .map(|offset| PopupAction::ToggleBit { offset })
            .collect()
    }
}

/// A label under the display word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulerMark {
    /// Column of the bit the label names
    pub column: usize,
    pub label: u64,
}

/// Bit position labels, one per nibble
///
/// In normal order a label names its nibble's least significant bit and
/// ends under it; reversed, it counts from the most significant end and
/// starts under the nibble's first bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitRuler {
    pub reversed: bool,
    pub marks: Vec<RulerMark>,
}

impl BitRuler {
    /// The ruler as a single line aligned to the display word
    pub fn render(&self) -> String {
        let mut line = String::new();
        for mark in &self.marks {
            let label = alloc::format!("{}", mark.label);
            let mut start = if self.reversed {
                mark.column
            } else {
                (mark.column + 1).saturating_sub(label.len())
            };
            if !line.is_empty() && start <= line.len() {
                start = line.len() + 1;
            }
            while line.len() < start {
                line.push(' ');
            }
            line.push_str(&label);
        }
        line
    }
}

/// Informational lines shown in extended mode
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtendedInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float32: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byte_size: Option<String>,
}

impl ExtendedInfo {
    pub fn is_empty(&self) -> bool {
        self.float32.is_none() && self.float64.is_none() && self.byte_size.is_none()
    }
}

/// Popup for a recognised literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupView {
    /// The literal as source text
    pub source: String,
    pub base: Base,
    pub bit_width: u64,
    /// Hex, decimal, octal, binary
    pub rows: Vec<BaseRow>,
    pub word: DisplayWord,
    pub ruler: BitRuler,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended: Option<ExtendedInfo>,
    /// Base conversions and byte swaps on offer
    pub actions: Vec<PopupAction>,
    pub hide_on_mouse_move_away: bool,
}

impl PopupView {
    pub fn row(&self, base: Base) -> Option<&BaseRow> {
        self.rows.iter().find(|row| row.base == base)
    }
}

/// One line of the tabled comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub base: Base,
    pub digits: String,
}

/// Raw hex text shown side by side in several bases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub source: String,
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn row(&self, base: Base) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.base == base)
    }

    /// Rows with labels left-aligned and digits right-aligned
    pub fn lines(&self) -> Vec<String> {
        let label_width = self
            .rows
            .iter()
            .map(|row| row.base.label().len())
            .max()
            .unwrap_or(0);
        let digits_width = self
            .rows
            .iter()
            .map(|row| row.digits.len())
            .max()
            .unwrap_or(0);

        self.rows
            .iter()
            .map(|row| {
                alloc::format!(
                    "{:<lw$}  {:>dw$}",
                    row.base.label(),
                    row.digits,
                    lw = label_width,
                    dw = digits_width
                )
            })
            .collect()
    }
}

/// What the popup shows for a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PopupContent {
    Number(PopupView),
    Table(TableView),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_ruler_render_normal() {
        let ruler = BitRuler {
            reversed: false,
            marks: vec![
                RulerMark { column: 3, label: 4 },
                RulerMark { column: 8, label: 0 },
            ],
        };
        assert_eq!(ruler.render(), "   4    0");
    }

    #[test]
    fn test_ruler_render_reversed() {
        let ruler = BitRuler {
            reversed: true,
            marks: vec![
                RulerMark { column: 0, label: 0 },
                RulerMark { column: 5, label: 4 },
            ],
        };
        assert_eq!(ruler.render(), "0    4");
    }

    #[test]
    fn test_ruler_render_never_overlaps() {
        let ruler = BitRuler {
            reversed: false,
            marks: vec![
                RulerMark { column: 1, label: 100 },
                RulerMark { column: 2, label: 96 },
            ],
        };
        assert_eq!(ruler.render(), "100 96");
    }

    #[test]
    fn test_table_lines_align() {
        let table = TableView {
            source: "ff".to_string(),
            rows: vec![
                TableRow {
                    base: Base::Hexadecimal,
                    digits: "ff".to_string(),
                },
                TableRow {
                    base: Base::Decimal,
                    digits: "255".to_string(),
                },
                TableRow {
                    base: Base::Binary,
                    digits: "11111111".to_string(),
                },
            ],
        };
        assert_eq!(
            table.lines(),
            vec![
                "Hex        ff".to_string(),
                "Dec       255".to_string(),
                "Bin  11111111".to_string(),
            ]
        );
    }

    #[test]
    fn test_display_word_helpers() {
        let word = DisplayWord {
            bit_width: 2,
            cells: vec![
                WordCell { ch: '1', offset: Some(1) },
                WordCell { ch: ' ', offset: None },
                WordCell { ch: '0', offset: Some(0) },
            ],
        };
        assert_eq!(word.as_string(), "1 0");
        assert_eq!(word.column_of(0), Some(2));
        assert_eq!(word.column_of(5), None);
        assert_eq!(
            word.toggle_actions(),
            vec![
                PopupAction::ToggleBit { offset: 1 },
                PopupAction::ToggleBit { offset: 0 },
            ]
        );
    }
}
