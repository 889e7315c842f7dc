//! View assembly
//!
//! Turns a parsed literal and a configuration snapshot into a [`PopupView`].

use alloc::vec::Vec;
use literal_core::{group_digits, render_digits, Base, NumericLiteral, WordSize};
use num_bigint::BigUint;
use popup_settings::{Config, DisplayMode};

use crate::extended::{float32_of, float64_of, human_size};
use crate::{
    BaseRow, BitRuler, DisplayWord, ExtendedInfo, PopupAction, PopupView, RulerMark, WordCell,
};

const NIBBLE: u64 = 4;
const DECIMAL_GROUP: usize = 3;
const DECIMAL_SEPARATOR: char = ',';
const DIGIT_GROUP: usize = 4;

/// Builds the popup for `literal`
pub fn build_view(literal: &NumericLiteral, config: &Config) -> PopupView {
    let bit_width = literal.bit_width(config.word_bits());

    PopupView {
        source: literal.to_source(),
        base: literal.base(),
        bit_width,
        rows: base_rows(literal, bit_width, config),
        word: display_word(literal.magnitude(), bit_width),
        ruler: bit_ruler(bit_width, config.bit_positions_reversed),
        extended: match config.display_mode {
            DisplayMode::Extended => Some(extended_info(literal, config)),
            DisplayMode::Basic | DisplayMode::Tabled => None,
        },
        actions: actions(literal, config),
        hide_on_mouse_move_away: config.hide_on_mouse_move_away,
    }
}

fn base_rows(literal: &NumericLiteral, bit_width: u64, config: &Config) -> Vec<BaseRow> {
    let upper = literal.style().upper_digits;
    Base::ALL
        .iter()
        .map(|&base| {
            let min_digits = match base.bits_per_digit() {
                Some(bits) if base != Base::Octal => bit_width.div_ceil(bits) as usize,
                _ => 0,
            };
            let digits = render_digits(literal.magnitude(), base, min_digits, upper);
            let text = if !config.group_digits {
                digits
            } else if base == Base::Decimal {
                group_digits(&digits, DECIMAL_GROUP, DECIMAL_SEPARATOR)
            } else {
                group_digits(&digits, DIGIT_GROUP, config.group_separator)
            };
            BaseRow {
                base,
                text,
                current: base == literal.base(),
            }
        })
        .collect()
}

fn display_word(magnitude: &BigUint, bit_width: u64) -> DisplayWord {
    let mut cells = Vec::new();
    for offset in (0..bit_width).rev() {
        if offset + 1 != bit_width && (offset + 1) % NIBBLE == 0 {
            cells.push(WordCell {
                ch: ' ',
                offset: None,
            });
        }
        cells.push(WordCell {
            ch: if magnitude.bit(offset) { '1' } else { '0' },
            offset: Some(offset),
        });
    }
    DisplayWord { bit_width, cells }
}

fn bit_ruler(bit_width: u64, reversed: bool) -> BitRuler {
    let nibbles = bit_width.div_ceil(NIBBLE);
    let stride = NIBBLE as usize + 1;
    let marks = (0..nibbles)
        .map(|index| {
            let first_column = index as usize * stride;
            if reversed {
                RulerMark {
                    column: first_column,
                    label: index * NIBBLE,
                }
            } else {
                RulerMark {
                    column: first_column + NIBBLE as usize - 1,
                    label: (nibbles - 1 - index) * NIBBLE,
                }
            }
        })
        .collect();
    BitRuler { reversed, marks }
}

fn extended_info(literal: &NumericLiteral, config: &Config) -> ExtendedInfo {
    let floats = config.show_float_reinterpretation && literal.base() == Base::Hexadecimal;
    let magnitude = literal.magnitude();
    ExtendedInfo {
        float32: if floats { float32_of(magnitude) } else { None },
        float64: if floats { float64_of(magnitude) } else { None },
        byte_size: if config.show_byte_size {
            Some(human_size(magnitude, config.size_precision as usize))
        } else {
            None
        },
    }
}

fn actions(literal: &NumericLiteral, config: &Config) -> Vec<PopupAction> {
    let mut actions: Vec<PopupAction> = Base::ALL
        .iter()
        .filter(|&&base| base != literal.base())
        .map(|&base| PopupAction::ConvertBase { base })
        .collect();
    if config.show_swap_endianness {
        actions.extend(
            WordSize::ALL
                .iter()
                .map(|&bits| PopupAction::SwapEndianness { bits }),
        );
    }
    actions
}
