//! Numeric literal value type

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use num_bigint::BigUint;

use crate::base::Base;
use crate::format::format_literal;

/// Letter case of a literal's prefix and hex digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LiteralStyle {
    /// `0X` / `0B` instead of `0x` / `0b`
    pub upper_prefix: bool,
    /// `0xFF` instead of `0xff`
    pub upper_digits: bool,
    /// Upper case flag per written digit, recorded only for mixed-case hex
    pub digit_case: Vec<bool>,
}

impl LiteralStyle {
    /// Recorded per-digit case, if it was recorded for `len` digits
    pub(crate) fn digit_case_for(&self, len: usize) -> Option<&[bool]> {
        if !self.digit_case.is_empty() && self.digit_case.len() == len {
            Some(&self.digit_case)
        } else {
            None
        }
    }
}

/// Underscore digit grouping recorded from source text
///
/// The layout holds indices into the separator-free literal text, each one
/// marking a character that was preceded by `_`. It is only replayed when
/// the re-serialized text has the recorded length; otherwise the digit run
/// is regrouped every `cadence` digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grouping {
    cadence: usize,
    layout: Vec<usize>,
    layout_len: usize,
}

impl Grouping {
    pub fn with_cadence(cadence: usize) -> Self {
        Self {
            cadence: cadence.max(1),
            layout: Vec::new(),
            layout_len: 0,
        }
    }

    pub fn from_layout(cadence: usize, layout: Vec<usize>, layout_len: usize) -> Self {
        Self {
            cadence: cadence.max(1),
            layout,
            layout_len,
        }
    }

    pub fn cadence(&self) -> usize {
        self.cadence
    }

    pub fn layout(&self) -> &[usize] {
        &self.layout
    }

    /// Recorded layout, if it was recorded against text of `len` characters
    pub(crate) fn layout_for(&self, len: usize) -> Option<&[usize]> {
        if !self.layout.is_empty() && self.layout_len == len {
            Some(&self.layout)
        } else {
            None
        }
    }
}

/// An integer literal as written in source text
///
/// Immutable: transforms return a new literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericLiteral {
    magnitude: BigUint,
    base: Base,
    suffix: String,
    digit_length: usize,
    grouping: Option<Grouping>,
    style: LiteralStyle,
}

impl NumericLiteral {
    /// Creates an unsuffixed, ungrouped literal at its natural width
    pub fn new(magnitude: BigUint, base: Base) -> Self {
        let digit_length = natural_digits(&magnitude, base);
        Self {
            magnitude,
            base,
            suffix: String::new(),
            digit_length,
            grouping: None,
            style: LiteralStyle::default(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets the minimum digit count written back (zero padding)
    pub fn with_digit_length(mut self, digit_length: usize) -> Self {
        self.digit_length = digit_length;
        self
    }

    pub fn with_grouping(mut self, grouping: Option<Grouping>) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_style(mut self, style: LiteralStyle) -> Self {
        self.style = style;
        self
    }

    /// Same literal with a different magnitude
    pub(crate) fn with_magnitude(&self, magnitude: BigUint) -> Self {
        Self {
            magnitude,
            ..self.clone()
        }
    }

    pub fn magnitude(&self) -> &BigUint {
        &self.magnitude
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn digit_length(&self) -> usize {
        self.digit_length
    }

    pub fn grouping(&self) -> Option<&Grouping> {
        self.grouping.as_ref()
    }

    pub fn uses_underscore_grouping(&self) -> bool {
        self.grouping.is_some()
    }

    pub fn style(&self) -> &LiteralStyle {
        &self.style
    }

    /// Number of significant bits (0 for a zero magnitude)
    pub fn bit_length(&self) -> u64 {
        self.magnitude.bits()
    }

    /// Display width in bits: bit length rounded up to a nibble, at least `min_bits`
    pub fn bit_width(&self, min_bits: u64) -> u64 {
        let nibbles = self.bit_length().div_ceil(4);
        (nibbles * 4).max(min_bits)
    }

    /// Width in bits of the written digit field, for power-of-two bases
    pub fn field_bits(&self) -> Option<u64> {
        self.base
            .bits_per_digit()
            .map(|bits| bits * self.digit_length as u64)
    }

    /// Source text of this literal in its own base
    pub fn to_source(&self) -> String {
        format_literal(self, self.base, None)
    }
}

impl fmt::Display for NumericLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

/// Digit count of `magnitude` written in `base` without padding
pub fn natural_digits(magnitude: &BigUint, base: Base) -> usize {
    magnitude.to_str_radix(base.radix()).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_literal_has_natural_width() {
        let literal = NumericLiteral::new(BigUint::from(255u32), Base::Hexadecimal);
        assert_eq!(literal.digit_length(), 2);
        assert_eq!(literal.suffix(), "");
        assert!(!literal.uses_underscore_grouping());
    }

    #[test]
    fn test_zero_has_one_digit() {
        let literal = NumericLiteral::new(BigUint::from(0u32), Base::Decimal);
        assert_eq!(literal.digit_length(), 1);
        assert_eq!(literal.bit_length(), 0);
    }

    #[test]
    fn test_bit_width_rounds_to_nibble() {
        let literal = NumericLiteral::new(BigUint::from(0x1ffu32), Base::Hexadecimal);
        assert_eq!(literal.bit_length(), 9);
        assert_eq!(literal.bit_width(0), 12);
        assert_eq!(literal.bit_width(32), 32);
    }

    #[test]
    fn test_bit_width_of_zero_is_word_size() {
        let literal = NumericLiteral::new(BigUint::from(0u32), Base::Decimal);
        assert_eq!(literal.bit_width(8), 8);
        assert_eq!(literal.bit_width(0), 0);
    }

    #[test]
    fn test_field_bits() {
        let hex = NumericLiteral::new(BigUint::from(0xffu32), Base::Hexadecimal)
            .with_digit_length(4);
        assert_eq!(hex.field_bits(), Some(16));

        let dec = NumericLiteral::new(BigUint::from(10u32), Base::Decimal);
        assert_eq!(dec.field_bits(), None);
    }

    #[test]
    fn test_grouping_layout_only_for_recorded_length() {
        let grouping = Grouping::from_layout(3, alloc::vec![1, 4], 7);
        assert_eq!(grouping.layout_for(7), Some(&[1usize, 4][..]));
        assert_eq!(grouping.layout_for(8), None);
        assert_eq!(Grouping::with_cadence(0).cadence(), 1);
    }
}
