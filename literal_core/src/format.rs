//! Literal formatting
//!
//! Writes a literal back as source text: digits in the requested base,
//! zero padding, prefix, the original suffix and underscore grouping.

use alloc::format;
use alloc::string::{String, ToString};
use num_bigint::BigUint;

use crate::base::Base;
use crate::literal::NumericLiteral;

/// Formats `literal` as source text in `base`
///
/// `width_bits` requests zero padding to at least that many bits; it is
/// ignored for decimal. Writing a literal in its own base also restores the
/// digit width it was parsed with.
pub fn format_literal(literal: &NumericLiteral, base: Base, width_bits: Option<u64>) -> String {
    let same_base = base == literal.base();
    let style = literal.style();

    let mut min_digits = 0;
    if let Some(bits_per_digit) = base.bits_per_digit() {
        if same_base {
            min_digits = literal.digit_length();
        }
        if let Some(width) = width_bits {
            min_digits = min_digits.max(width.div_ceil(bits_per_digit) as usize);
        }
    }

    let upper_digits = style.upper_digits && base == Base::Hexadecimal;
    let mut digits = render_digits(literal.magnitude(), base, min_digits, upper_digits);
    if same_base && base == Base::Hexadecimal {
        if let Some(case) = style.digit_case_for(digits.len()) {
            digits = apply_case(&digits, case);
        }
    }
    let prefix = prefix(base, style.upper_prefix);
    let suffix = literal.suffix();

    let Some(grouping) = literal.grouping() else {
        return format!("{}{}{}", prefix, digits, suffix);
    };

    if same_base {
        let ungrouped = format!("{}{}{}", prefix, digits, suffix);
        if let Some(layout) = grouping.layout_for(ungrouped.len()) {
            return insert_separators(&ungrouped, layout);
        }
    }

    let cadence = if same_base {
        grouping.cadence()
    } else {
        base.default_cadence()
    };
    format!("{}{}{}", prefix, group_digits(&digits, cadence, '_'), suffix)
}

/// Digits of `magnitude` in `base`, zero padded to `min_digits`
pub fn render_digits(magnitude: &BigUint, base: Base, min_digits: usize, upper: bool) -> String {
    let mut digits = magnitude.to_str_radix(base.radix());
    if upper {
        digits.make_ascii_uppercase();
    }
    if digits.len() < min_digits {
        let mut padded = "0".repeat(min_digits - digits.len());
        padded.push_str(&digits);
        digits = padded;
    }
    digits
}

/// Splits `digits` into groups of `size` counted from the right
///
/// The leftmost group may be shorter than `size`.
pub fn group_digits(digits: &str, size: usize, separator: char) -> String {
    if size == 0 {
        return digits.to_string();
    }

    let count = digits.chars().count();
    let mut grouped = String::with_capacity(digits.len() + count / size);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (count - i) % size == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

fn prefix(base: Base, upper: bool) -> &'static str {
    match (base, upper) {
        (Base::Binary, false) => "0b",
        (Base::Binary, true) => "0B",
        (Base::Octal, _) => "0",
        (Base::Decimal, _) => "",
        (Base::Hexadecimal, false) => "0x",
        (Base::Hexadecimal, true) => "0X",
    }
}

fn apply_case(digits: &str, case: &[bool]) -> String {
    digits
        .chars()
        .zip(case)
        .map(|(ch, &upper)| {
            if upper {
                ch.to_ascii_uppercase()
            } else {
                ch.to_ascii_lowercase()
            }
        })
        .collect()
}

fn insert_separators(text: &str, layout: &[usize]) -> String {
    let mut out = String::with_capacity(text.len() + layout.len());
    for (at, ch) in text.char_indices() {
        if layout.contains(&at) {
            out.push('_');
        }
        out.push(ch);
    }
    out
}
