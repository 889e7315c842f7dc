//! Integer literal lexer
//!
//! Grammars, tried in this order (suffix optional, case-insensitive):
//!
//! ```text
//! decimal      0 | [1-9][0-9]*      suffix?
//! hexadecimal  0x [0-9a-f]+         suffix?
//! octal        0 [0-7]+             suffix?
//! binary       0b [01]+             suffix?
//! suffix       u | l | ul | lu | ll | ull | llu
//! ```
//!
//! Underscores strictly between two other characters are digit-group
//! separators: they are removed before matching and remembered so the
//! literal can be written back unchanged.

use alloc::string::String;
use alloc::vec::Vec;
use num_bigint::BigUint;

use crate::base::Base;
use crate::error::LiteralError;
use crate::literal::{Grouping, LiteralStyle, NumericLiteral};

const SUFFIXES: [&str; 7] = ["u", "l", "ul", "lu", "ll", "ull", "llu"];

/// A grammar match over separator-free text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scan<'a> {
    base: Base,
    prefix_len: usize,
    digits: &'a str,
    suffix: &'a str,
    upper_prefix: bool,
}

/// Parse selected text into a literal
pub fn parse(text: &str) -> Result<NumericLiteral, LiteralError> {
    let (stripped, separators) = strip_separators(text.trim());

    let scan = scan_decimal(&stripped)
        .or_else(|| scan_prefixed(&stripped, 'x', Base::Hexadecimal))
        .or_else(|| scan_octal(&stripped))
        .or_else(|| scan_prefixed(&stripped, 'b', Base::Binary))
        .ok_or(LiteralError::NotANumber)?;

    build_literal(scan, &separators, stripped.len())
}

/// Removes separator underscores, returning the text and separator indices
fn strip_separators(text: &str) -> (String, Vec<usize>) {
    let chars: Vec<char> = text.chars().collect();
    let mut stripped = String::with_capacity(text.len());
    let mut separators = Vec::new();

    for (i, &ch) in chars.iter().enumerate() {
        let is_separator = ch == '_'
            && i > 0
            && i + 1 < chars.len()
            && chars[i - 1] != '_'
            && chars[i + 1] != '_';

        if is_separator {
            separators.push(stripped.len());
        } else {
            stripped.push(ch);
        }
    }

    (stripped, separators)
}

/// Splits `text` after its leading run of `base` digits
fn split_digits(text: &str, base: Base) -> (&str, &str) {
    let end = text
        .find(|ch: char| !base.is_digit(ch))
        .unwrap_or(text.len());
    text.split_at(end)
}

fn is_suffix(text: &str) -> bool {
    text.is_empty() || SUFFIXES.iter().any(|s| s.eq_ignore_ascii_case(text))
}

fn scan_decimal(text: &str) -> Option<Scan<'_>> {
    let (digits, suffix) = split_digits(text, Base::Decimal);
    let leading_zero = digits.len() > 1 && digits.starts_with('0');

    if digits.is_empty() || leading_zero || !is_suffix(suffix) {
        return None;
    }

    Some(Scan {
        base: Base::Decimal,
        prefix_len: 0,
        digits,
        suffix,
        upper_prefix: false,
    })
}

fn scan_octal(text: &str) -> Option<Scan<'_>> {
    let rest = text.strip_prefix('0')?;
    let (digits, suffix) = split_digits(rest, Base::Octal);

    if digits.is_empty() || !is_suffix(suffix) {
        return None;
    }

    Some(Scan {
        base: Base::Octal,
        prefix_len: 1,
        digits,
        suffix,
        upper_prefix: false,
    })
}

fn scan_prefixed(text: &str, letter: char, base: Base) -> Option<Scan<'_>> {
    let after_zero = text.strip_prefix('0')?;
    let rest = after_zero.strip_prefix(|ch: char| ch.eq_ignore_ascii_case(&letter))?;
    let upper_prefix = after_zero.starts_with(letter.to_ascii_uppercase());
    let (digits, suffix) = split_digits(rest, base);

    if digits.is_empty() || !is_suffix(suffix) {
        return None;
    }

    Some(Scan {
        base,
        prefix_len: 2,
        digits,
        suffix,
        upper_prefix,
    })
}

fn build_literal(
    scan: Scan<'_>,
    separators: &[usize],
    text_len: usize,
) -> Result<NumericLiteral, LiteralError> {
    let magnitude = BigUint::parse_bytes(scan.digits.as_bytes(), scan.base.radix())
        .ok_or(LiteralError::NotANumber)?;

    let letters = || scan.digits.chars().filter(|ch| ch.is_ascii_alphabetic());
    let upper_digits = letters().next().is_some_and(|ch| ch.is_ascii_uppercase());
    let mixed_case = letters().any(|ch| ch.is_ascii_uppercase() != upper_digits);
    let digit_case = if mixed_case {
        scan.digits
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphabetic() {
                    ch.is_ascii_uppercase()
                } else {
                    upper_digits
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let grouping = if separators.is_empty() {
        None
    } else {
        let start = scan.prefix_len;
        let end = start + scan.digits.len();
        let cadence = separators
            .iter()
            .filter(|&&at| at > start && at < end)
            .max()
            .map(|&last| end - last)
            .unwrap_or_else(|| scan.base.default_cadence());
        Some(Grouping::from_layout(cadence, separators.to_vec(), text_len))
    };

    Ok(NumericLiteral::new(magnitude, scan.base)
        .with_suffix(scan.suffix)
        .with_digit_length(scan.digits.len())
        .with_grouping(grouping)
        .with_style(LiteralStyle {
            upper_prefix: scan.upper_prefix,
            upper_digits,
            digit_case,
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn magnitude(text: &str) -> u64 {
        let literal = parse(text).unwrap();
        u64::try_from(literal.magnitude().clone()).unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        let literal = parse("1234").unwrap();
        assert_eq!(literal.base(), Base::Decimal);
        assert_eq!(literal.digit_length(), 4);
        assert_eq!(magnitude("1234"), 1234);
    }

    #[test]
    fn test_parse_lone_zero_is_decimal() {
        let literal = parse("0").unwrap();
        assert_eq!(literal.base(), Base::Decimal);
        assert_eq!(literal.digit_length(), 1);
        assert_eq!(magnitude("0"), 0);
    }

    #[test]
    fn test_parse_leading_zero_is_octal() {
        let literal = parse("010").unwrap();
        assert_eq!(literal.base(), Base::Octal);
        assert_eq!(literal.digit_length(), 2);
        assert_eq!(magnitude("010"), 8);
    }

    #[test]
    fn test_parse_hex() {
        let literal = parse("0xFF").unwrap();
        assert_eq!(literal.base(), Base::Hexadecimal);
        assert_eq!(magnitude("0xFF"), 255);
        assert!(literal.style().upper_digits);
        assert!(!literal.style().upper_prefix);

        let upper = parse("0X1f").unwrap();
        assert!(upper.style().upper_prefix);
        assert!(!upper.style().upper_digits);
        assert!(upper.style().digit_case.is_empty());
    }

    #[test]
    fn test_parse_mixed_case_hex_records_each_digit() {
        let literal = parse("0xaB1c").unwrap();
        assert!(!literal.style().upper_digits);
        assert_eq!(literal.style().digit_case, [false, true, false, false]);
    }

    #[test]
    fn test_parse_binary() {
        let literal = parse("0b1010").unwrap();
        assert_eq!(literal.base(), Base::Binary);
        assert_eq!(literal.digit_length(), 4);
        assert_eq!(magnitude("0b1010"), 10);
    }

    #[test]
    fn test_parse_suffixes() {
        for text in ["10u", "10L", "0x10ul", "010LU", "0b1ull", "7llu", "0xffULL"] {
            assert!(parse(text).is_ok(), "{} should parse", text);
        }
        assert_eq!(parse("0xffULL").unwrap().suffix(), "ULL");
        assert_eq!(parse("0u").unwrap().base(), Base::Decimal);
    }

    #[test]
    fn test_parse_rejects_bad_suffix() {
        assert_eq!(parse("10uu"), Err(LiteralError::NotANumber));
        assert_eq!(parse("10lul"), Err(LiteralError::NotANumber));
        assert_eq!(parse("0x10z"), Err(LiteralError::NotANumber));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "   ", "abc", "-5", "1.5", "1+2", "08", "0x", "0b", "0b12", "ff"] {
            assert_eq!(parse(text), Err(LiteralError::NotANumber), "{:?}", text);
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(magnitude("  42\n"), 42);
    }

    #[test]
    fn test_parse_keeps_zero_padding_width() {
        let literal = parse("0x00ff").unwrap();
        assert_eq!(literal.digit_length(), 4);
        assert_eq!(literal.field_bits(), Some(16));
    }

    #[test]
    fn test_separators_are_stripped() {
        let literal = parse("1_000_000").unwrap();
        assert_eq!(magnitude("1_000_000"), 1_000_000);
        assert!(literal.uses_underscore_grouping());
        assert_eq!(literal.grouping().unwrap().cadence(), 3);
        assert_eq!(literal.digit_length(), 7);
    }

    #[test]
    fn test_hex_grouping_cadence() {
        let literal = parse("0xdead_beef").unwrap();
        assert_eq!(literal.grouping().unwrap().cadence(), 4);
        assert_eq!(literal.grouping().unwrap().layout(), &[6]);
    }

    #[test]
    fn test_separator_outside_digits_uses_default_cadence() {
        let literal = parse("0x_ff").unwrap();
        assert_eq!(magnitude("0x_ff"), 255);
        assert_eq!(literal.grouping().unwrap().cadence(), 4);
    }

    #[test]
    fn test_misplaced_underscores_fail() {
        for text in ["_1", "1_", "1__000", "__"] {
            assert_eq!(parse(text), Err(LiteralError::NotANumber), "{:?}", text);
        }
    }

    #[test]
    fn test_big_literal() {
        let literal = parse("0xffffffffffffffffffffffffffffffff").unwrap();
        assert_eq!(literal.bit_length(), 128);
        assert_eq!(literal.magnitude().to_str_radix(10), u128::MAX.to_string());
    }
}
