//! Tabled mode
//!
//! Reads the selected text as bare hex digits, without the literal grammar,
//! and lays it out next to its decimal and binary forms.

use alloc::string::ToString;
use alloc::vec;
use literal_core::Base;
use num_bigint::BigUint;

use crate::{TableRow, TableView};

/// Builds the comparison table, `None` unless the text is all hex digits
pub fn build_table(text: &str) -> Option<TableView> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let value = BigUint::parse_bytes(text.as_bytes(), 16)?;
    Some(TableView {
        source: text.to_string(),
        rows: vec![
            TableRow {
                base: Base::Hexadecimal,
                digits: text.to_string(),
            },
            TableRow {
                base: Base::Decimal,
                digits: value.to_str_radix(10),
            },
            TableRow {
                base: Base::Binary,
                digits: value.to_str_radix(2),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_for_hex_text() {
        let table = build_table("ff").unwrap();
        assert_eq!(table.row(Base::Hexadecimal).unwrap().digits, "ff");
        assert_eq!(table.row(Base::Decimal).unwrap().digits, "255");
        assert_eq!(table.row(Base::Binary).unwrap().digits, "11111111");
    }

    #[test]
    fn test_table_keeps_text_as_written() {
        let table = build_table("  00Ab ").unwrap();
        assert_eq!(table.source, "00Ab");
        assert_eq!(table.row(Base::Hexadecimal).unwrap().digits, "00Ab");
        assert_eq!(table.row(Base::Decimal).unwrap().digits, "171");
    }

    #[test]
    fn test_table_rejects_non_hex() {
        assert!(build_table("1g").is_none());
        assert!(build_table("").is_none());
        assert!(build_table("0xff").is_none());
        assert!(build_table("f f").is_none());
    }
}
