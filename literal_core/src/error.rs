//! Literal errors

use core::fmt;

/// Errors produced by the literal engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralError {
    /// Text matches none of the literal grammars
    NotANumber,
    /// Radix other than 2, 8, 10 or 16
    UnsupportedRadix(u32),
    /// Byte-swap word other than 16, 32 or 64 bits
    UnsupportedWordSize(u32),
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::NotANumber => write!(f, "Not a number"),
            LiteralError::UnsupportedRadix(radix) => write!(f, "Unsupported radix: {}", radix),
            LiteralError::UnsupportedWordSize(bits) => {
                write!(f, "Unsupported word size: {} bits", bits)
            }
        }
    }
}

impl core::error::Error for LiteralError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_messages() {
        assert_eq!(LiteralError::NotANumber.to_string(), "Not a number");
        assert_eq!(
            LiteralError::UnsupportedRadix(3).to_string(),
            "Unsupported radix: 3"
        );
        assert_eq!(
            LiteralError::UnsupportedWordSize(24).to_string(),
            "Unsupported word size: 24 bits"
        );
    }
}
