//! Number bases and swap word sizes

use crate::error::LiteralError;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Base of an integer literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde_support",
    derive(Serialize, Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    /// Popup row order
    pub const ALL: [Base; 4] = [
        Base::Hexadecimal,
        Base::Decimal,
        Base::Octal,
        Base::Binary,
    ];

    pub fn radix(self) -> u32 {
        match self {
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    pub fn from_radix(radix: u32) -> Option<Base> {
        match radix {
            2 => Some(Base::Binary),
            8 => Some(Base::Octal),
            10 => Some(Base::Decimal),
            16 => Some(Base::Hexadecimal),
            _ => None,
        }
    }

    /// Bits encoded by one digit, `None` for decimal
    pub fn bits_per_digit(self) -> Option<u64> {
        match self {
            Base::Binary => Some(1),
            Base::Octal => Some(3),
            Base::Decimal => None,
            Base::Hexadecimal => Some(4),
        }
    }

    pub fn is_digit(self, ch: char) -> bool {
        match self {
            Base::Binary => matches!(ch, '0' | '1'),
            Base::Octal => matches!(ch, '0'..='7'),
            Base::Decimal => ch.is_ascii_digit(),
            Base::Hexadecimal => ch.is_ascii_hexdigit(),
        }
    }

    /// Default digit-group size when a grouped literal changes base
    pub fn default_cadence(self) -> usize {
        match self {
            Base::Decimal => 3,
            _ => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Base::Binary => "Bin",
            Base::Octal => "Oct",
            Base::Decimal => "Dec",
            Base::Hexadecimal => "Hex",
        }
    }

    /// Parses a short or long base name (`hex`, `decimal`, `bin`, ...)
    pub fn from_name(name: &str) -> Option<Base> {
        const NAMES: [(&str, Base); 8] = [
            ("bin", Base::Binary),
            ("binary", Base::Binary),
            ("oct", Base::Octal),
            ("octal", Base::Octal),
            ("dec", Base::Decimal),
            ("decimal", Base::Decimal),
            ("hex", Base::Hexadecimal),
            ("hexadecimal", Base::Hexadecimal),
        ];

        NAMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, base)| *base)
    }
}

impl TryFrom<u32> for Base {
    type Error = LiteralError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        Base::from_radix(radix).ok_or(LiteralError::UnsupportedRadix(radix))
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> u32 {
        base.radix()
    }
}

/// Word size for byte-order swaps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde_support",
    derive(Serialize, Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub enum WordSize {
    Bits16,
    Bits32,
    Bits64,
}

impl WordSize {
    pub const ALL: [WordSize; 3] = [WordSize::Bits16, WordSize::Bits32, WordSize::Bits64];

    pub fn bits(self) -> u32 {
        match self {
            WordSize::Bits16 => 16,
            WordSize::Bits32 => 32,
            WordSize::Bits64 => 64,
        }
    }

    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

impl TryFrom<u32> for WordSize {
    type Error = LiteralError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            16 => Ok(WordSize::Bits16),
            32 => Ok(WordSize::Bits32),
            64 => Ok(WordSize::Bits64),
            other => Err(LiteralError::UnsupportedWordSize(other)),
        }
    }
}

impl From<WordSize> for u32 {
    fn from(word: WordSize) -> u32 {
        word.bits()
    }
}
