//! Bit and byte transforms
//!
//! Each transform returns a new literal; suffix, style and grouping carry
//! over from the original.

use alloc::vec;
use num_bigint::BigUint;
use num_traits::One;

use crate::base::{Base, WordSize};
use crate::literal::{natural_digits, Grouping, NumericLiteral};

impl NumericLiteral {
    /// Flips the bit at `offset` (0 = least significant)
    ///
    /// The digit width of the original literal is kept, so `0x00ff` stays a
    /// four digit literal.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is not below `bit_width(min_bits)`. Offsets come
    /// from the literal's own display word, so anything else is a bug in the
    /// caller.
    pub fn toggle_bit(&self, offset: u64, min_bits: u64) -> NumericLiteral {
        let bit_width = self.bit_width(min_bits);
        assert!(
            offset < bit_width,
            "bit offset {} outside display width {}",
            offset,
            bit_width
        );
        self.flip(offset)
    }

    /// Like [`toggle_bit`](Self::toggle_bit), `None` for an out-of-range offset
    pub fn checked_toggle_bit(&self, offset: u64, min_bits: u64) -> Option<NumericLiteral> {
        if offset < self.bit_width(min_bits) {
            Some(self.flip(offset))
        } else {
            None
        }
    }

    fn flip(&self, offset: u64) -> NumericLiteral {
        let mask = BigUint::one() << offset;
        self.with_magnitude(self.magnitude() ^ &mask)
    }

    /// Reverses byte order inside each `word` of the magnitude
    ///
    /// The magnitude is padded on the left to a whole number of words, each
    /// word is byte-swapped in place and the words keep their order. The
    /// result is written at its natural width.
    pub fn swap_endianness(&self, word: WordSize) -> NumericLiteral {
        let word_bits = u64::from(word.bits());
        let aligned_bits = self.bit_length().div_ceil(word_bits).max(1) * word_bits;
        let byte_len = (aligned_bits / 8) as usize;

        // never longer than byte_len, even for zero which encodes as [0]
        let be = self.magnitude().to_bytes_be();
        let mut bytes = vec![0u8; byte_len];
        bytes[byte_len - be.len()..].copy_from_slice(&be);

        for chunk in bytes.chunks_exact_mut(word.bytes()) {
            chunk.reverse();
        }

        let magnitude = BigUint::from_bytes_be(&bytes);
        let digit_length = natural_digits(&magnitude, self.base());
        self.with_magnitude(magnitude)
            .with_digit_length(digit_length)
    }

    /// Same value written in `base`
    ///
    /// Between binary, octal and hex the field width in bits is kept
    /// (`0x00ff` becomes `0b0000000011111111`). Grouping restarts at the
    /// new base's default cadence.
    pub fn convert_base(&self, base: Base) -> NumericLiteral {
        if base == self.base() {
            return self.clone();
        }

        let natural = natural_digits(self.magnitude(), base);
        let digit_length = match (self.field_bits(), base.bits_per_digit()) {
            (Some(field_bits), Some(bits_per_digit)) => {
                natural.max(field_bits.div_ceil(bits_per_digit) as usize)
            }
            _ => natural,
        };

        let grouping = self
            .grouping()
            .map(|_| Grouping::with_cadence(base.default_cadence()));

        NumericLiteral::new(self.magnitude().clone(), base)
            .with_suffix(self.suffix())
            .with_digit_length(digit_length)
            .with_grouping(grouping)
            .with_style(self.style().clone())
    }
}
