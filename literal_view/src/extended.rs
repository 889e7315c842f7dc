//! Extended popup fields
//!
//! Float reinterpretation of the raw bits and a human-scaled byte count.

use alloc::format;
use alloc::string::String;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

const SIZE_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// The magnitude's low 32 bits read as an IEEE-754 single
///
/// `None` when the magnitude does not fit in 32 bits.
pub fn float32_of(magnitude: &BigUint) -> Option<String> {
    let bits = magnitude.to_u32()?;
    Some(format!("{:?}", f32::from_bits(bits)))
}

/// The magnitude read as an IEEE-754 double
///
/// `None` when the magnitude does not fit in 64 bits.
pub fn float64_of(magnitude: &BigUint) -> Option<String> {
    let bits = magnitude.to_u64()?;
    Some(format!("{:?}", f64::from_bits(bits)))
}

/// Scales a byte count by 1024 until it fits a unit
///
/// Printed with `precision` decimals, then trailing zeros and a dangling
/// point are trimmed: 1536 bytes at precision 3 is `1.5 kB`.
pub fn human_size(bytes: &BigUint, precision: usize) -> String {
    let mut value = bytes.to_f64().unwrap_or(f64::INFINITY);
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < SIZE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }

    let mut number = format!("{:.*}", precision, value);
    // 1023.999 kB rounds up to the next unit
    let rounded_up = number.parse::<f64>().is_ok_and(|rounded| rounded >= 1024.0);
    if rounded_up && unit + 1 < SIZE_UNITS.len() {
        value /= 1024.0;
        unit += 1;
        number = format!("{:.*}", precision, value);
    }
    if number.contains('.') {
        let trimmed = number.trim_end_matches('0').trim_end_matches('.').len();
        number.truncate(trimmed);
    }
    format!("{} {}", number, SIZE_UNITS[unit])
}
