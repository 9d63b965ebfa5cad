//! Conversion between integers and balanced ternary digit strings.
//!
//! Balanced ternary weighs each position by a power of 3 but draws its
//! digits from {-1, 0, +1}, so a digit string encodes negative values
//! without a separate sign marker.
//!
//! [`decode`] accepts strings of any length and accumulates into an
//! arbitrary-precision integer. [`encode`] generates digits from a
//! machine-width operand; values outside the i64 range cannot be encoded
//! and callers narrowing from a big integer must treat a failed narrowing
//! as an overflow (see `radix::format`).

use crate::ternary::Trit;
use num_bigint::BigInt;
use num_traits::Zero;
use thiserror::Error;

/// Errors that can occur when decoding a balanced ternary string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input string was empty.
    #[error("empty balanced ternary string")]
    Empty,

    /// An invalid character was encountered.
    #[error("invalid trit character: '{0}' (expected -, 0, +)")]
    InvalidChar(char),
}

/// Decode a balanced ternary string into an integer.
///
/// Characters are processed from least significant (rightmost) to most
/// significant, accumulating `value += trit * 3^position` over an
/// arbitrary-precision integer, so inputs of any length decode exactly.
pub fn decode(text: &str) -> Result<BigInt, DecodeError> {
    if text.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut value = BigInt::zero();
    let mut power = BigInt::from(1u32);

    for c in text.chars().rev() {
        match Trit::from_symbol(c).ok_or(DecodeError::InvalidChar(c))? {
            Trit::P => value += &power,
            Trit::N => value -= &power,
            Trit::O => {}
        }
        power *= 3u32;
    }

    Ok(value)
}

/// Encode an integer as a balanced ternary string.
///
/// Generates digits least significant first: each step takes the
/// remainder `((n + 1) mod 3) - 1` (Euclidean modulo, so the result is
/// in {-1, 0, 1} for negative n too), emits its symbol, and continues
/// with `(n - remainder) / 3`, which is exact. |n| strictly decreases,
/// so the loop terminates.
pub fn encode(n: i64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    // Widened so `n - digit` cannot overflow at the extremes of i64.
    let mut n = n as i128;
    let mut digits = Vec::new();

    while n != 0 {
        let digit = match n.rem_euclid(3) {
            0 => 0i128,
            1 => 1,
            _ => -1,
        };
        digits.push(Trit::from_i8(digit as i8).to_symbol());
        n = (n - digit) / 3;
    }

    digits.iter().rev().collect()
}
