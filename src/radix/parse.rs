//! Parsing digit strings into arbitrary-precision integers.
//!
//! Bases the platform big-integer type can construct directly (binary,
//! octal, decimal, hexadecimal) go through [`BigInt::parse_bytes`]; the
//! rest accumulate digit by digit. Balanced ternary has its own codec.
//!
//! The parser is safe standalone: it re-checks every character even
//! though the validator normally runs first.

use crate::radix::Base;
use crate::ternary::{self, DecodeError};
use num_bigint::BigInt;
use num_traits::Zero;
use thiserror::Error;

/// Errors that can occur when parsing a digit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string was empty.
    #[error("empty input")]
    Empty,

    /// A character has no digit value in the declared base.
    #[error("invalid digit '{ch}' for {base}")]
    InvalidDigit { ch: char, base: Base },

    /// The platform construction refused an alphabet-clean string.
    #[error("malformed {0} literal")]
    Malformed(Base),
}

/// Parse `text` as a number in `base`.
///
/// Decimal accepts an optional leading minus sign; every other base is
/// an unsigned magnitude, except balanced ternary where sign lives in
/// the digits themselves.
pub fn parse(text: &str, base: Base) -> Result<BigInt, ParseError> {
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    match base {
        Base::BalancedTernary => ternary::decode(text).map_err(|e| match e {
            DecodeError::Empty => ParseError::Empty,
            DecodeError::InvalidChar(c) => ParseError::InvalidDigit { ch: c, base },
        }),
        Base::Nonary => parse_generic(text, base),
        Base::Binary | Base::Octal | Base::Decimal | Base::Hexadecimal => {
            parse_native(text, base)
        }
    }
}

/// Delegate to the platform's arbitrary-precision construction.
fn parse_native(text: &str, base: Base) -> Result<BigInt, ParseError> {
    let digits = match text.strip_prefix('-') {
        Some(rest) if base.allows_sign() => rest,
        Some(_) => {
            return Err(ParseError::InvalidDigit { ch: '-', base });
        }
        None => text,
    };

    if digits.is_empty() {
        // A lone sign carries no digits.
        return Err(ParseError::Malformed(base));
    }

    // parse_bytes is laxer than our alphabets (it accepts interior signs
    // for instance), so membership is checked first.
    if let Some(bad) = digits.chars().find(|&c| !base.is_digit(c)) {
        return Err(ParseError::InvalidDigit { ch: bad, base });
    }

    BigInt::parse_bytes(text.as_bytes(), base.radix()).ok_or(ParseError::Malformed(base))
}

/// Digit-by-digit accumulation for positional bases.
///
/// Processes digits most significant first: `acc = acc * radix + digit`.
/// This is the only parsing path for nonary, and for the natively parsed
/// bases it produces numerically identical results — a tested property.
/// Not applicable to balanced ternary, whose digits are signed.
pub fn parse_generic(text: &str, base: Base) -> Result<BigInt, ParseError> {
    debug_assert!(base != Base::BalancedTernary);

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) if base.allows_sign() => (true, rest),
        _ => (false, text),
    };

    if digits.is_empty() {
        return Err(if text.is_empty() {
            ParseError::Empty
        } else {
            ParseError::Malformed(base)
        });
    }

    let mut acc = BigInt::zero();
    for c in digits.chars() {
        let digit = c
            .to_digit(base.radix())
            .ok_or(ParseError::InvalidDigit { ch: c, base })?;
        acc = acc * base.radix() + digit;
    }

    Ok(if negative { -acc } else { acc })
}
