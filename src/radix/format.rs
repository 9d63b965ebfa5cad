//! Formatting arbitrary-precision integers back into digit strings.
//!
//! Binary, octal, decimal, and hexadecimal delegate to the platform's
//! radix conversion; nonary runs the symmetric repeated-division
//! algorithm; balanced ternary goes through the codec, which encodes
//! from a machine-width operand and therefore has a precision ceiling.

use crate::radix::Base;
use crate::ternary;
use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};
use thiserror::Error;

/// Errors that can occur when rendering a value in a target base.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The value cannot be represented exactly by this base's encoder.
    ///
    /// Only balanced ternary can currently fail this way: its encode
    /// path works on an i64, so values beyond that range are refused
    /// rather than silently truncated.
    #[error("value exceeds the {0} encoding range")]
    Overflow(Base),
}

/// Render `value` as a digit string in `base`.
///
/// Zero formats as `"0"` in every base. Negative values in the
/// positional bases render with a leading `-`, as the platform
/// conversion does; balanced ternary needs no sign marker.
pub fn format(value: &BigInt, base: Base) -> Result<String, FormatError> {
    match base {
        Base::BalancedTernary => {
            let n = value.to_i64().ok_or(FormatError::Overflow(base))?;
            Ok(ternary::encode(n))
        }
        Base::Nonary => Ok(format_generic(value, base)),
        Base::Binary | Base::Octal | Base::Decimal | Base::Hexadecimal => {
            Ok(value.to_str_radix(base.radix()))
        }
    }
}

/// Digit-by-digit division for positional bases.
///
/// Repeatedly divides the magnitude by the radix, collecting remainders
/// least significant first, then reverses. Mirrors [`parse_generic`]
/// and agrees with `to_str_radix` wherever both apply — a tested
/// property. Not applicable to balanced ternary.
///
/// [`parse_generic`]: crate::radix::parse_generic
pub fn format_generic(value: &BigInt, base: Base) -> String {
    debug_assert!(base != Base::BalancedTernary);

    if value.is_zero() {
        return "0".to_string();
    }

    let radix = BigUint::from(base.radix());
    let mut mag = value.magnitude().clone();
    let mut digits: Vec<char> = Vec::new();

    while !mag.is_zero() {
        let digit = (&mag % &radix)
            .to_u32()
            .and_then(|d| char::from_digit(d, base.radix()));
        match digit {
            Some(c) => digits.push(c),
            None => unreachable!("remainder is always below the radix"),
        }
        mag /= &radix;
    }

    if value.is_negative() {
        digits.push('-');
    }

    digits.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_42_in_every_base() {
        let n = BigInt::from(42);
        assert_eq!(format(&n, Base::BalancedTernary).unwrap(), "+---0");
        assert_eq!(format(&n, Base::Binary).unwrap(), "101010");
        assert_eq!(format(&n, Base::Octal).unwrap(), "52");
        assert_eq!(format(&n, Base::Nonary).unwrap(), "46");
        assert_eq!(format(&n, Base::Decimal).unwrap(), "42");
        assert_eq!(format(&n, Base::Hexadecimal).unwrap(), "2a");
    }

    #[test]
    fn test_zero_is_single_digit_everywhere() {
        let zero = BigInt::from(0);
        for b in Base::ALL {
            assert_eq!(format(&zero, b).unwrap(), "0", "zero in {}", b);
        }
    }

    #[test]
    fn test_negative_values() {
        let n = BigInt::from(-42);
        assert_eq!(format(&n, Base::BalancedTernary).unwrap(), "-+++0");
        assert_eq!(format(&n, Base::Decimal).unwrap(), "-42");
        // The platform conversion signs every positional base.
        assert_eq!(format(&n, Base::Binary).unwrap(), "-101010");
        assert_eq!(format(&n, Base::Nonary).unwrap(), "-46");
    }

    #[test]
    fn test_hex_is_lowercase() {
        assert_eq!(format(&BigInt::from(0xdeadbeefu32), Base::Hexadecimal).unwrap(), "deadbeef");
    }

    #[test]
    fn test_generic_agrees_with_native() {
        for n in [0i64, 1, -1, 8, 9, 42, -42, 80, 81, 6561, 1_000_000, -987_654_321] {
            let v = BigInt::from(n);
            for b in [Base::Binary, Base::Octal, Base::Nonary, Base::Decimal, Base::Hexadecimal] {
                assert_eq!(
                    format_generic(&v, b),
                    v.to_str_radix(b.radix()),
                    "generic and native disagree on {} in {}",
                    n,
                    b
                );
            }
        }
    }

    #[test]
    fn test_balanced_ternary_overflow() {
        let too_big = BigInt::from(i64::MAX) + 1;
        assert_eq!(
            format(&too_big, Base::BalancedTernary),
            Err(FormatError::Overflow(Base::BalancedTernary))
        );
        let too_small = BigInt::from(i64::MIN) - 1;
        assert_eq!(
            format(&too_small, Base::BalancedTernary),
            Err(FormatError::Overflow(Base::BalancedTernary))
        );
        // The same value still formats fine positionally.
        assert!(format(&too_big, Base::Hexadecimal).is_ok());
    }

    #[test]
    fn test_balanced_ternary_ceiling_is_inclusive() {
        for n in [i64::MIN, i64::MAX] {
            assert!(format(&BigInt::from(n), Base::BalancedTernary).is_ok());
        }
    }
}
