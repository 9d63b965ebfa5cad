//! Well-formedness check for candidate digit strings.
//!
//! Validation is a pure membership test against the base's digit
//! alphabet. It interprets nothing numerically and therefore cannot
//! overflow, whatever the input length.

use crate::radix::Base;

/// Check that `text` is well-formed for `base`.
///
/// The empty string is valid for every base (it means "no value yet").
/// Decimal additionally permits a single leading minus sign; all other
/// bases reject sign characters — in balanced ternary `-` is a digit,
/// not a sign. The first invalid character rejects the whole string.
pub fn is_valid(text: &str, base: Base) -> bool {
    let digits = if base.allows_sign() {
        text.strip_prefix('-').unwrap_or(text)
    } else {
        text
    };

    digits.chars().all(|c| base.is_digit(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_valid_everywhere() {
        for b in Base::ALL {
            assert!(is_valid("", b), "empty string should be valid for {}", b);
        }
    }

    #[test]
    fn test_alphabet_membership() {
        assert!(is_valid("10110", Base::Binary));
        assert!(is_valid("755", Base::Octal));
        assert!(is_valid("886", Base::Nonary));
        assert!(is_valid("42", Base::Decimal));
        assert!(is_valid("deadBEEF", Base::Hexadecimal));
        assert!(is_valid("+-0+", Base::BalancedTernary));
    }

    #[test]
    fn test_first_invalid_char_rejects() {
        assert!(!is_valid("9", Base::Octal));
        assert!(!is_valid("12a", Base::Octal));
        assert!(!is_valid("2", Base::Binary));
        assert!(!is_valid("9", Base::Nonary));
        assert!(!is_valid("4 2", Base::Decimal));
        assert!(!is_valid("xyz", Base::Hexadecimal));
        assert!(!is_valid("+-2", Base::BalancedTernary));
    }

    #[test]
    fn test_sign_only_permitted_in_decimal() {
        assert!(is_valid("-5", Base::Decimal));
        assert!(is_valid("-", Base::Decimal));
        assert!(!is_valid("-5", Base::Binary));
        assert!(!is_valid("-7", Base::Octal));
        assert!(!is_valid("-8", Base::Nonary));
        assert!(!is_valid("-f", Base::Hexadecimal));
        // In balanced ternary a lone `-` is the digit -1, which is valid.
        assert!(is_valid("-", Base::BalancedTernary));
    }

    #[test]
    fn test_single_minus_only() {
        assert!(!is_valid("--5", Base::Decimal));
        assert!(!is_valid("5-", Base::Decimal));
    }
}
