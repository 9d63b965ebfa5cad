//! The fixed set of supported numeral bases.
//!
//! The order of [`Base::ALL`] follows radix economy: base 3 sits closest
//! to Euler's number e and is listed first, then binary, octal, nonary,
//! decimal, and hexadecimal.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeral base the converter understands.
///
/// Each input field is assigned exactly one of these at setup and keeps
/// it for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Base {
    /// Base 3 with digits {-1, 0, +1}, written `-`, `0`, `+`
    BalancedTernary,
    /// Base 2
    Binary,
    /// Base 8
    Octal,
    /// Base 9
    Nonary,
    /// Base 10
    Decimal,
    /// Base 16
    Hexadecimal,
}

impl Base {
    /// All supported bases, ordered by radix economy (most efficient first).
    pub const ALL: [Base; 6] = [
        Base::BalancedTernary,
        Base::Binary,
        Base::Octal,
        Base::Nonary,
        Base::Decimal,
        Base::Hexadecimal,
    ];

    /// Position of this base in [`Base::ALL`] (display order).
    #[inline]
    pub const fn ordinal(self) -> usize {
        match self {
            Base::BalancedTernary => 0,
            Base::Binary => 1,
            Base::Octal => 2,
            Base::Nonary => 3,
            Base::Decimal => 4,
            Base::Hexadecimal => 5,
        }
    }

    /// The numeric radix.
    #[inline]
    pub const fn radix(self) -> u32 {
        match self {
            Base::BalancedTernary => 3,
            Base::Binary => 2,
            Base::Octal => 8,
            Base::Nonary => 9,
            Base::Decimal => 10,
            Base::Hexadecimal => 16,
        }
    }

    /// Short identifier, stable across the UI surfaces.
    pub const fn id(self) -> &'static str {
        match self {
            Base::BalancedTernary => "btr",
            Base::Binary => "bin",
            Base::Octal => "oct",
            Base::Nonary => "non",
            Base::Decimal => "dec",
            Base::Hexadecimal => "hex",
        }
    }

    /// Look up a base by its short identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Base::ALL.iter().copied().find(|b| b.id() == id)
    }

    /// Whether a leading minus sign is accepted on input.
    ///
    /// Only decimal carries an explicit sign; balanced ternary encodes
    /// sign in its digits and the remaining bases are unsigned magnitudes.
    #[inline]
    pub const fn allows_sign(self) -> bool {
        matches!(self, Base::Decimal)
    }

    /// Human-readable description of the digit alphabet.
    pub const fn symbols(self) -> &'static str {
        match self {
            Base::BalancedTernary => "-, 0, +",
            Base::Binary => "0, 1",
            Base::Octal => "0-7",
            Base::Nonary => "0-8",
            Base::Decimal => "0-9",
            Base::Hexadecimal => "0-9, a-f",
        }
    }

    /// Whether the given character is a digit of this base's alphabet.
    ///
    /// Hexadecimal accepts both letter cases; no base accepts a sign
    /// character here (the validator layers that on for decimal).
    #[inline]
    pub fn is_digit(self, c: char) -> bool {
        match self {
            Base::BalancedTernary => matches!(c, '-' | '0' | '+'),
            _ => c.to_digit(self.radix()).is_some(),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Base::BalancedTernary => "balanced ternary",
            Base::Binary => "binary",
            Base::Octal => "octal",
            Base::Nonary => "nonary",
            Base::Decimal => "decimal",
            Base::Hexadecimal => "hexadecimal",
        };
        write!(f, "{}", name)
    }
}
