//! # Radix Converter
//!
//! A multi-base number converter built around balanced ternary.
//!
//! Numbers convert among balanced ternary, binary, octal, nonary,
//! decimal, and hexadecimal through a single arbitrary-precision
//! canonical value. A set of linked fields — one per base, ordered by
//! radix economy — stays synchronized through a coordinator that runs
//! one conversion pass at a time.

pub mod i18n;
pub mod radix;
pub mod sync;
pub mod ternary;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
pub use radix::{format, is_valid, parse, Base, FormatError, ParseError};
pub use sync::{Converter, Field};
pub use ternary::{decode, encode, Trit};

#[cfg(feature = "tui")]
pub use tui::run_converter;
