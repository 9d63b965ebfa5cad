//! Base conversion layer.
//!
//! This module provides the conversion pipeline between digit strings
//! and the canonical arbitrary-precision integer:
//! - [`Base`] - The fixed set of supported numeral bases
//! - [`is_valid`] - Alphabet membership check
//! - [`parse`] - Digit string to canonical integer
//! - [`format`] - Canonical integer to digit string

mod base;
mod format;
mod parse;
mod validate;

pub use base::Base;
pub use format::{format, format_generic, FormatError};
pub use parse::{parse, parse_generic, ParseError};
pub use validate::is_valid;
