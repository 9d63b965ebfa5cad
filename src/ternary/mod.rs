//! Balanced ternary number system primitives.
//!
//! This module provides the core types for working with balanced ternary:
//! - [`Trit`] - A single balanced ternary digit (-1, 0, +1)
//! - [`decode`] / [`encode`] - Conversion between digit strings and integers

mod codec;
mod trit;

pub use codec::{decode, encode, DecodeError};
pub use trit::Trit;
