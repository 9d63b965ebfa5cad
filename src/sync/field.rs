//! A linked input field.

use crate::radix::Base;
use serde::{Deserialize, Serialize};

/// One converter field: a fixed base, the displayed text, and an error flag.
///
/// Fields are owned and mutated by the [`Converter`]; the UI layer reads
/// them after each pass and mirrors them into whatever widgets it uses.
///
/// [`Converter`]: crate::sync::Converter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    base: Base,
    text: String,
    error: bool,
}

impl Field {
    /// Create an empty, error-free field for `base`.
    pub(crate) fn new(base: Base) -> Self {
        Self {
            base,
            text: String::new(),
            error: false,
        }
    }

    /// The base this field displays. Immutable after setup.
    #[inline]
    pub fn base(&self) -> Base {
        self.base
    }

    /// The currently displayed text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the field is marked as errored.
    #[inline]
    pub fn has_error(&self) -> bool {
        self.error
    }

    pub(crate) fn set(&mut self, text: String, error: bool) {
        self.text = text;
        self.error = error;
    }

    pub(crate) fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    /// Reset to the "no value" state.
    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.error = false;
    }
}
