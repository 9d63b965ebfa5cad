//! WebAssembly bindings for the converter.
//!
//! This module provides JavaScript-friendly wrappers around the core
//! converter, keyed by the short field ids (`btr`, `bin`, `oct`, `non`,
//! `dec`, `hex`).

use wasm_bindgen::prelude::*;

use crate::i18n::{Dictionary, Lang};
use crate::radix::Base;
use crate::sync::Converter;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WebAssembly-friendly converter wrapper.
#[wasm_bindgen]
pub struct WasmConverter {
    converter: Converter,
    lang: Lang,
}

#[wasm_bindgen]
impl WasmConverter {
    /// Create a converter. `lang` is `"pt"` or `"en"`; anything else
    /// falls back to English.
    #[wasm_bindgen(constructor)]
    pub fn new(lang: &str) -> Self {
        let lang = match lang {
            "pt" => Lang::Pt,
            _ => Lang::En,
        };
        Self {
            converter: Converter::new(Dictionary::get(lang).error),
            lang,
        }
    }

    /// Handle an edit of the field `id` to `text`.
    #[wasm_bindgen]
    pub fn on_edit(&mut self, id: &str, text: &str) -> Result<(), JsError> {
        let base = Base::from_id(id).ok_or_else(|| JsError::new(&format!("unknown field: {}", id)))?;
        self.converter.on_edit(base, text);
        Ok(())
    }

    /// The displayed text of field `id` (empty for unknown ids).
    #[wasm_bindgen]
    pub fn field_text(&self, id: &str) -> String {
        match Base::from_id(id) {
            Some(base) => self.converter.field(base).text().to_string(),
            None => String::new(),
        }
    }

    /// Whether field `id` is marked as errored.
    #[wasm_bindgen]
    pub fn field_error(&self, id: &str) -> bool {
        match Base::from_id(id) {
            Some(base) => self.converter.field(base).has_error(),
            None => false,
        }
    }

    /// All field ids in display (radix economy) order.
    #[wasm_bindgen]
    pub fn field_ids(&self) -> js_sys::Array {
        Base::ALL.iter().map(|b| JsValue::from_str(b.id())).collect()
    }

    /// Switch between Portuguese and English. Returns the new BCP 47 tag.
    #[wasm_bindgen]
    pub fn toggle_language(&mut self) -> String {
        self.lang = self.lang.toggle();
        self.converter.set_error_token(Dictionary::get(self.lang).error);
        self.lang.code().to_string()
    }

    /// Current language tag.
    #[wasm_bindgen]
    pub fn lang_code(&self) -> String {
        self.lang.code().to_string()
    }

    /// Localized label for field `id`.
    #[wasm_bindgen]
    pub fn label(&self, id: &str) -> String {
        match Base::from_id(id) {
            Some(base) => Dictionary::get(self.lang).label(base).to_string(),
            None => String::new(),
        }
    }

    /// Localized placeholder for field `id`.
    #[wasm_bindgen]
    pub fn placeholder(&self, id: &str) -> String {
        match Base::from_id(id) {
            Some(base) => Dictionary::get(self.lang).placeholder(base).to_string(),
            None => String::new(),
        }
    }

    /// The localized error token fields display on formatting failure.
    #[wasm_bindgen]
    pub fn error_token(&self) -> String {
        Dictionary::get(self.lang).error.to_string()
    }
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new("en")
    }
}
