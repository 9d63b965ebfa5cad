//! User-facing strings in Portuguese and English.
//!
//! The core conversion layer never reads these; front-ends pick a
//! [`Dictionary`] and hand the converter its localized error token.
//! The chosen language persists as a small JSON preference file so it
//! survives restarts.

use crate::radix::Base;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// Portuguese (Brazil)
    Pt,
    /// English
    En,
}

impl Lang {
    /// The other language.
    pub const fn toggle(self) -> Self {
        match self {
            Lang::Pt => Lang::En,
            Lang::En => Lang::Pt,
        }
    }

    /// BCP 47 tag.
    pub const fn code(self) -> &'static str {
        match self {
            Lang::Pt => "pt-br",
            Lang::En => "en",
        }
    }

    /// Pick the startup language: saved preference first, then the
    /// `LANG` environment, defaulting to English.
    pub fn detect() -> Self {
        if let Some(saved) = load_pref() {
            return saved;
        }
        match std::env::var("LANG") {
            Ok(lang) if lang.to_lowercase().starts_with("pt") => Lang::Pt,
            _ => Lang::En,
        }
    }
}

/// All translatable strings for one language.
pub struct Dictionary {
    pub lang: Lang,
    pub title: &'static str,
    pub header: &'static str,
    pub intro: &'static str,
    pub help: &'static str,
    pub why_title: &'static str,
    pub why_text: &'static str,
    /// Token shown inside a field that failed to format.
    pub error: &'static str,
    labels: [&'static str; 6],
    placeholders: [&'static str; 6],
}

impl Dictionary {
    /// The dictionary for `lang`.
    pub fn get(lang: Lang) -> &'static Dictionary {
        match lang {
            Lang::Pt => &PT,
            Lang::En => &EN,
        }
    }

    /// The field label for `base`.
    pub fn label(&self, base: Base) -> &'static str {
        self.labels[base.ordinal()]
    }

    /// The field placeholder for `base`.
    pub fn placeholder(&self, base: Base) -> &'static str {
        self.placeholders[base.ordinal()]
    }
}

static PT: Dictionary = Dictionary {
    lang: Lang::Pt,
    title: "Conversor de Bases Numéricas",
    header: "Conversor de Bases",
    intro: "A ordem das bases segue o princípio de Radix Economy, da mais eficiente para a menos eficiente.",
    help: "Digite um número em qualquer campo para converter para todas as outras bases.",
    why_title: "Por que o Ternário é melhor?",
    why_text: "A base mais econômica para representar números é a constante de Euler, e (≈2.718). O sistema ternário (base 3) é o inteiro mais próximo de e, tornando-se a base mais eficiente em termos de custo e complexidade. O Ternário Balanceado é ainda mais elegante, pois representa números negativos sem a necessidade de um bit de sinal.",
    error: "Erro",
    labels: ["Ternário B.", "Binário", "Octal", "Nonário", "Decimal", "Hex"],
    placeholders: [
        "Base 3 (a mais eficiente)",
        "Base 2",
        "Base 8",
        "Base 9",
        "Base 10",
        "Base 16",
    ],
};

static EN: Dictionary = Dictionary {
    lang: Lang::En,
    title: "Number Base Converter",
    header: "Base Converter",
    intro: "The order of the bases follows the principle of Radix Economy, from the most efficient to the least efficient.",
    help: "Type a number in any field to convert it to all the other bases.",
    why_title: "Why is Ternary better?",
    why_text: "The most economical base for representing numbers is Euler's constant, e (≈2.718). The ternary system (base 3) is the integer closest to e, making it the most efficient base in terms of cost and complexity. Balanced Ternary is even more elegant because it represents negative numbers without the need for a sign bit.",
    error: "Error",
    labels: ["Balanced Ternary", "Binary", "Octal", "Nonary", "Decimal", "Hex"],
    placeholders: [
        "Base 3 (most efficient)",
        "Base 2",
        "Base 8",
        "Base 9",
        "Base 10",
        "Base 16",
    ],
};

/// On-disk shape of the language preference.
#[derive(Serialize, Deserialize)]
struct LangPref {
    lang: Lang,
}

/// Preference file location: `$RADIX_CONV_PREF` if set, else
/// `~/.radix-conv.json`.
fn pref_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("RADIX_CONV_PREF") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".radix-conv.json"))
}

/// Load the saved language preference, if any.
pub fn load_pref() -> Option<Lang> {
    let path = pref_path()?;
    let data = std::fs::read_to_string(path).ok()?;
    let pref: LangPref = serde_json::from_str(&data).ok()?;
    Some(pref.lang)
}

/// Persist the language preference. Failures are ignored: a missing
/// preference file only costs re-detection next start.
pub fn save_pref(lang: Lang) {
    if let Some(path) = pref_path() {
        if let Ok(data) = serde_json::to_string_pretty(&LangPref { lang }) {
            let _ = std::fs::write(path, data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_involution() {
        assert_eq!(Lang::Pt.toggle(), Lang::En);
        assert_eq!(Lang::En.toggle(), Lang::Pt);
        assert_eq!(Lang::Pt.toggle().toggle(), Lang::Pt);
    }

    #[test]
    fn test_dictionaries_cover_every_base() {
        for lang in [Lang::Pt, Lang::En] {
            let dict = Dictionary::get(lang);
            assert_eq!(dict.lang, lang);
            for b in Base::ALL {
                assert!(!dict.label(b).is_empty());
                assert!(!dict.placeholder(b).is_empty());
            }
        }
    }

    #[test]
    fn test_error_tokens() {
        assert_eq!(Dictionary::get(Lang::Pt).error, "Erro");
        assert_eq!(Dictionary::get(Lang::En).error, "Error");
    }

    #[test]
    fn test_pref_roundtrip_json() {
        let pref = LangPref { lang: Lang::Pt };
        let json = serde_json::to_string(&pref).unwrap();
        let back: LangPref = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lang, Lang::Pt);
    }
}
