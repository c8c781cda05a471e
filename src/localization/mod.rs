// Fluent-based localization with embedded resources. Bundles are built once
// per thread; the current language lives in a thread-local manager because
// all lookups happen on the UI thread.

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const FALLBACK_LANG: &str = "en";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum SupportedLang {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "fr")]
    Fr,
}

impl SupportedLang {
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLang::En => "en",
            SupportedLang::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(SupportedLang::En),
            "fr" => Some(SupportedLang::Fr),
            _ => None,
        }
    }

    fn ftl_source(&self) -> &'static str {
        match self {
            SupportedLang::En => include_str!("resources/en.ftl"),
            SupportedLang::Fr => include_str!("resources/fr.ftl"),
        }
    }
}

const SUPPORTED_LANGS: [SupportedLang; 2] = [SupportedLang::En, SupportedLang::Fr];

fn parse_lang(lang_code: &str) -> LanguageIdentifier {
    lang_code
        .parse::<LanguageIdentifier>()
        .unwrap_or_else(|_| FALLBACK_LANG.parse().expect("fallback langid"))
}

fn normalize_lang(mut code: String) -> SupportedLang {
    code.make_ascii_lowercase();
    let sep = code.find(['-', '_']).unwrap_or(code.len());
    SupportedLang::from_code(&code[..sep]).unwrap_or(SupportedLang::En)
}

fn detect_system_lang() -> SupportedLang {
    normalize_lang(sys_locale::get_locale().unwrap_or_default())
}

struct LocalizationManager {
    current: SupportedLang,
    bundles: HashMap<&'static str, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles: HashMap<&'static str, Bundle> = HashMap::new();
        for lang in SUPPORTED_LANGS {
            let mut bundle: Bundle = FluentBundle::new(vec![parse_lang(lang.code())]);
            // Unicode isolation marks show up as tofu in egui labels.
            bundle.set_use_isolating(false);
            let res = FluentResource::try_new(lang.ftl_source().to_string())
                .expect("failed to parse embedded FTL resource");
            bundle
                .add_resource(res)
                .expect("failed to add FTL to bundle");
            bundles.insert(lang.code(), bundle);
        }
        Self {
            current: SupportedLang::En,
            bundles,
        }
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        for code in [self.current.code(), FALLBACK_LANG] {
            if let Some(b) = self.bundles.get(code) {
                if let Some(pat) = b.get_message(id).and_then(|m| m.value()) {
                    let mut errors = vec![];
                    return b.format_pattern(pat, args, &mut errors).to_string();
                }
            }
        }
        format!("[missing: {}]", id)
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Initialize localization. `None` means auto-detect from the system locale.
pub fn initialize_localization(preferred: Option<SupportedLang>) {
    let lang = preferred.unwrap_or_else(detect_system_lang);
    LOCALIZATION.with(|cell| cell.borrow_mut().current = lang);
}

/// Explicitly set the current language from a code like "en" or "fr".
pub fn set_current_language(code: &str) -> Result<(), LocalizationError> {
    let lang = SupportedLang::from_code(code)
        .ok_or_else(|| LocalizationError::UnsupportedLanguage(code.to_string()))?;
    LOCALIZATION.with(|cell| cell.borrow_mut().current = lang);
    Ok(())
}

pub fn get_current_language() -> SupportedLang {
    LOCALIZATION.with(|cell| cell.borrow().current)
}

/// Translate a message without arguments.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, Some(&fargs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_region_variants() {
        assert_eq!(normalize_lang("fr-FR".to_string()), SupportedLang::Fr);
        assert_eq!(normalize_lang("en_US".to_string()), SupportedLang::En);
        assert_eq!(normalize_lang("de-DE".to_string()), SupportedLang::En);
    }

    #[test]
    fn falls_back_to_english_for_missing_message() {
        set_current_language("fr").unwrap();
        let s = translate("app-title");
        assert!(!s.starts_with("[missing:"));
        set_current_language("en").unwrap();
    }

    #[test]
    fn formats_arguments() {
        set_current_language("en").unwrap();
        let s = translate_with("selection-count", &[("count", "3".to_string())]);
        assert!(s.contains('3'), "got: {s}");
    }
}
