//! Language registry: Single source of truth for all supported languages.
//!
//! The site is edited in English and Brazilian Portuguese. Content documents
//! may carry translations for other language tags too; the resolver handles
//! those as opaque keys, but only registered languages can be selected by a
//! viewer or negotiated from a request.

use crate::i18n::strings::{LanguageStrings, ENGLISH_STRINGS, PORTUGUESE_STRINGS};
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Content language tag as stored in the CMS (e.g., "en", "pt_BR")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Portuguese (Brazil)")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Português")
    pub native_name: &'static str,

    /// Lowercase prefix matched against browser hints and `Accept-Language`
    /// ranges (e.g., "pt" matches "pt", "pt-BR", "pt-PT")
    pub hint_prefix: &'static str,

    /// Whether this is the base language every lookup falls back to
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// Static UI strings used when content carries no usable value
    pub strings: &'static LanguageStrings,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Match a free-form language hint by prefix.
    ///
    /// Hints come from the runtime environment (`pt-BR`, `pt_BR.UTF-8`) or from
    /// the first range of an `Accept-Language` header. Non-canonical languages
    /// are checked first so that the canonical language acts as the catch-all.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` for the first enabled language whose prefix
    ///   matches the lowercased hint
    /// * `None` if nothing matches
    pub fn match_hint(&self, hint: &str) -> Option<&LanguageConfig> {
        let hint = hint.trim().to_ascii_lowercase();
        if hint.is_empty() {
            return None;
        }

        self.languages
            .iter()
            .filter(|lang| lang.enabled && !lang.is_canonical)
            .chain(self.languages.iter().filter(|lang| lang.is_canonical))
            .find(|lang| hint.starts_with(lang.hint_prefix))
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// Default language configurations: English (canonical) and Brazilian Portuguese.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            hint_prefix: "en",
            is_canonical: true,
            enabled: true,
            strings: &ENGLISH_STRINGS,
        },
        LanguageConfig {
            code: "pt_BR",
            name: "Portuguese (Brazil)",
            native_name: "Português",
            hint_prefix: "pt",
            is_canonical: false,
            enabled: true,
            strings: &PORTUGUESE_STRINGS,
        },
    ]
}
