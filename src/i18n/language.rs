//! Language type: validated representation of a supported site language.
//!
//! Content lookups themselves take plain `&str` language keys, since stored
//! documents may carry any tag. `Language` is what a viewer or a request can
//! actually select, so it is always backed by a registry entry.

use crate::i18n::{LanguageConfig, LanguageRegistry, LanguageStrings};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Errors produced when parsing a language code.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'")]
    Unknown(String),

    #[error("Language '{0}' is not enabled")]
    Disabled(String),
}

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Content language tag (e.g., "en", "pt_BR")
    code: &'static str,
}

impl Language {
    /// English, the base language of every fallback chain.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Brazilian Portuguese.
    pub const PORTUGUESE: Language = Language { code: "pt_BR" };

    /// Create a Language from an exact language code.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is registered and enabled
    /// * `Err(LanguageError)` otherwise
    pub fn from_code(code: &str) -> Result<Language, LanguageError> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => Err(LanguageError::Disabled(code.to_string())),
            None => Err(LanguageError::Unknown(code.to_string())),
        }
    }

    /// Derive a Language from a loose hint such as `pt-BR` or `en_US.UTF-8`.
    ///
    /// Matching is by prefix (`"pt"` selects `pt_BR`); anything unmatched
    /// selects the canonical language.
    pub fn from_hint(hint: &str) -> Language {
        LanguageRegistry::get()
            .match_hint(hint)
            .map(|config| Language { code: config.code })
            .unwrap_or_else(Language::canonical)
    }

    /// Get the canonical (base) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the language code (e.g., "en", "pt_BR").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This cannot
    /// happen for values built through `from_code`, `from_hint` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Static UI strings for this language.
    pub fn strings(&self) -> &'static LanguageStrings {
        self.config().strings
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::canonical()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
