//! Internationalization (i18n) module.
//!
//! Content fields arrive in several translated shapes; everything in this
//! module exists to turn such a field plus a language into one plain string.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and their static strings
//! - `language`: Validated `Language` type
//! - `strings`: Static UI strings, the last fallback tier
//! - `field`: Localized field shapes and their classification
//! - `resolve`: The fallback chain (requested → `en` → first entry → fallback)
//! - `negotiate`: `Accept-Language` handling for the server path
//! - `context`: Viewer language state with persisted explicit choices
//! - `validator`: Translation coverage checks over raw documents
//!
//! # Example
//!
//! ```rust,ignore
//! use site_sections::i18n::{resolve_server, negotiate, LocalizedField};
//!
//! let language = negotiate::from_accept_language(Some("pt-BR,pt;q=0.9"));
//! let title: LocalizedField<String> = serde_json::from_value(raw_title)?;
//! let resolved = resolve_server(Some(&title), None, language.code());
//! ```

mod context;
mod field;
mod language;
pub mod negotiate;
mod registry;
mod resolve;
mod strings;
mod validator;

pub use context::{
    runtime_language_hint, FilePreferenceStore, LanguageContext, LanguageSource,
    MemoryPreferenceStore, PreferenceStore,
};
pub use field::{I18nEntry, LocalizedField, Text, WRAPPED_TYPE_PREFIX};
pub use language::{Language, LanguageError};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolve::{resolve_localized, resolve_server, resolve_text, Truthy, BASE_LANGUAGE};
pub use strings::{LanguageStrings, ENGLISH_STRINGS, PORTUGUESE_STRINGS};
pub use validator::{CoverageSummary, TranslationValidator, ValidationReport};
