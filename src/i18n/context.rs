//! Viewer language context for interactive rendering.
//!
//! The active language is chosen once when the context is created and then
//! changes only through `set_language`, which also persists the choice so the
//! next session starts from it.

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

use crate::i18n::field::LocalizedField;
use crate::i18n::resolve::{resolve_localized, resolve_text, Truthy};
use crate::i18n::Language;

/// Storage for the viewer's explicit language choice.
pub trait PreferenceStore: Send + Sync {
    /// Previously saved language code, if any.
    fn load(&self) -> Option<String>;

    /// Persist an explicit language choice.
    fn save(&self, code: &str) -> Result<()>;
}

/// In-memory store, used by tests and one-off renders.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(code: &str) -> Self {
        Self {
            value: Mutex::new(Some(code.to_string())),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok().and_then(|guard| guard.clone())
    }

    fn save(&self, code: &str) -> Result<()> {
        let mut guard = self
            .value
            .lock()
            .map_err(|_| anyhow::anyhow!("Preference store lock poisoned"))?;
        *guard = Some(code.to_string());
        Ok(())
    }
}

/// Stores the choice as a single string in a file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|contents| contents.trim().to_string())
            .filter(|code| !code.is_empty())
    }

    fn save(&self, code: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, code)
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }
}

/// Where the context's initial language came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    Stored,
    Hint,
    Default,
}

/// Active language for one rendering session.
pub struct LanguageContext {
    language: Language,
    source: LanguageSource,
    store: Box<dyn PreferenceStore>,
}

impl LanguageContext {
    /// Create a context.
    ///
    /// Priority: a stored explicit choice naming a supported language, then
    /// the runtime hint matched by prefix, then the canonical language.
    pub fn initialize(store: Box<dyn PreferenceStore>, hint: Option<&str>) -> Self {
        let stored = store.load();
        let (language, source) = match stored.as_deref().map(Language::from_code) {
            Some(Ok(language)) => (language, LanguageSource::Stored),
            Some(Err(e)) => {
                debug!("Ignoring stored language preference: {}", e);
                from_hint(hint)
            }
            None => from_hint(hint),
        };

        debug!("Language context initialized to {} ({:?})", language, source);
        Self {
            language,
            source,
            store,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn source(&self) -> LanguageSource {
        self.source
    }

    /// Explicitly change the language and persist it.
    ///
    /// A failed write is logged; the in-session change still applies.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.source = LanguageSource::Stored;
        if let Err(e) = self.store.save(language.code()) {
            warn!("Failed to persist language preference: {:#}", e);
        }
    }

    /// Resolve a localized field in the active language.
    pub fn resolve<'a, T: Truthy>(
        &self,
        field: Option<&'a LocalizedField<T>>,
        fallback: Option<&'a T>,
    ) -> Option<&'a T> {
        resolve_localized(field, fallback, self.language.code())
    }

    /// Resolve a localized string field in the active language.
    pub fn resolve_text<'a>(
        &self,
        field: Option<&'a LocalizedField<String>>,
        fallback: Option<&'a str>,
    ) -> Option<&'a str> {
        resolve_text(field, fallback, self.language.code())
    }
}

fn from_hint(hint: Option<&str>) -> (Language, LanguageSource) {
    match hint.map(str::trim).filter(|h| !h.is_empty()) {
        Some(hint) => (Language::from_hint(hint), LanguageSource::Hint),
        None => (Language::canonical(), LanguageSource::Default),
    }
}

/// Language hint from the process environment (`LC_ALL`, `LC_MESSAGES`, `LANG`).
pub fn runtime_language_hint() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Shares state with the test so writes can be observed after the
    /// context takes ownership of its store.
    struct SharedStore(Arc<MemoryPreferenceStore>);

    impl PreferenceStore for SharedStore {
        fn load(&self) -> Option<String> {
            self.0.load()
        }

        fn save(&self, code: &str) -> Result<()> {
            self.0.save(code)
        }
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&self, _code: &str) -> Result<()> {
            anyhow::bail!("read-only")
        }
    }

    // ==================== Initialization Tests ====================

    #[test]
    fn test_stored_choice_beats_hint() {
        let store = MemoryPreferenceStore::with_value("pt_BR");
        let ctx = LanguageContext::initialize(Box::new(store), Some("en-US"));

        assert_eq!(ctx.language(), Language::PORTUGUESE);
        assert_eq!(ctx.source(), LanguageSource::Stored);
    }

    #[test]
    fn test_hint_used_without_stored_choice() {
        let ctx = LanguageContext::initialize(Box::new(MemoryPreferenceStore::new()), Some("pt-BR"));

        assert_eq!(ctx.language(), Language::PORTUGUESE);
        assert_eq!(ctx.source(), LanguageSource::Hint);
    }

    #[test]
    fn test_unmatched_hint_selects_english() {
        let ctx = LanguageContext::initialize(Box::new(MemoryPreferenceStore::new()), Some("de-DE"));
        assert_eq!(ctx.language(), Language::ENGLISH);
        assert_eq!(ctx.source(), LanguageSource::Hint);
    }

    #[test]
    fn test_default_without_stored_or_hint() {
        let ctx = LanguageContext::initialize(Box::new(MemoryPreferenceStore::new()), None);
        assert_eq!(ctx.language(), Language::ENGLISH);
        assert_eq!(ctx.source(), LanguageSource::Default);
    }

    #[test]
    fn test_invalid_stored_choice_falls_through_to_hint() {
        let store = MemoryPreferenceStore::with_value("klingon");
        let ctx = LanguageContext::initialize(Box::new(store), Some("pt"));
        assert_eq!(ctx.language(), Language::PORTUGUESE);
        assert_eq!(ctx.source(), LanguageSource::Hint);
    }

    #[test]
    fn test_hint_is_not_persisted() {
        let shared = Arc::new(MemoryPreferenceStore::new());
        let _ctx = LanguageContext::initialize(Box::new(SharedStore(shared.clone())), Some("pt"));
        assert_eq!(shared.load(), None);
    }

    // ==================== set_language Tests ====================

    #[test]
    fn test_set_language_persists() {
        let shared = Arc::new(MemoryPreferenceStore::new());
        let mut ctx = LanguageContext::initialize(Box::new(SharedStore(shared.clone())), None);

        ctx.set_language(Language::PORTUGUESE);

        assert_eq!(ctx.language(), Language::PORTUGUESE);
        assert_eq!(shared.load().as_deref(), Some("pt_BR"));
    }

    #[test]
    fn test_set_language_survives_persist_failure() {
        let mut ctx = LanguageContext::initialize(Box::new(FailingStore), None);
        ctx.set_language(Language::PORTUGUESE);
        assert_eq!(ctx.language(), Language::PORTUGUESE);
    }

    #[test]
    fn test_resolve_follows_active_language() {
        let field = LocalizedField::from_pairs([
            ("en", "Hello".to_string()),
            ("pt_BR", "Olá".to_string()),
        ]);
        let mut ctx = LanguageContext::initialize(Box::new(MemoryPreferenceStore::new()), None);
        assert_eq!(ctx.resolve_text(Some(&field), None), Some("Hello"));

        ctx.set_language(Language::PORTUGUESE);
        assert_eq!(ctx.resolve_text(Some(&field), None), Some("Olá"));
        assert_eq!(
            ctx.resolve(Some(&field), None).map(String::as_str),
            Some("Olá")
        );
    }

    // ==================== FilePreferenceStore Tests ====================

    #[test]
    fn test_file_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs").join("language"));

        assert_eq!(store.load(), None);
        store.save("pt_BR").expect("Should save");
        assert_eq!(store.load().as_deref(), Some("pt_BR"));
    }

    #[test]
    fn test_file_store_ignores_blank_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("language");
        fs::write(&path, "  \n").unwrap();

        assert_eq!(FilePreferenceStore::new(&path).load(), None);
    }

    #[test]
    fn test_file_store_next_session_reads_choice() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("language");

        let mut first = LanguageContext::initialize(Box::new(FilePreferenceStore::new(&path)), None);
        first.set_language(Language::PORTUGUESE);

        let second = LanguageContext::initialize(Box::new(FilePreferenceStore::new(&path)), Some("en"));
        assert_eq!(second.language(), Language::PORTUGUESE);
    }
}
