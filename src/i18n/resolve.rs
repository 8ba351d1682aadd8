//! Localized value resolution.
//!
//! Every lookup walks the same chain: requested language, then English, then
//! (array shapes only) the first entry, then the caller's fallback. A value is
//! accepted only if it is truthy, so an empty translation falls through to the
//! next tier. Nothing here fails; unusable input yields the fallback.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::i18n::field::{I18nEntry, LocalizedField};

/// Base language consulted after the requested one.
pub const BASE_LANGUAGE: &str = "en";

/// Values that can be accepted or skipped by the fallback chain.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for i64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for u64 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f.is_truthy()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

/// Resolve a localized field for `lang_key`.
///
/// # Arguments
/// * `field` - The localized field, `None` when the document omits it
/// * `fallback` - Returned when no tier yields a truthy value
/// * `lang_key` - Requested language tag, treated as opaque
///
/// # Returns
/// The best matching value, or `fallback` (which may itself be `None`).
pub fn resolve_localized<'a, T: Truthy>(
    field: Option<&'a LocalizedField<T>>,
    fallback: Option<&'a T>,
    lang_key: &str,
) -> Option<&'a T> {
    let Some(field) = field else {
        return fallback;
    };

    let resolved = match field {
        LocalizedField::Array(entries) | LocalizedField::Wrapped { entries, .. } => {
            resolve_entries(entries, lang_key)
        }
        LocalizedField::Record(map) => resolve_record(map, lang_key),
        LocalizedField::Unrecognized => None,
    };

    resolved.or(fallback)
}

/// Server-side resolution: the language was negotiated once per request and
/// is passed explicitly.
pub fn resolve_server<'a, T: Truthy>(
    field: Option<&'a LocalizedField<T>>,
    fallback: Option<&'a T>,
    lang_key: &str,
) -> Option<&'a T> {
    resolve_localized(field, fallback, lang_key)
}

/// String specialization that accepts a borrowed `&str` fallback.
pub fn resolve_text<'a>(
    field: Option<&'a LocalizedField<String>>,
    fallback: Option<&'a str>,
    lang_key: &str,
) -> Option<&'a str> {
    resolve_localized(field, None, lang_key)
        .map(String::as_str)
        .or(fallback)
}

fn resolve_entries<'a, T: Truthy>(entries: &'a [I18nEntry<T>], lang_key: &str) -> Option<&'a T> {
    // First entry for a language wins even when later duplicates exist
    let for_language = |lang: &str| {
        entries
            .iter()
            .find(|entry| entry.language_tag() == Some(lang))
            .and_then(|entry| truthy(entry.value.as_ref()))
    };

    for_language(lang_key)
        .or_else(|| for_language(BASE_LANGUAGE))
        .or_else(|| entries.first().and_then(|entry| truthy(entry.value.as_ref())))
}

fn resolve_record<'a, T: Truthy>(
    map: &'a BTreeMap<String, Option<T>>,
    lang_key: &str,
) -> Option<&'a T> {
    let for_language = |lang: &str| map.get(lang).and_then(|value| truthy(value.as_ref()));

    for_language(lang_key).or_else(|| for_language(BASE_LANGUAGE))
}

fn truthy<T: Truthy>(value: Option<&T>) -> Option<&T> {
    value.filter(|v| v.is_truthy())
}
