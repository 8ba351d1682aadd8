//! Localized field shapes.
//!
//! CMS documents store translatable fields in three physical shapes:
//!
//! - an array of `{ _key, language, value }` entries,
//! - a record keyed directly by language tag,
//! - a wrapper object `{ _type: "internationalizedArray…", value: [...] }`
//!   around the array shape.
//!
//! `LocalizedField::classify` turns any JSON value into exactly one of these
//! (or `Unrecognized`), so the resolver only ever matches over a closed set.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::i18n::resolve::resolve_text;

/// `_type` prefix used by the internationalized-array plugin wrapper.
pub const WRAPPED_TYPE_PREFIX: &str = "internationalizedArray";

/// One translation inside an array-shaped field.
#[derive(Debug, Clone, PartialEq)]
pub struct I18nEntry<T> {
    /// Array item key. Older documents store the language tag here.
    pub key: Option<String>,
    /// Language tag (e.g., "en", "pt_BR")
    pub language: Option<String>,
    /// Translated value; `None` when missing or not decodable as `T`
    pub value: Option<T>,
}

impl<T> I18nEntry<T> {
    /// Create an entry for `language` holding `value`.
    pub fn new(language: impl Into<String>, value: T) -> Self {
        Self {
            key: None,
            language: Some(language.into()),
            value: Some(value),
        }
    }

    /// Create a legacy entry that carries its language in `_key` only.
    pub fn legacy(key: impl Into<String>, value: T) -> Self {
        Self {
            key: Some(key.into()),
            language: None,
            value: Some(value),
        }
    }

    /// Language this entry answers for.
    ///
    /// `language` wins; `_key` is consulted only when `language` is absent.
    pub fn language_tag(&self) -> Option<&str> {
        self.language.as_deref().or(self.key.as_deref())
    }
}

impl<T: DeserializeOwned> I18nEntry<T> {
    fn from_value(item: &Value) -> Self {
        let Some(obj) = item.as_object() else {
            return Self {
                key: None,
                language: None,
                value: None,
            };
        };

        Self {
            key: string_field(obj, "_key"),
            language: string_field(obj, "language"),
            value: obj.get("value").and_then(decode::<T>),
        }
    }
}

/// A translatable content field in one of its physical shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalizedField<T> {
    /// Sequence of per-language entries; order is not meaningful
    Array(Vec<I18nEntry<T>>),
    /// Language tag mapped directly to a value
    Record(BTreeMap<String, Option<T>>),
    /// Plugin wrapper around the array shape
    Wrapped {
        type_name: String,
        entries: Vec<I18nEntry<T>>,
    },
    /// Anything else (numbers, booleans, bare strings in a localized slot)
    Unrecognized,
}

impl<T: DeserializeOwned> LocalizedField<T> {
    /// Classify a raw JSON value.
    ///
    /// # Returns
    /// * `None` for JSON `null` (the field is absent)
    /// * `Some(shape)` for every other value, `Unrecognized` included
    pub fn classify(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Array(items) => Some(Self::Array(
                items.iter().map(I18nEntry::from_value).collect(),
            )),
            Value::Object(obj) => Some(Self::classify_object(obj)),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Some(Self::Unrecognized),
        }
    }

    fn classify_object(obj: &Map<String, Value>) -> Self {
        let wrapper_type = obj
            .get("_type")
            .and_then(Value::as_str)
            .filter(|t| t.starts_with(WRAPPED_TYPE_PREFIX));

        if let (Some(type_name), Some(Value::Array(items))) = (wrapper_type, obj.get("value")) {
            return Self::Wrapped {
                type_name: type_name.to_string(),
                entries: items.iter().map(I18nEntry::from_value).collect(),
            };
        }

        // Underscore keys are document metadata (`_type`, `_key`), never languages
        Self::Record(
            obj.iter()
                .filter(|(key, _)| !key.starts_with('_'))
                .map(|(key, value)| (key.clone(), decode::<T>(value)))
                .collect(),
        )
    }
}

impl<T> LocalizedField<T> {
    /// Build an array-shaped field from `(language, value)` pairs.
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, T)>) -> Self {
        Self::Array(
            pairs
                .into_iter()
                .map(|(language, value)| I18nEntry::new(language, value))
                .collect(),
        )
    }

    /// Entries of the array and wrapped shapes.
    pub fn entries(&self) -> Option<&[I18nEntry<T>]> {
        match self {
            Self::Array(entries) | Self::Wrapped { entries, .. } => Some(entries),
            Self::Record(_) | Self::Unrecognized => None,
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for LocalizedField<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::classify(&value).unwrap_or(Self::Unrecognized))
    }
}

/// A text slot that editors fill either with a plain string or a localized
/// field.
///
/// Plain strings pass through unchanged for every language.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Text {
    #[default]
    Empty,
    Plain(String),
    Localized(LocalizedField<String>),
}

impl Text {
    /// Build a text slot from a raw JSON value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(s) => Self::Plain(s.clone()),
            other => LocalizedField::classify(other)
                .map(Self::Localized)
                .unwrap_or(Self::Empty),
        }
    }

    /// Resolve the slot for `lang_key`, returning `None` if nothing usable.
    pub fn resolve<'a>(&'a self, lang_key: &str) -> Option<&'a str> {
        self.resolve_or(None, lang_key)
    }

    /// Resolve the slot for `lang_key`, falling back to `fallback`.
    ///
    /// An empty plain string counts as absent.
    pub fn resolve_or<'a>(&'a self, fallback: Option<&'a str>, lang_key: &str) -> Option<&'a str> {
        match self {
            Self::Empty => fallback,
            Self::Plain(s) if s.is_empty() => fallback,
            Self::Plain(s) => Some(s.as_str()),
            Self::Localized(field) => resolve_text(Some(field), fallback, lang_key),
        }
    }

    /// Resolve to an owned string, empty when nothing resolves.
    pub fn resolve_string(&self, lang_key: &str) -> String {
        self.resolve(lang_key).unwrap_or_default().to_string()
    }

    /// Resolve to an owned string with a static fallback.
    pub fn resolve_string_or(&self, fallback: &str, lang_key: &str) -> String {
        self.resolve_or(Some(fallback), lang_key)
            .unwrap_or_default()
            .to_string()
    }

    /// Resolve to an owned string, `None` when nothing resolves.
    pub fn resolve_opt(&self, lang_key: &str) -> Option<String> {
        self.resolve(lang_key).map(str::to_string)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn string_field(obj: &Map<String, Value>, name: &str) -> Option<String> {
    obj.get(name).and_then(Value::as_str).map(str::to_string)
}

fn decode<T: DeserializeOwned>(value: &Value) -> Option<T> {
    T::deserialize(value).ok()
}
