//! Request language negotiation for the server-side path.
//!
//! The language is derived once per request from `Accept-Language` and then
//! passed explicitly to every lookup.

use crate::i18n::Language;

/// Pick a language from an `Accept-Language` header value.
///
/// Only the first language range is considered, and it is matched by prefix
/// against the registry (`pt-BR,pt;q=0.9` selects `pt_BR`). A missing, empty
/// or unmatched header selects the canonical language.
pub fn from_accept_language(header: Option<&str>) -> Language {
    header
        .and_then(first_language_range)
        .map(Language::from_hint)
        .unwrap_or_else(Language::canonical)
}

/// Pick a language from an explicit `?lang=` override, then the header.
///
/// The override must be an exact registered code; anything else is ignored.
pub fn negotiate(query_lang: Option<&str>, accept_language: Option<&str>) -> Language {
    query_lang
        .and_then(|code| Language::from_code(code).ok())
        .unwrap_or_else(|| from_accept_language(accept_language))
}

fn first_language_range(header: &str) -> Option<&str> {
    header
        .split(',')
        .next()
        .and_then(|range| range.split(';').next())
        .map(str::trim)
        .filter(|range| !range.is_empty() && *range != "*")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_header() {
        assert_eq!(
            from_accept_language(Some("pt-BR,pt;q=0.9,en-US;q=0.8")),
            Language::PORTUGUESE
        );
        assert_eq!(from_accept_language(Some("pt")), Language::PORTUGUESE);
    }

    #[test]
    fn test_english_header() {
        assert_eq!(
            from_accept_language(Some("en-US,en;q=0.9,pt-BR;q=0.5")),
            Language::ENGLISH
        );
    }

    #[test]
    fn test_only_first_range_counts() {
        assert_eq!(
            from_accept_language(Some("fr-FR,pt-BR;q=0.9")),
            Language::ENGLISH
        );
    }

    #[test]
    fn test_missing_or_wildcard_header() {
        assert_eq!(from_accept_language(None), Language::ENGLISH);
        assert_eq!(from_accept_language(Some("")), Language::ENGLISH);
        assert_eq!(from_accept_language(Some("*")), Language::ENGLISH);
        assert_eq!(from_accept_language(Some(" ;q=1")), Language::ENGLISH);
    }

    #[test]
    fn test_query_override_wins() {
        assert_eq!(
            negotiate(Some("pt_BR"), Some("en-US")),
            Language::PORTUGUESE
        );
        assert_eq!(negotiate(Some("en"), Some("pt-BR")), Language::ENGLISH);
    }

    #[test]
    fn test_invalid_query_override_ignored() {
        assert_eq!(negotiate(Some("pt"), Some("pt-BR")), Language::PORTUGUESE);
        assert_eq!(negotiate(Some("xx"), None), Language::ENGLISH);
    }
}
