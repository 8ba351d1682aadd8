//! Page documents, page rendering and server-side metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::i18n::{resolve_server, Language, LanguageRegistry, LocalizedField};
use crate::layout::{render_footer, render_header, FooterView, HeaderView, SiteFooter, SiteHeader};
use crate::metrics::RenderMetrics;
use crate::sections::{render_sections, SectionView, ViewRenderer};

/// A page: metadata plus an ordered list of raw sections.
///
/// Sections stay raw until render time so that one bad section cannot keep
/// the rest of the page from loading.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
    pub slug: String,
    /// Plain title, used when no translation resolves
    pub title: Option<String>,
    pub title_i18n: Option<LocalizedField<String>>,
    pub description: Option<String>,
    pub description_i18n: Option<LocalizedField<String>>,
    /// Sections in rendering order
    pub sections: Vec<Value>,
}

/// A page resolved for one language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub slug: String,
    pub language: Language,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderView>,
    pub sections: Vec<SectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterView>,
}

impl RenderedPage {
    pub fn with_header(mut self, header: &SiteHeader) -> Self {
        self.header = Some(render_header(header, self.language));
        self
    }

    pub fn with_footer(mut self, footer: &SiteFooter) -> Self {
        self.footer = Some(render_footer(footer, self.language));
        self
    }
}

/// Metadata for the document head, resolved once per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub language: Language,
    /// Other enabled language codes the page can be viewed in
    pub alternates: Vec<&'static str>,
}

fn page_title(page: &Page, language: Language) -> String {
    resolve_server(page.title_i18n.as_ref(), page.title.as_ref(), language.code())
        .filter(|title| !title.is_empty())
        .map(String::as_str)
        .unwrap_or(language.strings().site_name)
        .to_string()
}

/// Render every section of `page` in order, skipping the ones that cannot
/// be handled.
pub fn render_page(page: &Page, language: Language) -> RenderedPage {
    let mut renderer = ViewRenderer::new(language);
    let sections = render_sections(&mut renderer, &page.sections);

    debug!(
        "Rendered page '{}' in {}: {}/{} sections",
        page.slug,
        language,
        sections.len(),
        page.sections.len()
    );
    RenderMetrics::global().record_page_rendered();

    RenderedPage {
        slug: page.slug.clone(),
        language,
        title: page_title(page, language),
        header: None,
        sections,
        footer: None,
    }
}

/// Resolve page metadata for a request language.
pub fn page_metadata(page: &Page, language: Language) -> PageMetadata {
    let description = resolve_server(
        page.description_i18n.as_ref(),
        page.description.as_ref(),
        language.code(),
    )
    .cloned()
    .unwrap_or_default();

    let alternates = LanguageRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|config| config.code)
        .filter(|code| *code != language.code())
        .collect();

    PageMetadata {
        title: page_title(page, language),
        description,
        language,
        alternates,
    }
}
