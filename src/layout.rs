//! Reusable site header and footer documents.
//!
//! Both are stored once (`header.json`, `footer.json`) and rendered around
//! every page with the same resolver and variant rules as sections.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::{Language, Text};
use crate::sections::payload::{Button, Image, LinkItem};
use crate::sections::view::{ButtonView, ImageView, LinkView};
use crate::sections::{select_layout, FooterVariant, HeaderVariant, SubTag, ViewRenderer};

// ==================== Documents ====================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavItem {
    pub label: Text,
    pub href: Option<String>,
    pub children: Vec<NavItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteHeader {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub logo_text: Text,
    pub logo: Option<Image>,
    pub navigation: Vec<NavItem>,
    pub cta: Option<Button>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterColumn {
    pub title: Text,
    pub links: Vec<LinkItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialLink {
    /// Platform name ("github", "x", "linkedin")
    pub platform: String,
    pub href: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteFooter {
    #[serde(flatten)]
    pub sub_tag: SubTag,
    pub tagline: Text,
    pub columns: Vec<FooterColumn>,
    pub social_links: Vec<SocialLink>,
    pub copyright: Text,
}

// ==================== Views ====================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItemView {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItemView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub layout: HeaderVariant,
    pub logo_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageView>,
    pub navigation: Vec<NavItemView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<ButtonView>,
    pub menu_label: String,
    /// Header is drawn over the first section
    pub overlay: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterColumnView {
    pub title: String,
    pub links: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkView {
    pub platform: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    pub layout: FooterVariant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub columns: Vec<FooterColumnView>,
    pub social_links: Vec<SocialLinkView>,
    pub copyright: String,
}

// ==================== Rendering ====================

fn nav_item(item: &NavItem, lang: &str) -> NavItemView {
    NavItemView {
        label: item.label.resolve_string(lang),
        href: item.href.clone().unwrap_or_else(|| "#".to_string()),
        children: item.children.iter().map(|c| nav_item(c, lang)).collect(),
    }
}

/// Render the site header for `language`.
pub fn render_header(header: &SiteHeader, language: Language) -> HeaderView {
    let layout: HeaderVariant = select_layout(&header.sub_tag);
    let renderer = ViewRenderer::new(language);
    let strings = language.strings();
    let lang = language.code();

    // Only the mega layout shows nested menus
    let navigation = header
        .navigation
        .iter()
        .map(|item| {
            let mut view = nav_item(item, lang);
            if layout != HeaderVariant::Mega {
                view.children.clear();
            }
            view
        })
        .collect();

    HeaderView {
        layout,
        logo_text: header.logo_text.resolve_string_or(strings.site_name, lang),
        logo: header.logo.as_ref().and_then(|l| renderer.image(l)),
        navigation,
        cta: header.cta.as_ref().map(|b| renderer.button(b)),
        menu_label: strings.menu_label.to_string(),
        overlay: layout == HeaderVariant::Transparent,
    }
}

/// Default copyright line: "© {year} {site name}. {suffix}"
pub fn default_copyright(language: Language) -> String {
    let strings = language.strings();
    format!(
        "© {} {}. {}",
        Utc::now().year(),
        strings.site_name,
        strings.copyright_suffix
    )
}

/// Render the site footer for `language`.
pub fn render_footer(footer: &SiteFooter, language: Language) -> FooterView {
    let layout: FooterVariant = select_layout(&footer.sub_tag);
    let renderer = ViewRenderer::new(language);
    let lang = language.code();

    let columns = match layout {
        FooterVariant::Minimal => Vec::new(),
        _ => footer
            .columns
            .iter()
            .map(|column| FooterColumnView {
                title: column.title.resolve_string(lang),
                links: column
                    .links
                    .iter()
                    .filter_map(|l| renderer.link(&l.label, l.href.as_deref()))
                    .collect(),
            })
            .collect(),
    };

    let social_links = match layout {
        FooterVariant::Simple => Vec::new(),
        _ => footer
            .social_links
            .iter()
            .filter_map(|s| {
                let href = s.href.as_deref().filter(|h| !h.is_empty())?;
                Some(SocialLinkView {
                    platform: s.platform.clone(),
                    href: href.to_string(),
                })
            })
            .collect(),
    };

    FooterView {
        layout,
        tagline: footer.tagline.resolve_opt(lang),
        columns,
        social_links,
        copyright: footer
            .copyright
            .resolve_opt(lang)
            .unwrap_or_else(|| default_copyright(language)),
    }
}
