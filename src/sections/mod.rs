//! Page-builder sections.
//!
//! A page is an ordered list of raw section documents. Each one carries a
//! `_type` naming its kind and an optional `variant`/`layout` tag naming its
//! layout. This module routes each section to the handler for its kind and
//! resolves its localized text for one language.
//!
//! # Architecture
//!
//! - `kind`: Closed set of section kinds and their document tags
//! - `variant`: Per-kind layout enums with their defaults
//! - `payload`: Typed section payloads as stored
//! - `view`: Resolved view models
//! - `dispatch`: Handler table trait and the kind lookup
//! - `render`: Default handler table producing `SectionView`s

mod dispatch;
mod kind;
pub mod payload;
mod render;
mod variant;
pub mod view;

pub use dispatch::{dispatch, render_section, render_sections, Section, SectionError, SectionHandlers};
pub use kind::SectionKind;
pub use render::ViewRenderer;
pub(crate) use render::select_layout;
pub use variant::{
    BlogVariant, CasesVariant, CompareFeaturesVariant, ContactVariant, CtaVariant, FaqVariant,
    FeatureVariant, FooterVariant, HeaderVariant, HeroVariant, NewsletterVariant, PricingVariant,
    SectionVariant, StatsVariant, SubTag, TestimonialsVariant,
};
pub use view::SectionView;
