//! Localized page-builder sections for a headless-CMS marketing site.
//!
//! Page documents arrive as ordered lists of raw sections whose text fields
//! may be translated in several physical shapes. This crate resolves those
//! fields for one language and routes every section to a handler by kind.

pub mod config;
pub mod content;
pub mod i18n;
pub mod layout;
pub mod metrics;
pub mod page;
pub mod sections;
pub mod server;
