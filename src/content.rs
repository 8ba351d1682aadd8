//! File-backed content source.
//!
//! Layout of the content directory:
//!
//! ```text
//! content/
//!   header.json
//!   footer.json
//!   pages/
//!     home.json
//!     pricing.json
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::layout::{SiteFooter, SiteHeader};
use crate::page::Page;

const PAGES_DIR: &str = "pages";
const HEADER_FILE: &str = "header.json";
const FOOTER_FILE: &str = "footer.json";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content not found: {0}")]
    NotFound(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Slugs are lowercase ASCII letters, digits and dashes.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Reads page, header and footer documents from a directory.
#[derive(Debug, Clone)]
pub struct FileContentSource {
    root: PathBuf,
}

impl FileContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn page_path(&self, slug: &str) -> Result<PathBuf, ContentError> {
        if !is_valid_slug(slug) {
            return Err(ContentError::NotFound(slug.to_string()));
        }
        Ok(self.root.join(PAGES_DIR).join(format!("{}.json", slug)))
    }

    async fn read_json<T: DeserializeOwned>(&self, path: PathBuf) -> Result<T, ContentError> {
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound(path.display().to_string()));
            }
            Err(source) => return Err(ContentError::Io { path, source }),
        };

        serde_json::from_slice(&bytes).map_err(|source| ContentError::Parse { path, source })
    }

    /// Load a page document.
    ///
    /// The slug stored in the file is replaced by the requested one.
    pub async fn load_page(&self, slug: &str) -> Result<Page, ContentError> {
        let path = self.page_path(slug)?;
        debug!("Loading page from {}", path.display());
        let mut page: Page = self.read_json(path).await?;
        page.slug = slug.to_string();
        Ok(page)
    }

    /// Load a page as raw JSON, for coverage checks.
    pub async fn load_page_value(&self, slug: &str) -> Result<Value, ContentError> {
        let path = self.page_path(slug)?;
        self.read_json(path).await
    }

    /// Load the site header, `None` when the file does not exist.
    pub async fn load_header(&self) -> Result<Option<SiteHeader>, ContentError> {
        optional(self.read_json(self.root.join(HEADER_FILE)).await)
    }

    /// Load the site footer, `None` when the file does not exist.
    pub async fn load_footer(&self) -> Result<Option<SiteFooter>, ContentError> {
        optional(self.read_json(self.root.join(FOOTER_FILE)).await)
    }

    /// Slugs of every page in the content directory, sorted.
    pub async fn list_pages(&self) -> Result<Vec<String>, ContentError> {
        let dir = self.root.join(PAGES_DIR);
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(ContentError::Io { path: dir, source }),
        };

        let mut slugs = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(source) => return Err(ContentError::Io { path: dir, source }),
            };

            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(slug) if is_valid_slug(slug) => slugs.push(slug.to_string()),
                _ => warn!("Ignoring page file with invalid slug: {}", path.display()),
            }
        }

        slugs.sort();
        Ok(slugs)
    }
}

fn optional<T>(result: Result<T, ContentError>) -> Result<Option<T>, ContentError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ContentError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
