//! Translation coverage check - validates every page in the content directory
//!
//! Usage:
//!   cargo run --bin check
//!
//! Exits with a non-zero status when any page has errors (sections the
//! renderer would drop). Missing translations are reported as warnings.
//!
//! Optional environment variables:
//! - CONTENT_DIR (defaults to content)

use anyhow::{Context, Result};
use site_sections::config::Config;
use site_sections::content::FileContentSource;
use site_sections::i18n::{CoverageSummary, LanguageRegistry, TranslationValidator};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_sections=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let source = FileContentSource::new(&config.content_dir);

    let slugs = source
        .list_pages()
        .await
        .context("Failed to list pages")?;
    let languages: Vec<&str> = LanguageRegistry::get()
        .list_enabled()
        .iter()
        .map(|lang| lang.name)
        .collect();
    info!(
        "Checking {} pages in {} for {}",
        slugs.len(),
        config.content_dir.display(),
        languages.join(", ")
    );

    let mut summary = CoverageSummary::default();

    for slug in &slugs {
        let page = source
            .load_page_value(slug)
            .await
            .with_context(|| format!("Failed to load page '{}'", slug))?;
        let report = TranslationValidator::validate_page(&page);
        summary.record(&report);

        if report.is_clean() {
            println!("✓ {}", slug);
            continue;
        }

        println!("✗ {}", slug);
        for error in &report.errors {
            println!("    error: {}", error);
        }
        for warning in &report.warnings {
            println!("    warning: {}", warning);
        }
    }

    println!(
        "\n{} pages, {} errors, {} warnings",
        summary.pages, summary.errors, summary.warnings
    );

    if let Some(message) = summary.failure() {
        anyhow::bail!(message);
    }
    Ok(())
}
