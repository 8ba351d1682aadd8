//! Preview binary - renders one page from the content directory as JSON
//!
//! Usage:
//!   cargo run --bin preview -- home              # Render in the remembered language
//!   cargo run --bin preview -- home --lang pt_BR # Switch language and remember it
//!
//! The language is chosen like a browser session would: a remembered
//! explicit choice first, then the locale of the environment (LC_ALL,
//! LC_MESSAGES, LANG), then English.
//!
//! Optional environment variables:
//! - CONTENT_DIR (defaults to content)
//! - LANGUAGE_PREFERENCE_FILE (defaults to .site-language)

use anyhow::{Context, Result};
use site_sections::config::Config;
use site_sections::content::FileContentSource;
use site_sections::i18n::{
    runtime_language_hint, FilePreferenceStore, Language, LanguageContext,
};
use site_sections::page::render_page;
use tracing::info;

struct PreviewArgs {
    slug: String,
    lang: Option<String>,
}

fn parse_args() -> Result<PreviewArgs> {
    let mut args = std::env::args().skip(1);
    let mut slug = None;
    let mut lang = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => lang = Some(args.next().context("--lang requires a language code")?),
            _ if slug.is_none() => slug = Some(arg),
            other => anyhow::bail!("Unexpected argument: {}", other),
        }
    }

    Ok(PreviewArgs {
        slug: slug.context("Usage: preview <slug> [--lang <code>]")?,
        lang,
    })
}

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
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let config = Config::from_env()?;

    // Resolve the session language
    let store = FilePreferenceStore::new(&config.language_preference_file);
    let hint = runtime_language_hint();
    let mut context = LanguageContext::initialize(Box::new(store), hint.as_deref());

    if let Some(code) = &args.lang {
        let language = Language::from_code(code)
            .with_context(|| format!("Cannot switch to language '{}'", code))?;
        context.set_language(language);
    }

    info!(
        "Previewing '{}' in {} ({:?})",
        args.slug,
        context.language().native_name(),
        context.source()
    );

    // Load content
    let source = FileContentSource::new(&config.content_dir);
    let page = source
        .load_page(&args.slug)
        .await
        .with_context(|| format!("Failed to load page '{}'", args.slug))?;

    let mut rendered = render_page(&page, context.language());
    if let Some(header) = source.load_header().await.context("Failed to load header")? {
        rendered = rendered.with_header(&header);
    }
    if let Some(footer) = source.load_footer().await.context("Failed to load footer")? {
        rendered = rendered.with_footer(&footer);
    }

    println!("\n========== {} ==========", rendered.title);
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    println!("======================================\n");

    info!(
        "Rendered {} of {} sections",
        rendered.sections.len(),
        page.sections.len()
    );
    Ok(())
}
