//! HTTP surface: rendered pages and page metadata as JSON.
//!
//! The request language is negotiated once per request (`?lang=` override,
//! then `Accept-Language`) and passed explicitly to every lookup.

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::content::{ContentError, FileContentSource};
use crate::i18n::{negotiate, Language};
use crate::metrics::{MetricsReport, RenderMetrics};
use crate::page::{page_metadata, render_page, PageMetadata, RenderedPage};

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<FileContentSource>,
}

impl AppState {
    pub fn new(content: FileContentSource) -> Self {
        Self {
            content: Arc::new(content),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

/// Language for one request.
pub fn request_language(query: &LanguageQuery, headers: &HeaderMap) -> Language {
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());
    negotiate::negotiate(query.lang.as_deref(), accept_language)
}

/// Error returned by page handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl From<ContentError> for ApiError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::NotFound(what) => ApiError::NotFound(what),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "page not found".to_string()),
            ApiError::Internal(message) => {
                error!("Request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn metrics() -> Json<MetricsReport> {
    Json(RenderMetrics::global().report())
}

/// `GET /pages/:slug`: the rendered page wrapped in the site header and footer.
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
) -> Result<Json<RenderedPage>, ApiError> {
    let language = request_language(&query, &headers);
    let page = state.content.load_page(&slug).await?;
    let mut rendered = render_page(&page, language);

    // A broken header or footer must not take the page down with it
    match state.content.load_header().await {
        Ok(Some(header)) => rendered = rendered.with_header(&header),
        Ok(None) => {}
        Err(e) => warn!("Rendering '{}' without header: {}", slug, e),
    }
    match state.content.load_footer().await {
        Ok(Some(footer)) => rendered = rendered.with_footer(&footer),
        Ok(None) => {}
        Err(e) => warn!("Rendering '{}' without footer: {}", slug, e),
    }

    Ok(Json(rendered))
}

/// `GET /pages/:slug/metadata`
pub async fn get_page_metadata(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
) -> Result<Json<PageMetadata>, ApiError> {
    let language = request_language(&query, &headers);
    let page = state.content.load_page(&slug).await?;
    Ok(Json(page_metadata(&page, language)))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/pages/:slug", get(get_page))
        .route("/pages/:slug/metadata", get(get_page_metadata))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = config.bind_addr()?;
    let state = AppState::new(FileContentSource::new(&config.content_dir));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(
        "Serving content from {} on http://{}",
        config.content_dir.display(),
        addr
    );

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;
    Ok(())
}
