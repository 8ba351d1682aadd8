use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Content
    pub content_dir: PathBuf,

    // Server
    pub host: String,
    pub port: u16,

    // Client language preference
    pub language_preference_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Content
            content_dir: std::env::var("CONTENT_DIR")
                .unwrap_or_else(|_| "content".to_string())
                .into(),

            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Client language preference
            language_preference_file: std::env::var("LANGUAGE_PREFERENCE_FILE")
                .unwrap_or_else(|_| ".site-language".to_string())
                .into(),
        })
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid HOST/PORT: {}:{}", self.host, self.port))
    }
}
