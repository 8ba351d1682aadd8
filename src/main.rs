use anyhow::Result;
use site_sections::config::Config;
use site_sections::server;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_sections=info".parse()?),
        )
        .init();

    info!("Starting site sections server");

    // Load configuration from environment
    let config = Config::from_env()?;

    server::serve(&config).await
}
