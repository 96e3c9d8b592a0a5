use anyhow::Result;
use locale_site::{config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_site=info".parse()?),
        )
        .init();

    info!("Starting locale-site server");

    let config = Config::from_env()?;
    server::serve(config).await
}
