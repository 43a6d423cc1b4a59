//! vizdeck web server
//!
//! Run with: cargo run -p vizdeck-web

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vizdeck_config::Config;
use vizdeck_slides::{Assets, Deck};
use vizdeck_web::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting vizdeck (debug mode: {})", config.server.debug);

    let assets = Assets::load(&config.assets)
        .with_context(|| format!("loading assets from {}", config.assets.dir.display()))?;
    let deck = Deck::build(&assets)?;
    let state = AppState::new(deck)?;
    let app = build_router(state, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
