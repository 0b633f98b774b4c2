use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moodreel_api::{
    config::Config, routes::create_router, services::providers::TmdbProvider, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodreel_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // A missing TMDB key is a startup failure, not a per-request one
    let config = Config::from_env()?;

    let provider = TmdbProvider::new(config.tmdb_api_key.clone(), config.tmdb_api_url.clone());
    let state = AppState::new(Arc::new(provider));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(addr = %addr, "moodreel API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
