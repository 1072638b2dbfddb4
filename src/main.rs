use std::time::Duration;

use chrono::Utc;
use movie_recommender_ui::{
    api::{create_router, AppState},
    cache::ResponseCache,
    config::Config,
};
use tracing_subscriber::EnvFilter;

const PURGE_INTERVAL_SECS: u64 = 600;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_recommender_ui=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let cache = ResponseCache::new();
    let state = AppState::from_config(&config, cache.clone())?;

    // Expired responses and idle sessions are otherwise only dropped on access
    let purge_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(PURGE_INTERVAL_SECS));
        loop {
            interval.tick().await;
            let now = Utc::now();
            let responses = cache.purge_expired(now).await;
            let sessions = purge_state.purge_idle_sessions(now).await;
            tracing::debug!(responses, sessions, "Purged expired responses and idle sessions");
        }
    });

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %config.bind_addr(),
        api_base_url = %config.api_base_url,
        "Movie recommender UI listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
