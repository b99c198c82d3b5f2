use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ai_client::Gemini;
use reddit_client::RedditClient;
use relicvault_api::{rest, AppState};
use relicvault_common::{Config, SourceMode};
use relicvault_source::{
    ArtifactPool, ArtifactSource, GeneratedSource, RotatedSource, TrendingSource,
};
use relicvault_store::{KeyValueStore, Leaderboard, MemoryStore};

const GENERATION_MODEL: &str = "gemini-3-flash-preview";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("relicvault=info".parse()?))
        .init();

    let config = Config::from_env();

    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    let source: Arc<dyn ArtifactSource> = match config.source_mode {
        SourceMode::Pool => Arc::new(RotatedSource::new(ArtifactPool::curated(), store.clone())),
        SourceMode::Generated => Arc::new(GeneratedSource::new(Gemini::new(
            &config.gemini_api_key,
            GENERATION_MODEL,
        ))),
        SourceMode::Trending => Arc::new(TrendingSource::new(
            RedditClient::new(),
            Gemini::new(&config.gemini_api_key, GENERATION_MODEL),
            config.trending_subreddit.clone(),
            config.trending_limit,
        )),
    };

    let state = Arc::new(AppState {
        source,
        leaderboard: Leaderboard::new(store),
    });

    let app = rest::router(state);

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Relic Vault API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
