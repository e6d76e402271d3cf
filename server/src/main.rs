use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use galaxy_server::{
    refresh_tick, router, AppState, LoginKeyStore, MemoryKeyStore, RankCache, RankRefresher,
    ServerConfig,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::parse();

    let store: Arc<dyn LoginKeyStore> = Arc::new(MemoryKeyStore::new());
    let cache = Arc::new(RankCache::new());
    refresh_tick(&cache, store.as_ref());

    let refresher =
        RankRefresher::spawn(cache.clone(), store.clone(), config.rank_refresh_period());

    let app = router(AppState {
        store,
        cache,
        login_key_ttl: config.login_key_ttl(),
    });

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("bind {}", config.listen))?;
    info!(
        address = %config.listen,
        login_key_ttl_secs = config.login_key_ttl_secs,
        rank_refresh_secs = config.rank_refresh_secs,
        "server listening"
    );

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve http");

    if let Err(err) = refresher.stop().await {
        warn!(error = %err, "rank refresher ended abnormally");
    }
    info!("server stopped");
    served
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
