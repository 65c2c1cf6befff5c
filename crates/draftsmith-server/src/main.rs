mod app;
mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn};

use draftsmith_api::AppStateInner;
use draftsmith_db::{Database, MemoryStore, Store};
use draftsmith_generator::OpenAiGenerator;

use crate::config::{Config, StorageKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "draftsmith=debug,draftsmith_api=debug,draftsmith_generator=debug,draftsmith_db=info,tower_http=debug"
                    .into()
            }),
        )
        .init();

    let config = Config::from_env()?;

    if config.openai.api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set; /api/generate will fail until it is");
    }

    let store: Store = match config.storage {
        StorageKind::Memory => MemoryStore::new().into(),
        StorageKind::Sqlite => Database::open(&config.database_path)?.into(),
    };
    info!("Using {} storage", store.kind());

    let generator = OpenAiGenerator::new(config.openai.clone());
    info!("Generation model: {}", generator.model());

    let state = AppStateInner::new(store, Arc::new(generator));
    let router = app::build(state, &config.static_dir);

    let addr = SocketAddr::new(config.host, config.port);
    info!("Draftsmith listening on {}", addr);
    info!("Serving front-end from {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                warn!("Could not install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received Ctrl+C, shutting down...");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
