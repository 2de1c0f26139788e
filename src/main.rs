use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quranapi::{
    Config,
    config::StorageBackend,
    handlers::{AppState, cors_layer, create_router},
    quran::{AyahIndex, SURAHS},
    rate_limit::RateLimiter,
    storage::{LocalStorage, ObjectStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = build_store(&config).await?;
    let index = AyahIndex::new(&SURAHS).context("surah table failed validation")?;

    let mut state = AppState::new(store, index);
    if config.rate_limit_enabled() {
        state = state.with_rate_limiter(RateLimiter::new(
            config.rate_limit,
            config.rate_limit_window(),
            config.rate_limit_capacity,
        ));
        tracing::info!(
            limit = config.rate_limit,
            window_secs = config.rate_limit_window().as_secs(),
            "rate limiting enabled"
        );
    }

    let app = create_router(state);
    let app = if config.cors {
        app.layer(cors_layer())
    } else {
        app
    };

    let addr = config.bind_addr();
    tracing::info!("Starting quranapi server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn ObjectStore>> {
    match config.storage {
        StorageBackend::Local => {
            tracing::info!("Data directory: {:?}", config.data_dir);
            Ok(Arc::new(LocalStorage::new(config.data_dir.clone())))
        }
        #[cfg(feature = "s3")]
        StorageBackend::S3 => {
            let bucket = config
                .s3_bucket
                .clone()
                .context("--s3-bucket is required for s3 storage")?;
            tracing::info!(bucket = %bucket, prefix = %config.s3_prefix, "using S3 storage");
            let store = quranapi::storage::S3Storage::new(
                bucket,
                config.s3_prefix.clone(),
                config.s3_region.clone(),
                config.s3_endpoint.clone(),
            )
            .await;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "s3"))]
        StorageBackend::S3 => anyhow::bail!("s3 storage requires the `s3` feature"),
        #[cfg(feature = "http")]
        StorageBackend::Http => {
            let base_url = config
                .http_base_url
                .clone()
                .context("--http-base-url is required for http storage")?;
            tracing::info!(base_url = %base_url, "using HTTP storage");
            Ok(Arc::new(quranapi::storage::HttpStorage::new(base_url)?))
        }
        #[cfg(not(feature = "http"))]
        StorageBackend::Http => anyhow::bail!("http storage requires the `http` feature"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
