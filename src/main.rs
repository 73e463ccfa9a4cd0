use std::sync::Arc;

use tokio::signal;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::Settings;
mod controllers;
mod error;
mod models;
mod routers;
mod settings;
#[cfg(test)]
mod test_support;
use controllers::{ItunesCoverArt, LrclibSearch, MetadataController};
use routers::{app, AppState};

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy()
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?);

    fmt().with_env_filter(filter).with_target(false).init();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let settings = Settings::from_env()?;

    let lyrics = LrclibSearch::new(
        &settings.lrclib_url,
        settings.lyrics_timeout,
        settings.synced_only,
    )?;
    let covers = ItunesCoverArt::new(&settings.itunes_search_url, settings.cover_timeout)?;
    let state = AppState {
        metadata: Arc::new(MetadataController::new(Arc::new(lyrics), Arc::new(covers))),
    };

    let addr = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🎵 Lyrics proxy listening on {}", addr);
    info!("📡 Endpoints: /get-lyrics, /get-metadata, /health");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
