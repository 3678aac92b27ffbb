use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{api, config::Settings};

pub fn router(settings: Arc<Settings>) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .route("/playlists/raw", get(api::playlist_raw))
        .route("/playlists/csv", get(api::playlist_csv))
        .route("/playlists/xlsx", get(api::playlist_xlsx))
        .layer(Extension(settings))
}

pub async fn start_api_server(settings: Arc<Settings>, addr: &str) -> std::io::Result<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "playlist service listening");
    axum::serve(listener, router(settings)).await
}
