use std::sync::Arc;

use crate::{
    config::{self, Settings},
    error, info,
    server::start_api_server,
};

pub async fn serve(addr: Option<String>) {
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    let addr = addr.unwrap_or_else(config::server_addr);
    info!("Serving playlists on http://{}", addr);

    if let Err(e) = start_api_server(Arc::new(settings), &addr).await {
        error!("Playlist service stopped: {}", e);
    }
}
