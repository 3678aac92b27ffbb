use axum::response::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to spex, visit /playlists/{raw,csv,xlsx} and supply your desired playlist_id as a query"
    }))
}
