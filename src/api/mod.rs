//! # API Module
//!
//! HTTP endpoints of the optional playlist service. They return the same data
//! as the `export` command, either as raw JSON or as a CSV / XLSX document
//! rendered in memory and sent as an attachment.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version for monitoring
//! - [`root`] - `GET /`, short usage message
//! - [`playlist_raw`] - `GET /playlists/raw?playlist_id=...`, enriched records as JSON
//! - [`playlist_csv`] - `GET /playlists/csv?playlist_id=...`, Lime Blue CSV attachment
//! - [`playlist_xlsx`] - `GET /playlists/xlsx?playlist_id=...`, Lime Blue XLSX attachment
//!
//! Each playlist request connects its own [`crate::spotify::ClientSession`],
//! so requests never share token or backoff state.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spex::api::{health, playlist_raw};
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .route("/playlists/raw", get(playlist_raw));
//! ```

mod health;
mod playlists;

pub use health::{health, root};
pub use playlists::{
    PlaylistQuery, ServiceError, content_disposition, playlist_csv, playlist_raw, playlist_xlsx,
};
