use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::{
    config::Settings,
    error::{ApiError, ExportError},
    formatter::{self, ExportFormat},
    spotify::{ClientSession, playlist::get_playlist},
    types::PlaylistResult,
    utils,
};

// RFC 5987 attr-char, everything else is percent-encoded in `filename*`
const ATTR_CHAR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'#')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b'-')
    .remove(b'.')
    .remove(b'^')
    .remove(b'_')
    .remove(b'`')
    .remove(b'|')
    .remove(b'~');

#[derive(Debug, Deserialize)]
pub struct PlaylistQuery {
    pub playlist_id: String,
}

#[derive(Debug)]
pub enum ServiceError {
    InvalidPlaylist(String),
    Upstream(ApiError),
    Render(ExportError),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::InvalidPlaylist(value) => (
                StatusCode::BAD_REQUEST,
                format!("not a Spotify playlist id or link: {}", value),
            ),
            // Token failures are about the service's own credentials
            ServiceError::Upstream(err @ ApiError::Auth { .. }) => {
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
            ServiceError::Upstream(err) => {
                let status = match err.status().map(|s| s.as_u16()) {
                    Some(400) => StatusCode::BAD_REQUEST,
                    Some(404) => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, err.to_string())
            }
            ServiceError::Render(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        warn!(%status, %message, "playlist request failed");
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn playlist_raw(
    Query(query): Query<PlaylistQuery>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<Json<PlaylistResult>, ServiceError> {
    let playlist = fetch_playlist(&settings, &query.playlist_id).await?;
    Ok(Json(playlist))
}

pub async fn playlist_csv(
    Query(query): Query<PlaylistQuery>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<Response, ServiceError> {
    let playlist = fetch_playlist(&settings, &query.playlist_id).await?;
    attachment(&playlist, ExportFormat::Csv)
}

pub async fn playlist_xlsx(
    Query(query): Query<PlaylistQuery>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Result<Response, ServiceError> {
    let playlist = fetch_playlist(&settings, &query.playlist_id).await?;
    attachment(&playlist, ExportFormat::Xlsx)
}

async fn fetch_playlist(
    settings: &Settings,
    playlist_id: &str,
) -> Result<PlaylistResult, ServiceError> {
    let playlist_id = utils::parse_playlist_id(playlist_id)
        .ok_or_else(|| ServiceError::InvalidPlaylist(playlist_id.to_string()))?;

    let mut session = ClientSession::connect(settings)
        .await
        .map_err(ServiceError::Upstream)?;

    get_playlist(&mut session, &playlist_id)
        .await
        .map(|response| response.data)
        .map_err(ServiceError::Upstream)
}

fn attachment(playlist: &PlaylistResult, format: ExportFormat) -> Result<Response, ServiceError> {
    let body = formatter::render(playlist, format).map_err(ServiceError::Render)?;
    let disposition = content_disposition(&playlist.name, format.extension());

    Ok((
        [
            (header::CONTENT_TYPE, format.media_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

/// `attachment` disposition with an ASCII fallback name and the UTF-8 name
/// percent-encoded per RFC 6266.
pub fn content_disposition(playlist_name: &str, extension: &str) -> String {
    let file_name = format!(
        "{}.{}",
        utils::sanitize_file_name(playlist_name),
        extension
    );

    let fallback: String = file_name
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let encoded = utf8_percent_encode(&file_name, ATTR_CHAR);

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    )
}
