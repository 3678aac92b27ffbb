use std::path::PathBuf;

use crate::{
    config::{self, Settings},
    error,
    error::ApiError,
    formatter::{self, ExportFormat},
    info,
    management::ExportManager,
    spotify::{ClientSession, playlist::get_playlist},
    success,
    types::{PlaylistResult, UNAVAILABLE},
    utils, warning,
};

/// Attempts made for one playlist before giving up on transient failures.
pub const FETCH_ATTEMPTS: u32 = 3;

pub async fn export(
    link: String,
    format: ExportFormat,
    output_dir: Option<PathBuf>,
    preview: bool,
) {
    let Some(playlist_id) = utils::parse_playlist_id(&link) else {
        error!(
            "Not a Spotify playlist link: {}\nExpected https://open.spotify.com/playlist/<id>?...",
            link
        );
    };

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Cannot load configuration: {}", e),
    };

    info!("Fetching playlist {}", playlist_id);
    let pb = super::spinner("Fetching tracks and album details...");
    let playlist = match fetch_with_retries(&settings, &playlist_id).await {
        Ok(playlist) => playlist,
        Err(e) => {
            pb.finish_and_clear();
            match e.status().map(|s| s.as_u16()) {
                Some(400) | Some(404) => {
                    error!("Playlist {} could not be found: {}", playlist_id, e)
                }
                Some(status) if status >= 500 => error!("Error with Spotify server: {}", e),
                _ => error!("Failed to fetch playlist {}: {}", playlist_id, e),
            }
        }
    };
    pb.finish_and_clear();

    success!(
        "Fetched {} tracks from \"{}\"",
        playlist.items.len(),
        playlist.name
    );

    if playlist.skipped > 0 {
        warning!(
            "Skipped {} playlist entries that are empty or not tracks",
            playlist.skipped
        );
    }

    let unavailable = playlist
        .items
        .iter()
        .filter(|r| r.album_request.upc == UNAVAILABLE)
        .count();
    if unavailable > 0 {
        warning!(
            "Album details unavailable for {} track(s), marked as {}",
            unavailable,
            UNAVAILABLE
        );
    }

    if preview {
        println!("{}", formatter::preview(&formatter::format_rows(&playlist.items)));
    }

    let contents = match formatter::render(&playlist, format) {
        Ok(contents) => contents,
        Err(e) => error!("Failed to render {}: {}", format.extension(), e),
    };

    let manager = ExportManager::new(output_dir.unwrap_or_else(config::export_dir));
    match manager.persist(&playlist.name, format, &contents).await {
        Ok(path) => success!("Exported to {}", path.display()),
        Err(e) => error!(
            "Failed to write export to {}: {}",
            manager.dir().display(),
            e
        ),
    }
}

/// Fetches a playlist, starting over on transient failures.
///
/// The session is connected once and reused, so a refreshed token and the
/// backoff delay carry over between attempts. Not found and bad request
/// responses end immediately.
pub async fn fetch_with_retries(
    settings: &Settings,
    playlist_id: &str,
) -> Result<PlaylistResult, ApiError> {
    let mut session = ClientSession::connect(settings).await?;

    let mut attempt = 1;
    loop {
        match get_playlist(&mut session, playlist_id).await {
            Ok(response) => return Ok(response.data),
            Err(e) if e.is_transient() && attempt < FETCH_ATTEMPTS => {
                warning!(
                    "Attempt {}/{} failed: {}. Trying again.",
                    attempt,
                    FETCH_ATTEMPTS,
                    e
                );
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
