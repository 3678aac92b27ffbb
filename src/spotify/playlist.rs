use std::collections::HashSet;

use tracing::{debug, warn};

use crate::{
    error::ApiError,
    spotify::{ApiResponse, ApiResult, ClientSession},
    types::{
        AlbumDetails, AlbumRequest, PlaylistItem, PlaylistResponse, PlaylistResult, PlaylistTrack,
        TrackRecord, TrackRequest, TracksPage,
    },
    utils::encode_path_segment,
};

/// Records collected while walking the pages of a playlist.
#[derive(Debug, Default)]
pub struct TrackListing {
    pub records: Vec<TrackRecord>,
    /// Entries that were empty or not tracks.
    pub skipped: usize,
}

/// Retrieves a playlist with every track enriched by its album details.
///
/// Fetches `/playlists/{id}` for the playlist name and the first page of
/// tracks (Spotify nests it under `tracks`), then walks the remaining pages
/// through [`load_tracks`].
///
/// # Arguments
///
/// * `session` - Connected client session, mutated by token refreshes and backoff
/// * `playlist_id` - Spotify playlist ID
///
/// # Returns
///
/// - `Ok(ApiResponse<PlaylistResult>)` - Name plus all tracks in playlist order;
///   the status is the one of the playlist request
/// - `Err(ApiError)` - Playlist or one of its pages could not be fetched. When
///   the playlist request itself fails no track is fetched.
///
/// # Album Lookups
///
/// Every track costs one extra request to `/albums/{id}`. Failed lookups are
/// not fatal: the album fields of that track are set to `UNAVAILABLE`.
///
/// # Example
///
/// ```
/// let mut session = ClientSession::connect(&settings).await?;
/// let playlist = get_playlist(&mut session, "37i9dQZF1DXcBWIGoYBM5M").await?;
/// println!("{}: {} tracks", playlist.data.name, playlist.data.items.len());
/// ```
pub async fn get_playlist(
    session: &mut ClientSession,
    playlist_id: &str,
) -> ApiResult<PlaylistResult> {
    let url = format!(
        "{uri}/playlists/{id}",
        uri = session.base_url(),
        id = encode_path_segment(playlist_id)
    );

    let playlist = session.fetch::<PlaylistResponse>(&url).await?;
    let status = playlist.status;
    let PlaylistResponse { name, tracks, .. } = playlist.data;

    let TrackListing { records, skipped } = load_tracks(session, tracks).await?;
    debug!(playlist_id, tracks = records.len(), skipped, "playlist assembled");

    Ok(ApiResponse {
        status,
        data: PlaylistResult {
            name,
            items: records,
            skipped,
        },
    })
}

/// Walks a paginated track collection starting at `page`.
///
/// Pages are followed through their `next` URL until it is null. Records keep
/// the playlist order across pages. A `next` URL that was already visited ends
/// the traversal, so a cyclic chain cannot loop or duplicate tracks.
pub async fn load_tracks(
    session: &mut ClientSession,
    mut page: TracksPage,
) -> Result<TrackListing, ApiError> {
    let mut listing = TrackListing::default();
    let mut visited = HashSet::new();
    if let Some(href) = &page.href {
        visited.insert(href.clone());
    }

    loop {
        for item in page.items {
            let Some(track) = track_request(item) else {
                listing.skipped += 1;
                continue;
            };
            let album = load_album(session, track.album_id.as_deref()).await;
            listing.records.push(TrackRecord {
                track_request: track,
                album_request: album,
            });
        }

        let Some(next) = page.next else {
            break;
        };

        if !visited.insert(next.clone()) {
            warn!(url = %next, "page already visited, stopping pagination");
            break;
        }

        page = session.fetch::<TracksPage>(&next).await?.data;
    }

    Ok(listing)
}

/// Extracts the track level fields from a raw playlist item.
///
/// Returns `None` for empty slots and for entries that are not tracks
/// (local files without metadata, podcast episodes).
pub fn track_request(item: PlaylistItem) -> Option<TrackRequest> {
    let Some(raw) = item.track else {
        warn!("skipping empty playlist entry");
        return None;
    };
    let track: PlaylistTrack = match serde_json::from_value(raw) {
        Ok(track) => track,
        Err(e) => {
            warn!(error = %e, "skipping playlist entry that is not a track");
            return None;
        }
    };

    Some(TrackRequest {
        release_artists: track.album.artists,
        featured_artists: track.artists,
        track_title: track.name,
        track_id: track.id,
        track_duration: track.duration_ms,
        isrc: track.external_ids.isrc,
        album_title: track.album.name,
        album_id: track.album.id,
        album_type: track.album.album_type,
        release_date: track.album.release_date,
    })
}

async fn load_album(session: &mut ClientSession, album_id: Option<&str>) -> AlbumRequest {
    let Some(album_id) = album_id else {
        return AlbumRequest::unavailable();
    };

    let url = format!(
        "{uri}/albums/{id}",
        uri = session.base_url(),
        id = encode_path_segment(album_id)
    );

    match session.fetch::<AlbumDetails>(&url).await {
        Ok(album) => AlbumRequest::from(album.data),
        Err(e) => {
            warn!(album_id, error = %e, "album lookup failed");
            AlbumRequest::unavailable()
        }
    }
}
