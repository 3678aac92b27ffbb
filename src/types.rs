use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Placeholder stored in every album field when the album lookup failed.
pub const UNAVAILABLE: &str = "UNAVAILABLE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
    #[serde(default)]
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(default)]
    pub isrc: Option<String>,
    #[serde(default)]
    pub upc: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub id: String,
    pub name: String,
    pub tracks: TracksPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksPage {
    #[serde(default)]
    pub href: Option<String>,
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// One entry of a playlist page. The track is kept raw because local files
/// and podcast episodes do not share the track shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    pub album: TrackAlbum,
    #[serde(default)]
    pub external_ids: ExternalIds,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub album_type: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDetails {
    #[serde(default)]
    pub external_ids: ExternalIds,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Copyright {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Track level fields taken straight from a playlist item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    pub release_artists: Vec<ArtistRef>,
    pub featured_artists: Vec<ArtistRef>,
    pub track_title: String,
    pub track_id: Option<String>,
    pub track_duration: u64,
    pub isrc: Option<String>,
    pub album_title: String,
    pub album_id: Option<String>,
    pub album_type: Option<String>,
    pub release_date: Option<String>,
}

/// Copyright lines of an album, or the [`UNAVAILABLE`] marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Copyrights {
    Listed(Vec<Copyright>),
    Unavailable(String),
}

/// Album level fields obtained from the album lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumRequest {
    pub upc: String,
    pub copy_rights: Copyrights,
    pub label: String,
}

impl AlbumRequest {
    pub fn unavailable() -> Self {
        Self {
            upc: UNAVAILABLE.to_string(),
            copy_rights: Copyrights::Unavailable(UNAVAILABLE.to_string()),
            label: UNAVAILABLE.to_string(),
        }
    }
}

impl From<AlbumDetails> for AlbumRequest {
    fn from(album: AlbumDetails) -> Self {
        Self {
            upc: album
                .external_ids
                .upc
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            copy_rights: Copyrights::Listed(album.copyrights),
            label: album.label.unwrap_or_else(|| UNAVAILABLE.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub track_request: TrackRequest,
    pub album_request: AlbumRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistResult {
    pub name: String,
    pub items: Vec<TrackRecord>,
    /// Playlist entries left out because they were empty or not tracks.
    #[serde(skip)]
    pub skipped: usize,
}

/// One output row in the Lime Blue column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct LimeBlueRow {
    #[serde(rename = "Release Artist")]
    #[tabled(rename = "Release Artist")]
    pub release_artist: String,
    #[serde(rename = "Track Band / Artist Name")]
    #[tabled(rename = "Track Band / Artist Name")]
    pub track_artist: String,
    #[serde(rename = "Recording Title")]
    #[tabled(rename = "Recording Title")]
    pub recording_title: String,
    #[serde(rename = "ISRC")]
    #[tabled(rename = "ISRC")]
    pub isrc: String,
    #[serde(rename = "Album Title")]
    #[tabled(rename = "Album Title")]
    pub album_title: String,
    #[serde(rename = "Catalogue Number")]
    #[tabled(rename = "Catalogue Number")]
    pub catalogue_number: String,
    #[serde(rename = "Original Release Label")]
    #[tabled(rename = "Original Release Label")]
    pub label: String,
    #[serde(rename = "Duration (hh:mm:ss)")]
    #[tabled(rename = "Duration (hh:mm:ss)")]
    pub duration: String,
    #[serde(rename = "Release Date (DD/MM/YYYY)")]
    #[tabled(rename = "Release Date (DD/MM/YYYY)")]
    pub release_date: String,
    #[serde(rename = "Source")]
    #[tabled(rename = "Source")]
    pub source: String,
}
