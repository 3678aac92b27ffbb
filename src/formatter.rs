//! Lime Blue formatting of playlist records and rendering into export documents.

use rust_xlsxwriter::Workbook;
use tabled::{Table, settings::Style};

use crate::{
    error::ExportError,
    types::{ArtistRef, LimeBlueRow, PlaylistResult, TrackRecord},
    utils::{format_date, format_time},
};

pub const SOURCE: &str = "Spotify";

pub const COLUMNS: [&str; 10] = [
    "Release Artist",
    "Track Band / Artist Name",
    "Recording Title",
    "ISRC",
    "Album Title",
    "Catalogue Number",
    "Original Release Label",
    "Duration (hh:mm:ss)",
    "Release Date (DD/MM/YYYY)",
    "Source",
];

/// Output document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

pub fn format_row(record: &TrackRecord) -> LimeBlueRow {
    let track = &record.track_request;
    let album = &record.album_request;

    LimeBlueRow {
        release_artist: join_names(&track.release_artists),
        track_artist: join_names(&track.featured_artists),
        recording_title: track.track_title.clone(),
        isrc: track.isrc.clone().unwrap_or_default(),
        album_title: track.album_title.clone(),
        catalogue_number: album.upc.clone(),
        label: album.label.clone(),
        duration: format_time(track.track_duration),
        release_date: track
            .release_date
            .as_deref()
            .map(format_date)
            .unwrap_or_default(),
        source: SOURCE.to_string(),
    }
}

pub fn format_rows(records: &[TrackRecord]) -> Vec<LimeBlueRow> {
    records.iter().map(format_row).collect()
}

/// Renders the playlist into the bytes of the requested document.
///
/// JSON keeps the raw enriched records; CSV and XLSX carry the Lime Blue rows.
pub fn render(playlist: &PlaylistResult, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Xlsx => to_xlsx(&format_rows(&playlist.items)),
        ExportFormat::Csv => to_csv(&format_rows(&playlist.items)),
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(playlist)?),
    }
}

pub fn to_csv(rows: &[LimeBlueRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

pub fn to_xlsx(rows: &[LimeBlueRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, title) in COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *title)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let line = index as u32 + 1;
        let cells = [
            &row.release_artist,
            &row.track_artist,
            &row.recording_title,
            &row.isrc,
            &row.album_title,
            &row.catalogue_number,
            &row.label,
            &row.duration,
            &row.release_date,
            &row.source,
        ];
        for (col, value) in cells.into_iter().enumerate() {
            worksheet.write_string(line, col as u16, value.as_str())?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Terminal preview of the rows.
pub fn preview(rows: &[LimeBlueRow]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

fn join_names(artists: &[ArtistRef]) -> String {
    artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
