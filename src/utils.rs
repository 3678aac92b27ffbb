use std::sync::LazyLock;

use chrono::NaiveDate;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;

// RFC 3986 unreserved characters stay literal
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

static PLAYLIST_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://open\.spotify\.com/(?:intl-[a-z]{2}/)?playlist/([A-Za-z0-9]+)(?:[?#/].*)?$")
        .expect("playlist url pattern is valid")
});

static PLAYLIST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{22}$").expect("playlist id pattern is valid"));

/// Converts Spotify's `YYYY-MM-DD` into `DD/MM/YYYY`.
///
/// Reduced precision dates (`YYYY`, `YYYY-MM`) and anything unparsable are
/// returned verbatim.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Converts a duration in milliseconds into `HH:MM:SS`, rounded to the
/// nearest second with ties going to the even second.
pub fn format_time(millis: u64) -> String {
    let (whole, remainder) = (millis / 1000, millis % 1000);
    let total_seconds = if remainder > 500 || (remainder == 500 && whole % 2 == 1) {
        whole + 1
    } else {
        whole
    };
    let (minutes, seconds) = (total_seconds / 60, total_seconds % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Extracts the playlist id from an `open.spotify.com` playlist link.
///
/// A bare 22 character playlist id is accepted as well.
pub fn parse_playlist_id(link: &str) -> Option<String> {
    let link = link.trim();
    if PLAYLIST_ID.is_match(link) {
        return Some(link.to_string());
    }

    PLAYLIST_URL
        .captures(link)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Percent-encodes a value interpolated into one segment of an API path.
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Makes a playlist name usable as a file name.
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "playlist".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Picks a file name that does not overwrite any of `existing`.
///
/// `name.ext` is used when free. Otherwise the highest `name(n).ext` is
/// looked up and `name(n + 1).ext` is returned, where a bare `name.ext`
/// counts as `n = 0`.
pub fn next_available_name(existing: &[String], name: &str, extension: &str) -> String {
    let pattern = format!(
        r"^{}(?:\((\d+)\))?\.{}$",
        regex::escape(name),
        regex::escape(extension)
    );
    let Ok(pattern) = Regex::new(&pattern) else {
        return format!("{}.{}", name, extension);
    };

    let highest = existing
        .iter()
        .filter_map(|file| pattern.captures(file))
        .map(|c| {
            c.get(1)
                .and_then(|n| n.as_str().parse::<u32>().ok())
                .unwrap_or(0)
        })
        .max();

    match highest {
        Some(n) => format!("{}({}).{}", name, n + 1, extension),
        None => format!("{}.{}", name, extension),
    }
}
