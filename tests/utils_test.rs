use spex::utils::*;

// Helper to turn string literals into the owned list next_available_name expects
fn files(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_format_date_full_precision() {
    assert_eq!(format_date("2021-01-05"), "05/01/2021");
    assert_eq!(format_date("1999-12-31"), "31/12/1999");
}

#[test]
fn test_format_date_reduced_precision_passes_through() {
    // Spotify reports year or month precision for some older releases
    assert_eq!(format_date("1987"), "1987");
    assert_eq!(format_date("1987-06"), "1987-06");
    assert_eq!(format_date(""), "");
}

#[test]
fn test_format_time() {
    assert_eq!(format_time(65000), "00:01:05");
    assert_eq!(format_time(0), "00:00:00");
    assert_eq!(format_time(3_600_000), "01:00:00");
}

#[test]
fn test_format_time_rounds_to_nearest_second() {
    assert_eq!(format_time(65_499), "00:01:05");
    assert_eq!(format_time(65_501), "00:01:06");
    assert_eq!(format_time(59_999), "00:01:00");
}

#[test]
fn test_format_time_ties_round_to_even_second() {
    assert_eq!(format_time(64_500), "00:01:04");
    assert_eq!(format_time(65_500), "00:01:06");
    assert_eq!(format_time(500), "00:00:00");
    assert_eq!(format_time(1_500), "00:00:02");
}

#[test]
fn test_format_time_hours_are_not_capped() {
    // 25 hours, 1 minute, 1 second
    assert_eq!(format_time(90_061_000), "25:01:01");
}

#[test]
fn test_parse_playlist_id_from_share_link() {
    let link = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=1a2b3c4d5e";
    assert_eq!(
        parse_playlist_id(link),
        Some("37i9dQZF1DXcBWIGoYBM5M".to_string())
    );
}

#[test]
fn test_parse_playlist_id_without_query() {
    let link = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M";
    assert_eq!(
        parse_playlist_id(link),
        Some("37i9dQZF1DXcBWIGoYBM5M".to_string())
    );

    let localized = "https://open.spotify.com/intl-de/playlist/37i9dQZF1DXcBWIGoYBM5M?si=x";
    assert_eq!(
        parse_playlist_id(localized),
        Some("37i9dQZF1DXcBWIGoYBM5M".to_string())
    );
}

#[test]
fn test_parse_playlist_id_bare_id() {
    assert_eq!(
        parse_playlist_id("  37i9dQZF1DXcBWIGoYBM5M  "),
        Some("37i9dQZF1DXcBWIGoYBM5M".to_string())
    );
}

#[test]
fn test_parse_playlist_id_rejects_other_links() {
    assert_eq!(
        parse_playlist_id("https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy"),
        None
    );
    assert_eq!(parse_playlist_id("https://example.com/playlist/abc"), None);
    assert_eq!(parse_playlist_id("not a link"), None);
}

#[test]
fn test_encode_path_segment() {
    assert_eq!(encode_path_segment("37i9dQZF1DXcBWIGoYBM5M"), "37i9dQZF1DXcBWIGoYBM5M");
    assert_eq!(encode_path_segment("../albums/x"), "..%2Falbums%2Fx");
    assert_eq!(encode_path_segment("a b?c#d"), "a%20b%3Fc%23d");
}

#[test]
fn test_sanitize_file_name() {
    assert_eq!(sanitize_file_name("Summer Hits"), "Summer Hits");
    assert_eq!(sanitize_file_name("AC/DC: Best of?"), "AC_DC_ Best of_");
    assert_eq!(sanitize_file_name("   "), "playlist");
}

#[test]
fn test_next_available_name_without_duplicates() {
    let existing = files(&["Other.xlsx", "Summer.csv"]);
    assert_eq!(
        next_available_name(&existing, "Summer", "xlsx"),
        "Summer.xlsx"
    );
}

#[test]
fn test_next_available_name_first_duplicate() {
    let existing = files(&["Summer.xlsx"]);
    assert_eq!(
        next_available_name(&existing, "Summer", "xlsx"),
        "Summer(1).xlsx"
    );
}

#[test]
fn test_next_available_name_uses_highest_suffix() {
    let existing = files(&["Summer.xlsx", "Summer(1).xlsx", "Summer(4).xlsx"]);
    assert_eq!(
        next_available_name(&existing, "Summer", "xlsx"),
        "Summer(5).xlsx"
    );
}

#[test]
fn test_next_available_name_ignores_similar_names() {
    // Prefix matches and other extensions must not count as duplicates
    let existing = files(&["Summer Hits.xlsx", "Summer(2).csv", "Summer(x).xlsx"]);
    assert_eq!(
        next_available_name(&existing, "Summer", "xlsx"),
        "Summer.xlsx"
    );
}

#[test]
fn test_next_available_name_escapes_regex_characters() {
    let existing = files(&["Hits (2024) [Remastered].csv"]);
    assert_eq!(
        next_available_name(&existing, "Hits (2024) [Remastered]", "csv"),
        "Hits (2024) [Remastered](1).csv"
    );
}
