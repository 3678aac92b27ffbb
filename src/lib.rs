//! Spotify Playlist Exporter Library
//!
//! This library fetches the complete track listing of a Spotify playlist,
//! enriches every track with album metadata and reshapes the result into the
//! Lime Blue cataloguing format (DD/MM/YYYY dates, hh:mm:ss durations) ready to
//! be exported as a spreadsheet or delimited file.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints served by the optional playlist service
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types shared by the client, config and exporter
//! - `formatter` - Lime Blue row formatting and document rendering
//! - `logging` - Diagnostic tracing setup
//! - `management` - Token handling and export file management
//! - `server` - HTTP server wiring for the playlist service
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spex::{config, spotify};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     config::load_env().await?;
//!     let settings = config::Settings::from_env()?;
//!     let mut session = spotify::ClientSession::connect(&settings).await?;
//!     let playlist = spotify::playlist::get_playlist(&mut session, "37i9dQZF1DXcBWIGoYBM5M").await?;
//!     println!("{} tracks", playlist.data.items.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Exported {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only meant for the binary's command handlers. Library code and the HTTP
/// service return errors instead of calling this macro.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Album lookup failed for {}", album_id);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
