//! Configuration management for the Spotify Playlist Exporter.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, endpoints, server settings and
//! the limits applied by the request executor.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the current working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use crate::{error::ConfigError, spotify::BackoffPolicy};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BACKOFF_MAX_SECS: u64 = 60;

/// Loads environment variables from `.env` files.
///
/// The working directory is tried first, then the platform-specific local data
/// directory under `spex/.env`. Values that are already present in the process
/// environment are never overwritten, and a missing file is not an error.
///
/// # Directory Structure
///
/// The data directory file is looked up in:
/// - Linux: `~/.local/share/spex/.env`
/// - macOS: `~/Library/Application Support/spex/.env`
/// - Windows: `%LOCALAPPDATA%/spex/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or a `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spex/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    for candidate in [PathBuf::from(".env"), path] {
        if candidate.is_file() {
            dotenv::from_path(&candidate)
                .map_err(|e| format!("{}: {}", candidate.display(), e))?;
        }
    }

    Ok(())
}

/// Returns the client id used for the client-credentials exchange.
pub fn client_id() -> Result<String, ConfigError> {
    required("CLIENT_ID")
}

/// Returns the client secret used for the client-credentials exchange.
///
/// The secret should be kept confidential and never exposed in logs
/// or version control.
pub fn client_secret() -> Result<String, ConfigError> {
    required("CLIENT_SECRET")
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL")
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Returns the token endpoint for the client-credentials exchange.
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the address the playlist service binds to.
pub fn server_addr() -> String {
    optional("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the directory exports are written to.
pub fn export_dir() -> PathBuf {
    optional("SPEX_EXPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the timeout applied to every single HTTP request.
pub fn request_timeout() -> Result<Duration, ConfigError> {
    parsed("SPEX_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS).map(Duration::from_secs)
}

/// Returns the rate-limit backoff policy.
///
/// `SPEX_BACKOFF_MAX_SECS` caps the escalating delay, `SPEX_BACKOFF_RESET`
/// makes a successful response clear the delay again.
pub fn backoff_policy() -> Result<BackoffPolicy, ConfigError> {
    let max_delay = Duration::from_secs(parsed("SPEX_BACKOFF_MAX_SECS", DEFAULT_BACKOFF_MAX_SECS)?);
    let reset_on_success = parsed("SPEX_BACKOFF_RESET", false)?;

    Ok(BackoffPolicy {
        max_delay,
        reset_on_success,
        ..BackoffPolicy::default()
    })
}

/// Everything a [`crate::spotify::ClientSession`] needs to talk to Spotify.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub api_url: String,
    pub token_url: String,
    pub request_timeout: Duration,
    pub backoff: BackoffPolicy,
}

impl Settings {
    /// Builds settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: client_id()?,
            client_secret: client_secret()?,
            api_url: spotify_apiurl(),
            token_url: spotify_apitoken_url(),
            request_timeout: request_timeout()?,
            backoff: backoff_policy()?,
        })
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    optional(key).ok_or(ConfigError::Missing(key))
}

fn parsed<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
