//! Error types for the Spotify client, configuration and export layers.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Message used when an error body carries no `error.message` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "No error message provided";

/// Failure of a single remote call, after the executor's retries.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The client-credentials exchange failed.
    #[error("token exchange failed: {message}")]
    Auth {
        status: Option<StatusCode>,
        message: String,
    },

    /// The API rejected the request and no retry applies (or the retry failed too).
    #[error("request failed with status {status}: {message}")]
    Http { status: StatusCode, message: String },

    /// The response body was not valid JSON or did not have the expected shape.
    #[error("malformed response body: {message}")]
    Decode {
        status: Option<StatusCode>,
        message: String,
    },

    /// Still rate limited after backing off, or the backoff ceiling was reached.
    #[error("rate limit exceeded (backoff delay {delay:?})")]
    RateLimitExceeded { delay: Duration },

    /// Network level failure: connection, timeout, TLS.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// HTTP status that accompanied the failure, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Auth { status, .. } | ApiError::Decode { status, .. } => *status,
            ApiError::Http { status, .. } => Some(*status),
            ApiError::RateLimitExceeded { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            ApiError::Transport(err) => err.status(),
        }
    }

    /// Whether a fresh attempt at the whole fetch has a chance to succeed.
    pub fn is_transient(&self) -> bool {
        match self.status() {
            Some(status) => {
                status == StatusCode::UNAUTHORIZED
                    || status == StatusCode::TOO_MANY_REQUESTS
                    || status.is_server_error()
            }
            None => matches!(self, ApiError::Transport(_)),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
