//! # Spotify Integration Module
//!
//! This module is the integration layer between spex and the Spotify Web API.
//! It authenticates with the client-credentials flow, executes GET requests
//! with retry handling for expired tokens and rate limits, and walks paginated
//! playlist track collections.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, HTTP service)
//!          ↓
//! playlist  - assembler and paginator
//!          ↓
//! client    - ClientSession: resilient request executor
//!          ↓
//! auth      - client-credentials token exchange (via management::TokenManager)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Request Executor
//!
//! [`ClientSession::execute`] issues a single GET and classifies the status:
//!
//! - **2xx** - body is parsed as JSON; a parse failure is a decode error
//! - **401** - the token is refreshed and the GET is retried exactly once
//! - **429** - the backoff delay is started at 200ms or doubled, the executor
//!   sleeps for it and retries exactly once
//! - **other** - no retry; the error carries the status and the message from
//!   the Spotify error body
//!
//! The backoff delay lives on the session. Every request sleeps for the current
//! delay before it is sent, so one rate-limit event slows down the rest of the
//! run unless [`BackoffPolicy::reset_on_success`] is enabled.
//!
//! ## Concurrency
//!
//! A session is used through `&mut` and every request is awaited before the
//! next one is sent. Nothing is issued concurrently within one fetch.
//!
//! ## Example
//!
//! ```rust
//! let settings = config::Settings::from_env()?;
//! let mut session = spotify::ClientSession::connect(&settings).await?;
//! let playlist = spotify::playlist::get_playlist(&mut session, "37i9dQZF1DXcBWIGoYBM5M").await?;
//! for record in playlist.data.items {
//!     println!("{}", record.track_request.track_title);
//! }
//! ```

pub mod auth;
pub mod client;
pub mod playlist;

pub use client::{ApiResponse, ApiResult, BackoffPolicy, ClientSession};
