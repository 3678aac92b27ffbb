//! # CLI Module
//!
//! Command implementations behind the `spex` binary. Each command loads its
//! configuration, drives the library and reports progress and failures with
//! the crate's console macros.
//!
//! ## Commands
//!
//! - [`export`] - Fetch a playlist and write it as XLSX, CSV or JSON
//! - [`serve`] - Run the playlist HTTP service
//!
//! ## Usage Patterns
//!
//! ```bash
//! spex export "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc"
//! spex export 37i9dQZF1DXcBWIGoYBM5M --format csv --output-dir exports --preview
//! spex serve --addr 0.0.0.0:8000
//! ```

mod export;
mod serve;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use export::{FETCH_ATTEMPTS, export, fetch_with_retries};
pub use serve::serve;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
