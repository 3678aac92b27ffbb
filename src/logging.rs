use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the diagnostic tracing subscriber on stderr.
///
/// Console output meant for the user goes through the `info!`, `success!`,
/// `warning!` and `error!` macros; tracing carries request, retry and
/// backoff diagnostics and is silent below `warn` unless `RUST_LOG` says
/// otherwise.
pub fn init_tracing() {
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}
