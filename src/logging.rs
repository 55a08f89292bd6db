use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file. Unset means no logging at all.
pub const LOG_ENV: &str = "ADMIN_GRID_LOG";

/// Initialize tracing with optional file output.
///
/// The console owns the terminal, so nothing is ever written to stderr.
/// Set `ADMIN_GRID_LOG` to a file path to enable logging; `RUST_LOG`
/// filters as usual and defaults to `info`.
///
/// Files are named `{path}.{timestamp}.{pid}` so concurrent consoles never
/// share one.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV).ok() else {
        return;
    };

    let Ok(file) = std::fs::File::create(unique_log_path(&log_path)) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

fn unique_log_path(base: &str) -> String {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{base}.{timestamp}.{pid}")
}
