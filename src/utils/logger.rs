use chrono::Local;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Log file for this run, named with the run's start time.
pub fn default_log_path() -> PathBuf {
    PathBuf::from(format!(
        "vc-assign-{}.log",
        Local::now().format("%Y_%m_%d-%H%M%S")
    ))
}

/// Installs two sinks: a compact console layer at info-and-above (overridable
/// via `RUST_LOG`) and a per-run file receiving debug-and-above.
///
/// The returned guard flushes and closes the file sink when dropped; hold it
/// in `main` so the file is written out on every exit path.
pub fn init_logger(log_path: &Path) -> std::io::Result<WorkerGuard> {
    // Append-only: a second run landing on the same path must not truncate
    // an earlier run's log.
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact()
                .with_filter(console_filter),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(LevelFilter::DEBUG),
        )
        .init();

    Ok(guard)
}
