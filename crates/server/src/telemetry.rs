//! Telemetry setup: console plus per-process log file.
//!
//! Mirrors the service's operational contract: everything a run logs
//! also lands in a date-stamped file under `./logs/`, named after the
//! process role ("serve", "train").

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber with console and file layers.
///
/// The returned guard must be held for the life of the process so the
/// non-blocking file writer flushes on shutdown.
pub fn init(name: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("./logs", format!("{name}.log"));
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    guard
}
