use crate::config::LogConfig;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default log directory: `~/.astmill/logs`.
pub fn default_log_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".astmill").join("logs")
}

/// Installs the global subscriber. Keep the returned guard alive for as long
/// as the file writer should flush.
pub fn init_logging(config: &LogConfig) -> WorkerGuard {
    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    let _ = std::fs::create_dir_all(&log_dir);

    // Files roll daily with the component as prefix, e.g. cli.log.2024-01-21
    let file_appender = tracing_appender::rolling::daily(&log_dir, &config.component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    // Mining runs print progress to the terminal; library users usually only want the file.
    if config.to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).init();
    } else {
        registry.init();
    }

    guard
}
