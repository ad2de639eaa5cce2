use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "pulse-bubble.log";

#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is unset
    pub default_filter: Option<String>,
    /// Write to a daily rolling file in this directory instead of stderr
    pub log_dir: Option<PathBuf>,
}

/// Install the global tracing subscriber.
///
/// Returns the appender guard when logging to a file; keep it alive for the
/// lifetime of the app or buffered lines are lost. Calling this again after a
/// subscriber is installed is harmless.
pub fn init_logging(config: &LogConfig) -> Option<WorkerGuard> {
    let default_filter = config.default_filter.as_deref().unwrap_or(DEFAULT_FILTER);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let installed = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
            match installed {
                Ok(()) => Some(guard),
                Err(e) => {
                    tracing::debug!("Logging already initialized: {}", e);
                    None
                }
            }
        }
        None => {
            if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
                tracing::debug!("Logging already initialized: {}", e);
            }
            None
        }
    }
}
