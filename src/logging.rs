//! Diagnostic logging.
//!
//! Logs go to stderr and to a daily rolling file in XDG_DATA_HOME/now-feed/logs/
//! (or the platform equivalent). File writes happen on a background worker so the
//! UI thread never blocks on disk.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

const LOG_FILE_PREFIX: &str = "now-feed.log";

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `fallback_filter`. The returned guard flushes the file
/// writer when dropped and must be held for the lifetime of the program. `None`
/// means file logging is unavailable; stderr logging still works.
pub fn init_logging(fallback_filter: &str) -> Option<WorkerGuard> {
    let filter = build_filter(fallback_filter);
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = match get_log_directory().and_then(|dir| {
        fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create log directory: {}", e))?;
        Ok(dir)
    }) {
        Ok(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(rolling::daily(dir, LOG_FILE_PREFIX));
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        Err(e) => {
            eprintln!("File logging disabled: {}", e);
            (None, None)
        }
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
    if installed.is_err() {
        // A subscriber is already set (tests, embedding); keep it.
        return None;
    }
    guard
}

fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Get the platform-specific log directory using XDG conventions
fn get_log_directory() -> Result<PathBuf, String> {
    let base = directories::BaseDirs::new().ok_or("Failed to determine home directory")?;

    // Use XDG_DATA_HOME on Linux, equivalent on other platforms
    let data_dir = base.data_dir();
    Ok(data_dir.join("now-feed").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_exists() {
        let result = get_log_directory();
        assert!(result.is_ok());
        let path = result.unwrap();
        assert!(path.to_string_lossy().contains("now-feed"));
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        // An unparsable directive must not panic.
        let _ = build_filter("now_feed=[[[");
        let _ = build_filter(DEFAULT_LOG_FILTER);
    }
}
