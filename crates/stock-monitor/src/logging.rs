//! Logging setup.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Keeps the file writer flushing; drop it only at shutdown.
pub type LogGuard = Option<WorkerGuard>;

/// `RUST_LOG` if set, otherwise `level`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Open `path` for appending, creating its directory if needed.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stock-analyzer.log".to_string());

    RollingFileAppender::builder().filename_prefix(name).build(dir)
}

/// Setup logging with the given level.
///
/// Console output is pretty or JSON. When `file` is given, events are also
/// appended to it through a non-blocking writer.
pub fn setup_logging(level: &str, json: bool, file: Option<&Path>) -> Result<LogGuard, InitError> {
    let (file_layer, guard) = match file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).json();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // Console output goes to stderr so stdout stays clean for reports.
    if json {
        tracing_subscriber::registry()
            .with(build_filter(level))
            .with(file_layer)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(build_filter(level))
            .with(file_layer)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "stock_analysis=debug"] {
            let filter = build_filter(level);
            assert!(!filter.to_string().is_empty());
        }
    }

    #[test]
    fn test_file_appender_reports_bad_directory() {
        // A regular file cannot serve as the log directory.
        let blocker = std::env::temp_dir().join(format!("stock-log-{}", std::process::id()));
        std::fs::write(&blocker, b"").unwrap();

        let result = file_appender(&blocker.join("nested").join("app.log"));
        std::fs::remove_file(&blocker).ok();

        assert!(result.is_err());
    }

    #[test]
    fn test_file_appender_creates_file() {
        let dir = std::env::temp_dir().join(format!("stock-logs-{}", std::process::id()));
        let path = dir.join("app.log");

        let result = file_appender(&path);
        let created = path.exists();
        std::fs::remove_dir_all(&dir).ok();

        assert!(result.is_ok());
        assert!(created);
    }
}
