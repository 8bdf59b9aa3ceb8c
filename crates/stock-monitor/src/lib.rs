//! Logging setup.

mod logging;

pub use logging::{build_filter, file_appender, setup_logging, LogGuard};
