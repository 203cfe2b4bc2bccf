//! # Observability
//!
//! Logging setup for the butchery storefront crates.
//!
//! Library crates only emit `tracing` events. The binary calls
//! [`init_with_config`] once at startup, which installs:
//!
//! - a JSONL layer appending one object per event to
//!   `~/.butchery/logs/dev.jsonl` (or [`LogConfig::log_path`]),
//! - an optional compact stderr layer for interactive runs.
//!
//! ```rust,ignore
//! observability::init_with_config(observability::LogConfig {
//!     service_name: "cli".into(),
//!     default_level: "debug".into(),
//!     ..Default::default()
//! });
//! tracing::info!("ready");
//! ```

mod json_layer;
mod sink;

use std::path::PathBuf;

pub use json_layer::LogEntry;
pub use sink::CentralLogWriter;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Name of the service (e.g., "cli", "storefront").
    /// Included in every log line for filtering.
    pub service_name: String,

    /// Default log level filter (e.g., "debug", "info", "warn").
    /// Can be overridden by `RUST_LOG` environment variable.
    pub default_level: String,

    /// Optional custom log file path.
    /// Defaults to `~/.butchery/logs/dev.jsonl`.
    pub log_path: Option<PathBuf>,

    /// Also emit logs to stderr for immediate feedback.
    pub also_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown".into(),
            default_level: "info".into(),
            log_path: None,
            also_stderr: false,
        }
    }
}

/// Initialize logging with custom configuration.
///
/// If the log file cannot be opened the JSONL layer is skipped and a
/// warning is emitted on whatever sinks remain; logging never aborts the
/// caller.
pub fn init_with_config(config: LogConfig) {
    sink::init_subscriber(&config);
}
