//! Logging initialization for the storefront client.
//!
//! Thin wrapper over the observability package so every binary writes the
//! same JSONL stream to `<data dir>/logs/dev.jsonl`.

use crate::{Config, Paths};

/// Initialize logging for a service.
///
/// The level comes from `RUST_LOG` when set, else from `config.log_level`.
/// `also_stderr` mirrors events to stderr in compact form.
///
/// ```ignore
/// init_logging("cli", &config, &paths, false);
/// tracing::info!("storefront client started");
/// ```
pub fn init_logging(service_name: &str, config: &Config, paths: &Paths, also_stderr: bool) {
    observability::init_with_config(observability::LogConfig {
        service_name: service_name.into(),
        default_level: config.log_level.clone(),
        log_path: Some(paths.log_file()),
        also_stderr,
    });
}
