//! Configuration, file system paths, and logging setup for the butchery
//! storefront client.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{
    Config, DEFAULT_API_URL, DEFAULT_LOCALE, DEFAULT_LOG_LEVEL, ENV_API_URL, ENV_LOCALE,
    ENV_LOG_LEVEL,
};
pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use paths::{Paths, ENV_HOME};
