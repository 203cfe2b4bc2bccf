//! CLI command implementations.

mod auth;
mod session;
mod settings;

pub use auth::{admin_login, login, logout, register, RegisterArgs};
pub use session::{refresh, route, status};
pub use settings::language;

use crate::output::OutputFormat;
use anyhow::{Context as _, Result};
use butchery_api::ApiClient;
use butchery_auth_forms::{AuthForms, Locale};
use butchery_config_and_utils::{init_logging, Config, Paths};
use butchery_session::SessionStore;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::{debug, warn};

/// Global flags that shape the command context.
pub struct GlobalOptions {
    pub format: OutputFormat,
    pub log_level: Option<String>,
    pub locale: Option<String>,
}

/// Everything a command needs: data paths, the API client and the hydrated
/// session, wrapped by the auth forms.
pub struct Context {
    pub paths: Paths,
    pub locale: Locale,
    pub format: OutputFormat,
    pub api: ApiClient,
    pub forms: AuthForms,
}

impl Context {
    pub fn session(&self) -> &Arc<SessionStore> {
        self.forms.session()
    }
}

/// Load config, start logging and restore the stored session.
pub fn build_context(options: GlobalOptions) -> Result<Context> {
    let paths = Paths::new()?;
    let mut config = Config::load(&paths)
        .with_context(|| format!("Failed to load {}", paths.config_file().display()))?;
    if let Some(level) = options.log_level {
        config.log_level = level;
    }
    if let Some(locale) = options.locale {
        config.locale = locale;
    }

    init_logging("cli", &config, &paths, false);

    let locale = Locale::from_code(&config.locale).unwrap_or_else(|| {
        warn!(locale = %config.locale, "Unsupported locale, falling back to English");
        Locale::default()
    });

    let api = ApiClient::from_config(&config)?;
    let vault = butchery_storage::create_token_vault(&paths)?;
    let session = Arc::new(SessionStore::new(vault));
    let state = session.hydrate();
    debug!(state = %state, api_url = %api.base_url(), "CLI context ready");

    Ok(Context {
        forms: AuthForms::new(api.clone(), session),
        api,
        paths,
        locale,
        format: options.format,
    })
}

/// Use `value` if given, otherwise prompt for a line on stdin.
fn prompt_line(label: &str, value: Option<String>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Use `value` if given, otherwise prompt without echo.
fn prompt_password(value: Option<String>) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(rpassword::prompt_password("Password: ")?),
    }
}
