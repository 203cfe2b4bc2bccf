//! Persistent CLI preferences.

use super::Context;
use crate::output::{self, OutputFormat};
use anyhow::{anyhow, Result};
use butchery_auth_forms::Locale;
use butchery_config_and_utils::{Config, Paths};
use tracing::info;

/// The locale to switch to: `requested` if given, otherwise the other one.
fn target_locale(current: Locale, requested: Option<&str>) -> Result<Locale> {
    match requested {
        Some(code) => Locale::from_code(code)
            .ok_or_else(|| anyhow!("Unsupported locale '{}' (expected en or ar)", code)),
        None => Ok(current.toggled()),
    }
}

/// Write `locale` to `config.json`, keeping the file's other settings.
///
/// Starts from the file rather than the effective config so environment and
/// flag overrides are not persisted.
fn persist_locale(paths: &Paths, locale: Locale) -> Result<()> {
    let config_path = paths.config_file();
    let mut saved = if config_path.exists() {
        Config::load_from_file(&config_path)?
    } else {
        Config::default()
    };
    saved.locale = locale.code().to_string();
    saved.save(paths)?;
    Ok(())
}

/// Switch the UI language.
pub fn language(ctx: &Context, requested: Option<String>) -> Result<()> {
    let locale = target_locale(ctx.locale, requested.as_deref())?;
    persist_locale(&ctx.paths, locale)?;
    info!(from = %ctx.locale, to = %locale, "UI locale saved");

    match ctx.format {
        OutputFormat::Text => output::print_row(
            "Locale",
            &format!("{} ({})", locale, locale.direction().as_str()),
        ),
        OutputFormat::Json => output::print_json(&serde_json::json!({
            "locale": locale,
            "direction": locale.direction(),
        })),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_target_locale_toggles_without_argument() {
        assert_eq!(target_locale(Locale::En, None).unwrap(), Locale::Ar);
        assert_eq!(target_locale(Locale::Ar, None).unwrap(), Locale::En);
    }

    #[test]
    fn test_target_locale_uses_requested_code() {
        assert_eq!(target_locale(Locale::Ar, Some("ar")).unwrap(), Locale::Ar);
        assert_eq!(target_locale(Locale::Ar, Some("en-GB")).unwrap(), Locale::En);
        assert!(target_locale(Locale::En, Some("fr")).is_err());
    }

    #[test]
    fn test_persist_locale_keeps_other_settings() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());
        let existing = Config {
            api_url: "http://127.0.0.1:9000/api/v1".to_string(),
            ..Config::default()
        };
        existing.save(&paths).unwrap();

        persist_locale(&paths, Locale::Ar).unwrap();

        let saved = Config::load_from_file(&paths.config_file()).unwrap();
        assert_eq!(saved.locale, "ar");
        assert_eq!(saved.api_url, "http://127.0.0.1:9000/api/v1");
    }

    #[test]
    fn test_persist_locale_creates_config_file() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().join("home"));

        persist_locale(&paths, Locale::En).unwrap();

        let saved = Config::load_from_file(&paths.config_file()).unwrap();
        assert_eq!(saved.locale, "en");
    }
}
