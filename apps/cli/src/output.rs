//! Output formatting for the CLI.

use butchery_auth_forms::{Locale, MessageKey};
use clap::ValueEnum;
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Right-to-left embedding and its terminator.
const RLE: char = '\u{202B}';
const PDF: char = '\u{202C}';

/// Wrap `text` in a right-to-left embedding for RTL locales so terminals
/// lay it out correctly.
pub fn directional(text: &str, locale: Locale) -> String {
    if locale.is_rtl() {
        format!("{RLE}{text}{PDF}")
    } else {
        text.to_string()
    }
}

/// Localized text of `key`, wrapped for the locale's direction.
pub fn localized(key: MessageKey, locale: Locale) -> String {
    directional(locale.message(key), locale)
}

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: could not encode output: {}", e),
    }
}

/// Print a success message.
pub fn print_success(message: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", message),
        OutputFormat::Json => {
            print_json(&serde_json::json!({ "status": "success", "message": message }));
        }
    }
}

/// Print an error message.
pub fn print_error(message: &str, format: &OutputFormat) {
    match format {
        OutputFormat::Text => eprintln!("Error: {}", message),
        OutputFormat::Json => {
            let json = serde_json::json!({ "status": "error", "message": message });
            eprintln!("{}", json);
        }
    }
}

/// Print a table row.
pub fn print_row(label: &str, value: &str) {
    println!("{:<10}{}", format!("{}:", label), value);
}
