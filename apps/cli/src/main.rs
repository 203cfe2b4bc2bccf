//! Butchery CLI - register, log in and manage the storefront session.

mod commands;
mod output;

use clap::{Parser, Subcommand};

/// Butchery CLI - storefront account and session management.
#[derive(Parser)]
#[command(name = "butchery")]
#[command(about = "Butchery CLI for customer registration, login and session management")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error); overrides the config
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// UI locale (en or ar); overrides BUTCHERY_LOCALE and the config
    #[arg(long, global = true)]
    locale: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a customer account
    Register {
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// UAE mobile number, e.g. +971501234567
        #[arg(long)]
        phone: Option<String>,
        /// Password (prompted without echo when omitted)
        #[arg(long, env = "BUTCHERY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Login with email and password
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long, env = "BUTCHERY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Logout and clear session
    Logout,

    /// Check authentication status
    Status,

    /// Exchange the refresh token for a new access token
    Refresh,

    /// Show whether a page renders or redirects for the current session
    Route {
        /// Page path, optionally locale-prefixed (e.g. /ar/dashboard)
        path: String,
    },

    /// Switch the UI language (toggles between en and ar when omitted)
    Language {
        /// Locale to switch to (en or ar)
        locale: Option<String>,
    },

    /// Back-office commands
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },
}

#[derive(Subcommand)]
enum AdminCommands {
    /// Login as an administrator
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long, env = "BUTCHERY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let ctx = match commands::build_context(commands::GlobalOptions {
        format: cli.format,
        log_level: cli.log_level,
        locale: cli.locale,
    }) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Register {
            full_name,
            email,
            phone,
            password,
        } => {
            commands::register(
                &ctx,
                commands::RegisterArgs {
                    full_name,
                    email,
                    phone,
                    password,
                },
            )
            .await
        }
        Commands::Login { email, password } => commands::login(&ctx, email, password).await,
        Commands::Logout => commands::logout(&ctx).await,
        Commands::Status => commands::status(&ctx),
        Commands::Refresh => commands::refresh(&ctx).await,
        Commands::Route { path } => commands::route(&ctx, &path),
        Commands::Language { locale } => commands::language(&ctx, locale),
        Commands::Admin { command } => match command {
            AdminCommands::Login { email, password } => {
                commands::admin_login(&ctx, email, password).await
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_admin_login_with_global_flags() {
        let cli = Cli::try_parse_from([
            "butchery",
            "admin",
            "login",
            "--email",
            "admin@butchery.ae",
            "--locale",
            "ar",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.locale.as_deref(), Some("ar"));
        assert!(matches!(cli.format, output::OutputFormat::Json));
        match cli.command {
            Commands::Admin {
                command: AdminCommands::Login { email, .. },
            } => assert_eq!(email.as_deref(), Some("admin@butchery.ae")),
            _ => panic!("expected admin login"),
        }
    }

    #[test]
    fn test_parse_language_with_and_without_locale() {
        let cli = Cli::try_parse_from(["butchery", "language", "ar"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Language { locale } if locale.as_deref() == Some("ar")
        ));

        let cli = Cli::try_parse_from(["butchery", "language"]).unwrap();
        assert!(matches!(cli.command, Commands::Language { locale: None }));
    }

    #[test]
    fn test_parse_route() {
        let cli = Cli::try_parse_from(["butchery", "route", "/ar/dashboard"]).unwrap();
        assert!(matches!(cli.command, Commands::Route { path } if path == "/ar/dashboard"));
    }
}
