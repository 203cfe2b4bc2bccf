//! Session inspection commands.

use super::Context;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use butchery_auth_forms::{gate, localized_path, split_locale, MessageKey, RouteDecision};
use tracing::{info, warn};

/// Check authentication status.
pub fn status(ctx: &Context) -> Result<()> {
    let session = ctx.session();
    let state = session.state();

    match ctx.format {
        OutputFormat::Text => {
            output::print_row("Session", &state.to_string());
            output::print_row(
                "Auth",
                if session.is_authenticated() {
                    "logged in"
                } else {
                    "not logged in"
                },
            );
            output::print_row("API", ctx.api.base_url());
            output::print_row(
                "Locale",
                &format!("{} ({})", ctx.locale, ctx.locale.direction().as_str()),
            );
        }
        OutputFormat::Json => {
            output::print_json(&serde_json::json!({
                "state": state,
                "logged_in": session.is_authenticated(),
                "api_url": ctx.api.base_url(),
                "locale": ctx.locale,
                "direction": ctx.locale.direction(),
            }));
        }
    }

    Ok(())
}

/// Exchange the refresh token for a new access token.
pub async fn refresh(ctx: &Context) -> Result<()> {
    let session = ctx.session();
    let refresh_token = match session.tokens() {
        Some(tokens) => tokens.refresh_token,
        None => {
            output::print_error("Not logged in", &ctx.format);
            return Ok(());
        }
    };

    match ctx.api.refresh(&refresh_token).await {
        Ok(response) => {
            session.replace_access_token(&response.access_token)?;
            info!(expires_in = ?response.expires_in, "Access token refreshed");
            output::print_success("Session refreshed", &ctx.format);
        }
        Err(e) if e.has_status(401) => {
            warn!(error = %e, "Refresh token rejected, clearing session");
            session.logout()?;
            output::print_error("Session expired, please log in again", &ctx.format);
        }
        Err(e) => {
            output::print_error(&format!("Refresh failed: {}", e), &ctx.format);
        }
    }

    Ok(())
}

/// Show what a page would do for the current session.
pub fn route(ctx: &Context, path: &str) -> Result<()> {
    let (locale, bare) = split_locale(path);
    let prefixed = bare != path;
    let decision = match gate(&bare, ctx.session().state()) {
        RouteDecision::Redirect(target) if prefixed => {
            RouteDecision::Redirect(localized_path(locale, &target))
        }
        decision => decision,
    };

    match ctx.format {
        OutputFormat::Text => match &decision {
            RouteDecision::Render => output::print_row("Route", "render"),
            RouteDecision::RenderNeutral => {
                output::print_row("Route", "render neutral");
                println!("{}", output::localized(MessageKey::Loading, locale));
            }
            RouteDecision::Redirect(target) => output::print_row("Redirect", target),
        },
        OutputFormat::Json => output::print_json(&serde_json::json!({
            "path": path,
            "locale": locale,
            "direction": locale.direction(),
            "decision": decision,
        })),
    }

    Ok(())
}
