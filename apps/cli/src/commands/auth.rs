//! Authentication commands.

use super::{prompt_line, prompt_password, Context};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use butchery_auth_forms::{
    localized_path, registered_banner, FormOutcome, LoginForm, MessageKey, RegisterForm,
};

/// Registration fields given on the command line. Missing ones are
/// prompted for.
pub struct RegisterArgs {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

/// Print a form outcome. `success` is shown in front of the redirect.
fn report(ctx: &Context, outcome: &FormOutcome, success: Option<MessageKey>) {
    let locale = ctx.locale;

    if let OutputFormat::Json = ctx.format {
        output::print_json(&serde_json::json!({
            "locale": locale,
            "direction": locale.direction(),
            "result": outcome,
        }));
        return;
    }

    match outcome {
        FormOutcome::Redirect { target } => {
            if let Some(key) = success {
                println!("{}", output::localized(key, locale));
            }
            output::print_row("Next", &localized_path(locale, target));
        }
        FormOutcome::Invalid { errors } => {
            for error in errors {
                eprintln!(
                    "{}: {}",
                    error.field.as_str(),
                    output::localized(error.message, locale)
                );
            }
        }
        FormOutcome::Failed { message } => {
            output::print_error(&output::localized(*message, locale), &ctx.format);
        }
    }
}

/// Create an account with the register form.
pub async fn register(ctx: &Context, args: RegisterArgs) -> Result<()> {
    if let OutputFormat::Text = ctx.format {
        println!("{}", output::localized(MessageKey::RegisterHeading, ctx.locale));
    }

    let form = RegisterForm {
        full_name: prompt_line("Full name", args.full_name)?,
        email: prompt_line("Email", args.email)?,
        phone: prompt_line("Phone", args.phone)?,
        password: prompt_password(args.password)?,
    };

    let outcome = ctx.forms.submit_register(&form).await;
    let banner = match &outcome {
        FormOutcome::Redirect { target } => target
            .split_once('?')
            .and_then(|(_, query)| registered_banner(query)),
        _ => None,
    };
    report(ctx, &outcome, banner);
    Ok(())
}

/// Login with email and password.
pub async fn login(ctx: &Context, email: Option<String>, password: Option<String>) -> Result<()> {
    if ctx.session().is_authenticated() {
        let outcome = ctx.forms.submit_login(&LoginForm::default()).await;
        report(ctx, &outcome, None);
        return Ok(());
    }

    if let OutputFormat::Text = ctx.format {
        println!("{}", output::localized(MessageKey::LoginHeading, ctx.locale));
    }

    let form = LoginForm {
        email: prompt_line("Email", email)?,
        password: prompt_password(password)?,
    };
    let outcome = ctx.forms.submit_login(&form).await;
    report(ctx, &outcome, None);
    Ok(())
}

/// Login to the back office.
pub async fn admin_login(
    ctx: &Context,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    if let OutputFormat::Text = ctx.format {
        println!("{}", output::localized(MessageKey::AdminLoginHeading, ctx.locale));
    }

    let form = LoginForm {
        email: prompt_line("Email", email)?,
        password: prompt_password(password)?,
    };
    let outcome = ctx.forms.submit_admin_login(&form).await;
    report(ctx, &outcome, None);
    Ok(())
}

/// Logout and clear session.
pub async fn logout(ctx: &Context) -> Result<()> {
    let outcome = ctx.forms.logout().await;
    report(ctx, &outcome, Some(MessageKey::LoggedOut));
    Ok(())
}
