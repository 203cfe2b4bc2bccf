//! Submit flows for the auth pages.
//!
//! Each flow validates locally, calls the backend, updates the session and
//! returns a [`FormOutcome`]. Backend failures become a message chosen by
//! HTTP status; nothing here panics or returns the raw transport error.

use crate::i18n::MessageKey;
use crate::routes::{ADMIN, DASHBOARD, LOGIN, REGISTERED_LOGIN};
use crate::validation::{validate_login, validate_register, FieldError, LoginForm, RegisterForm};
use butchery_api::{ApiClient, ApiError, LoginResponse, RegisterRequest};
use butchery_session::SessionStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of submitting a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FormOutcome {
    /// Navigate to `target`.
    Redirect { target: String },
    /// Local validation failed; nothing was sent.
    Invalid { errors: Vec<FieldError> },
    /// The backend refused or could not be reached.
    Failed { message: MessageKey },
}

impl FormOutcome {
    fn redirect(target: &str) -> Self {
        FormOutcome::Redirect {
            target: target.to_string(),
        }
    }
}

/// Maps a login failure to its message.
fn login_failure(error: &ApiError) -> MessageKey {
    match error.status {
        401 => MessageKey::InvalidCredentials,
        _ => MessageKey::ServerError,
    }
}

/// Maps a registration failure to its message.
fn register_failure(error: &ApiError) -> MessageKey {
    match error.status {
        409 => MessageKey::EmailAlreadyExists,
        _ => MessageKey::ServerError,
    }
}

/// The success banner shown on the login page, from its query string
/// (`registered=true` after sign-up).
pub fn registered_banner(query: &str) -> Option<MessageKey> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .any(|(key, value)| key == "registered" && value == "true")
        .then_some(MessageKey::RegistrationSuccess)
}

/// The auth pages' controller: the API client plus the shared session.
#[derive(Clone)]
pub struct AuthForms {
    api: ApiClient,
    session: Arc<SessionStore>,
}

impl AuthForms {
    pub fn new(api: ApiClient, session: Arc<SessionStore>) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Create an account. The user is not logged in afterwards; they land on
    /// the login page with the success banner.
    pub async fn submit_register(&self, form: &RegisterForm) -> FormOutcome {
        let errors = validate_register(form);
        if !errors.is_empty() {
            return FormOutcome::Invalid { errors };
        }

        let request = RegisterRequest {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            password: form.password.clone(),
        };

        match self.api.register(&request).await {
            Ok(_) => FormOutcome::redirect(REGISTERED_LOGIN),
            Err(e) => {
                warn!(status = e.status, error = %e, "Registration failed");
                FormOutcome::Failed {
                    message: register_failure(&e),
                }
            }
        }
    }

    /// Customer login. An already authenticated session goes straight to
    /// the dashboard without a request.
    pub async fn submit_login(&self, form: &LoginForm) -> FormOutcome {
        if self.session.is_authenticated() {
            return FormOutcome::redirect(DASHBOARD);
        }

        let errors = validate_login(form);
        if !errors.is_empty() {
            return FormOutcome::Invalid { errors };
        }

        let result = self.api.login(&form.email, &form.password).await;
        self.finish_login(result, DASHBOARD)
    }

    /// Back-office login, redirecting to the admin area.
    pub async fn submit_admin_login(&self, form: &LoginForm) -> FormOutcome {
        let errors = validate_login(form);
        if !errors.is_empty() {
            return FormOutcome::Invalid { errors };
        }

        let result = self.api.admin_login(&form.email, &form.password).await;
        self.finish_login(result, ADMIN)
    }

    fn finish_login(
        &self,
        result: Result<LoginResponse, ApiError>,
        target: &str,
    ) -> FormOutcome {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!(status = e.status, error = %e, "Login failed");
                return FormOutcome::Failed {
                    message: login_failure(&e),
                };
            }
        };

        match self.session.login(&response.into_tokens()) {
            Ok(()) => FormOutcome::redirect(target),
            Err(e) => {
                warn!(error = %e, "Could not store session after login");
                FormOutcome::Failed {
                    message: MessageKey::ServerError,
                }
            }
        }
    }

    /// Log out. The backend is told when there is a session to revoke, but
    /// its answer never stops the local teardown.
    pub async fn logout(&self) -> FormOutcome {
        if let Some(tokens) = self.session.tokens() {
            if let Err(e) = self
                .api
                .logout(&tokens.access_token, &tokens.refresh_token)
                .await
            {
                warn!(status = e.status, error = %e, "Logout request failed, clearing local session anyway");
            }
        }

        if let Err(e) = self.session.logout() {
            warn!(error = %e, "Failed to clear stored session");
        }
        info!("Session cleared");
        FormOutcome::redirect(LOGIN)
    }
}
