//! Register and login forms for the storefront.
//!
//! This crate provides:
//! - Local validation with field-keyed messages
//! - Submit flows that call the auth endpoints, update the session and
//!   map failures to a user-facing message by HTTP status
//! - Route gating for the protected pages
//! - English and Arabic message catalogs, with locale path prefixes

mod flows;
mod i18n;
mod routes;
mod validation;

pub use flows::{registered_banner, AuthForms, FormOutcome};
pub use i18n::{localized_path, split_locale, Locale, MessageKey, TextDirection};
pub use routes::{gate, RouteDecision, ADMIN, ADMIN_LOGIN, DASHBOARD, LOGIN, REGISTER, REGISTERED_LOGIN};
pub use validation::{
    is_valid_email, is_valid_phone, validate_login, validate_register, Field, FieldError,
    LoginForm, RegisterForm, PASSWORD_MIN_LENGTH,
};
