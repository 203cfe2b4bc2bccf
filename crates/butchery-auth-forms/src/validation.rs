//! Client-side validation of the auth forms.
//!
//! Each field reports at most one error, the first rule it breaks, in the
//! order the rules are listed.

use crate::i18n::MessageKey;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub const PASSWORD_MIN_LENGTH: usize = 8;

/// UAE mobile: `+971` or `0`, then `5x`, then 3 and 4 digits, optionally
/// separated by single spaces. Digits are ASCII only; `\d` would also match
/// Arabic-Indic digits.
const UAE_MOBILE_PATTERN: &str = r"^(\+971|0)(5[0-9])\s?[0-9]{3}\s?[0-9]{4}$";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn uae_mobile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(UAE_MOBILE_PATTERN).expect("UAE mobile pattern is valid"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

pub fn is_valid_phone(phone: &str) -> bool {
    uae_mobile_regex().is_match(phone)
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Form fields that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Email,
    Phone,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: MessageKey,
}

impl FieldError {
    fn new(field: Field, message: MessageKey) -> Self {
        Self { field, message }
    }
}

/// Registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Login form input, shared by the customer and admin pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

fn check_email(email: &str, errors: &mut Vec<FieldError>) {
    if email.trim().is_empty() {
        errors.push(FieldError::new(Field::Email, MessageKey::EmailRequired));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(Field::Email, MessageKey::EmailInvalid));
    }
}

/// All field errors of a registration form; empty when it may be
/// submitted.
pub fn validate_register(form: &RegisterForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.full_name.trim().is_empty() {
        errors.push(FieldError::new(Field::FullName, MessageKey::FullNameRequired));
    }

    check_email(&form.email, &mut errors);

    if form.phone.trim().is_empty() {
        errors.push(FieldError::new(Field::Phone, MessageKey::PhoneRequired));
    } else if !is_valid_phone(&form.phone) {
        errors.push(FieldError::new(Field::Phone, MessageKey::PhoneInvalid));
    }

    if form.password.is_empty() {
        errors.push(FieldError::new(Field::Password, MessageKey::PasswordRequired));
    } else if form.password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.push(FieldError::new(Field::Password, MessageKey::PasswordMinLength));
    }

    errors
}

/// All field errors of a login form. Only presence is checked for the
/// password; the backend decides whether it is right.
pub fn validate_login(form: &LoginForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    check_email(&form.email, &mut errors);

    if form.password.is_empty() {
        errors.push(FieldError::new(Field::Password, MessageKey::PasswordRequired));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_registration() -> RegisterForm {
        RegisterForm {
            full_name: "Omar Haddad".to_string(),
            email: "omar@example.com".to_string(),
            phone: "0501234567".to_string(),
            password: "supersecret".to_string(),
        }
    }

    #[test]
    fn test_phone_accepts_uae_mobiles() {
        assert!(is_valid_phone("+971501234567"));
        assert!(is_valid_phone("0501234567"));
        assert!(is_valid_phone("+97155 123 4567"));
        assert!(is_valid_phone("058 1234567"));
    }

    #[test]
    fn test_phone_rejects_others() {
        // Landline prefix
        assert!(!is_valid_phone("0441234567"));
        // One digit short
        assert!(!is_valid_phone("050123456"));
        assert!(!is_valid_phone("05012345678"));
        assert!(!is_valid_phone("971501234567"));
        assert!(!is_valid_phone("050  1234567"));
        // Arabic-Indic digits
        assert!(!is_valid_phone("050١٢٣٤٥٦٧"));
        assert!(!is_valid_phone("+971٥٠١٢٣٤٥٦٧"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("omar@example.com"));
        assert!(is_valid_email("o.m+tag@mail.example.ae"));
        assert!(!is_valid_email("omar"));
        assert!(!is_valid_email("omar@example"));
        assert!(!is_valid_email("omar @example.com"));
    }

    #[test]
    fn test_valid_registration_has_no_errors() {
        assert!(validate_register(&valid_registration()).is_empty());
    }

    #[test]
    fn test_empty_registration_reports_required_fields() {
        let errors = validate_register(&RegisterForm::default());
        assert_eq!(
            errors,
            vec![
                FieldError::new(Field::FullName, MessageKey::FullNameRequired),
                FieldError::new(Field::Email, MessageKey::EmailRequired),
                FieldError::new(Field::Phone, MessageKey::PhoneRequired),
                FieldError::new(Field::Password, MessageKey::PasswordRequired),
            ]
        );
    }

    #[test]
    fn test_registration_format_errors() {
        let form = RegisterForm {
            full_name: "  ".to_string(),
            email: "not-an-email".to_string(),
            phone: "0441234567".to_string(),
            password: "short".to_string(),
        };

        assert_eq!(
            validate_register(&form),
            vec![
                FieldError::new(Field::FullName, MessageKey::FullNameRequired),
                FieldError::new(Field::Email, MessageKey::EmailInvalid),
                FieldError::new(Field::Phone, MessageKey::PhoneInvalid),
                FieldError::new(Field::Password, MessageKey::PasswordMinLength),
            ]
        );
    }

    #[test]
    fn test_password_length_boundary() {
        let mut form = valid_registration();
        form.password = "1234567".to_string();
        assert_eq!(
            validate_register(&form),
            vec![FieldError::new(Field::Password, MessageKey::PasswordMinLength)]
        );

        form.password = "12345678".to_string();
        assert!(validate_register(&form).is_empty());
    }

    #[test]
    fn test_login_validation() {
        assert!(validate_login(&LoginForm {
            email: "omar@example.com".to_string(),
            password: "x".to_string(),
        })
        .is_empty());

        assert_eq!(
            validate_login(&LoginForm::default()),
            vec![
                FieldError::new(Field::Email, MessageKey::EmailRequired),
                FieldError::new(Field::Password, MessageKey::PasswordRequired),
            ]
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::FullName.as_str(), "full_name");
        assert_eq!(Field::Password.as_str(), "password");
    }
}
