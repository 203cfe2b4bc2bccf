//! Locales and the message catalog.

use serde::{Deserialize, Serialize, Serializer};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Parse a locale code, case-insensitively. Region suffixes such as
    /// `ar-AE` are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        let language = code.trim().split(['-', '_']).next().unwrap_or_default();
        if language.eq_ignore_ascii_case("en") {
            Some(Locale::En)
        } else if language.eq_ignore_ascii_case("ar") {
            Some(Locale::Ar)
        } else {
            None
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    pub fn direction(&self) -> TextDirection {
        if self.is_rtl() {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// The other supported locale, for a language switcher.
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    /// Localized text for `key`.
    pub fn message(&self, key: MessageKey) -> &'static str {
        match self {
            Locale::En => english(key),
            Locale::Ar => arabic(key),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Split a leading locale segment off `path`.
///
/// `/ar/login` gives `(Ar, "/login")`. A path without a known locale prefix
/// is returned unchanged with the default locale.
pub fn split_locale(path: &str) -> (Locale, String) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (first, rest) = match trimmed.find(['/', '?']) {
        Some(idx) => trimmed.split_at(idx),
        None => (trimmed, ""),
    };

    match Locale::ALL.iter().find(|l| l.code() == first) {
        Some(locale) => {
            let rest = if rest.starts_with('/') {
                rest.to_string()
            } else {
                format!("/{}", rest)
            };
            (*locale, rest)
        }
        None => (Locale::default(), path.to_string()),
    }
}

/// Prefix `path` with the locale segment, e.g. `/ar/dashboard`.
pub fn localized_path(locale: Locale, path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    if path.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{}", locale.code(), path)
    }
}

/// Every user-facing string the auth pages show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    LoginHeading,
    RegisterHeading,
    AdminLoginHeading,
    RegistrationSuccess,
    LoggedOut,
    Loading,
    FullNameRequired,
    EmailRequired,
    EmailInvalid,
    PhoneRequired,
    PhoneInvalid,
    PasswordRequired,
    PasswordMinLength,
    EmailAlreadyExists,
    InvalidCredentials,
    ServerError,
}

impl MessageKey {
    pub const ALL: [MessageKey; 16] = [
        MessageKey::LoginHeading,
        MessageKey::RegisterHeading,
        MessageKey::AdminLoginHeading,
        MessageKey::RegistrationSuccess,
        MessageKey::LoggedOut,
        MessageKey::Loading,
        MessageKey::FullNameRequired,
        MessageKey::EmailRequired,
        MessageKey::EmailInvalid,
        MessageKey::PhoneRequired,
        MessageKey::PhoneInvalid,
        MessageKey::PasswordRequired,
        MessageKey::PasswordMinLength,
        MessageKey::EmailAlreadyExists,
        MessageKey::InvalidCredentials,
        MessageKey::ServerError,
    ];

    /// Stable catalog id, as used by the web front end.
    pub fn id(&self) -> &'static str {
        match self {
            MessageKey::LoginHeading => "auth.loginHeading",
            MessageKey::RegisterHeading => "auth.registerHeading",
            MessageKey::AdminLoginHeading => "auth.adminLoginHeading",
            MessageKey::RegistrationSuccess => "auth.registrationSuccess",
            MessageKey::LoggedOut => "auth.loggedOut",
            MessageKey::Loading => "common.loading",
            MessageKey::FullNameRequired => "auth.register.fullNameRequired",
            MessageKey::EmailRequired => "auth.emailRequired",
            MessageKey::EmailInvalid => "auth.emailInvalid",
            MessageKey::PhoneRequired => "auth.register.phoneRequired",
            MessageKey::PhoneInvalid => "auth.register.phoneInvalid",
            MessageKey::PasswordRequired => "auth.passwordRequired",
            MessageKey::PasswordMinLength => "auth.register.passwordMinLength",
            MessageKey::EmailAlreadyExists => "auth.register.emailAlreadyExists",
            MessageKey::InvalidCredentials => "auth.login.invalidCredentials",
            MessageKey::ServerError => "auth.serverError",
        }
    }
}

impl Serialize for MessageKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::LoginHeading => "Log in to your account",
        MessageKey::RegisterHeading => "Create your account",
        MessageKey::AdminLoginHeading => "Admin login",
        MessageKey::RegistrationSuccess => "Your account has been created. Please log in.",
        MessageKey::LoggedOut => "You have been logged out.",
        MessageKey::Loading => "Loading…",
        MessageKey::FullNameRequired => "Full name is required",
        MessageKey::EmailRequired => "Email is required",
        MessageKey::EmailInvalid => "Please enter a valid email address",
        MessageKey::PhoneRequired => "Phone number is required",
        MessageKey::PhoneInvalid => "Please enter a valid UAE mobile number",
        MessageKey::PasswordRequired => "Password is required",
        MessageKey::PasswordMinLength => "Password must be at least 8 characters",
        MessageKey::EmailAlreadyExists => "An account with this email already exists",
        MessageKey::InvalidCredentials => "Invalid email or password",
        MessageKey::ServerError => "Something went wrong. Please try again later.",
    }
}

fn arabic(key: MessageKey) -> &'static str {
    match key {
        MessageKey::LoginHeading => "تسجيل الدخول إلى حسابك",
        MessageKey::RegisterHeading => "إنشاء حساب جديد",
        MessageKey::AdminLoginHeading => "دخول المسؤول",
        MessageKey::RegistrationSuccess => "تم إنشاء حسابك بنجاح. يرجى تسجيل الدخول.",
        MessageKey::LoggedOut => "تم تسجيل خروجك.",
        MessageKey::Loading => "جارٍ التحميل…",
        MessageKey::FullNameRequired => "الاسم الكامل مطلوب",
        MessageKey::EmailRequired => "البريد الإلكتروني مطلوب",
        MessageKey::EmailInvalid => "يرجى إدخال بريد إلكتروني صالح",
        MessageKey::PhoneRequired => "رقم الهاتف مطلوب",
        MessageKey::PhoneInvalid => "يرجى إدخال رقم جوال إماراتي صالح",
        MessageKey::PasswordRequired => "كلمة المرور مطلوبة",
        MessageKey::PasswordMinLength => "يجب ألا تقل كلمة المرور عن 8 أحرف",
        MessageKey::EmailAlreadyExists => "يوجد حساب مسجل بهذا البريد الإلكتروني",
        MessageKey::InvalidCredentials => "البريد الإلكتروني أو كلمة المرور غير صحيحة",
        MessageKey::ServerError => "حدث خطأ ما. يرجى المحاولة لاحقاً.",
    }
}
