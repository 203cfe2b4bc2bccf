//! Backend REST client for the storefront.
//!
//! This crate provides:
//! - [`ApiClient`], the single transport through which every backend call
//!   goes, unwrapping the `{data, error}` envelope
//! - [`ApiError`], one error type carrying the HTTP status so callers can
//!   branch on it
//! - The auth endpoints (register, login, admin login, logout, refresh)

mod auth;
mod client;
mod error;

pub use auth::{
    LoginResponse, RefreshResponse, RegisterRequest, RegisterResponse, TokenPair, ADMIN_LOGIN_PATH, LOGIN_PATH,
    LOGOUT_PATH, REFRESH_PATH, REGISTER_PATH,
};
pub use client::{merge_headers, ApiClient, Envelope, RequestOptions};
pub use error::{
    ApiError, ApiErrorKind, ApiResult, GENERIC_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE,
    NO_DATA_MESSAGE,
};
pub use reqwest::Method;
