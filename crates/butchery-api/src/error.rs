//! Transport error type.

use thiserror::Error;

/// Message used whenever the backend gives nothing more specific.
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Message for requests that never got a response.
pub const NETWORK_ERROR_MESSAGE: &str = "Unable to reach the server";

/// Message for a success response whose envelope carries no data.
pub const NO_DATA_MESSAGE: &str = "no data returned";

/// What went wrong with a backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// No response at all (connection refused, DNS, TLS). Status is 0.
    Network,
    /// Non-2xx response.
    Http,
    /// The body was not a valid envelope of the expected shape.
    MalformedBody,
    /// 2xx response with `data` null or absent.
    MissingData,
}

/// Error returned by every backend call.
///
/// Callers decide what to show the user from `status` alone; `kind` and
/// `message` are diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (HTTP {status})")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn network() -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: 0,
            message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    /// Non-2xx response, using the server's message when it sent one.
    pub fn http(status: u16, message: Option<String>) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            status,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
        }
    }

    pub fn malformed_body(status: u16) -> Self {
        Self {
            kind: ApiErrorKind::MalformedBody,
            status,
            message: GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn missing_data(status: u16) -> Self {
        Self {
            kind: ApiErrorKind::MissingData,
            status,
            message: NO_DATA_MESSAGE.to_string(),
        }
    }

    /// Returns true if the backend answered with exactly this status.
    pub fn has_status(&self, status: u16) -> bool {
        self.status == status
    }
}

/// Result type alias using ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_has_status_zero() {
        let err = ApiError::network();
        assert_eq!(err.status, 0);
        assert_eq!(err.kind, ApiErrorKind::Network);
        assert!(!err.has_status(401));
    }

    #[test]
    fn test_http_error_falls_back_to_generic_message() {
        assert_eq!(ApiError::http(500, None).message, GENERIC_ERROR_MESSAGE);
        assert_eq!(
            ApiError::http(400, Some("  ".to_string())).message,
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            ApiError::http(409, Some("email already registered".to_string())).message,
            "email already registered"
        );
    }

    #[test]
    fn test_has_status() {
        assert!(ApiError::http(401, None).has_status(401));
        assert!(!ApiError::http(503, None).has_status(401));
        assert!(ApiError::missing_data(200).has_status(200));
    }

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::http(401, Some("invalid credentials".to_string()));
        assert_eq!(err.to_string(), "invalid credentials (HTTP 401)");
    }
}
