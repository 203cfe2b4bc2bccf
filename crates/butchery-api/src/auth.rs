//! Auth endpoints.
//!
//! Thin wrappers over [`ApiClient::request`]. Errors come back exactly as
//! the transport produced them; interpreting 401/409 is the caller's job.

use crate::client::{ApiClient, RequestOptions};
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const REFRESH_PATH: &str = "/auth/refresh";
pub const ADMIN_LOGIN_PATH: &str = "/admin/auth/login";

/// Fields posted to the register endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Access and refresh token issued together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Register response: the created account.
///
/// Decoded leniently. Every field may be missing and unknown fields (tokens
/// issued by some deployments) are ignored; only a null or absent `data`
/// is an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegisterResponse {
    pub id: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

/// Login response: the token pair plus an expiry hint in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl LoginResponse {
    pub fn into_tokens(self) -> TokenPair {
        TokenPair {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
        }
    }
}

/// Refresh response. The refresh token itself is not rotated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl ApiClient {
    /// Create a customer account. The new account is not logged in by the
    /// client; the caller sends the user to the login page.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        debug!(email = %request.email, "Registering customer");

        let body = json!({
            "full_name": request.full_name,
            "email": request.email,
            "phone": request.phone,
            "password": request.password,
        });
        let account: RegisterResponse = self
            .request(REGISTER_PATH, RequestOptions::post(body))
            .await?;

        info!(email = %request.email, customer_id = ?account.id, "Customer registered");
        Ok(account)
    }

    /// Customer login.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        debug!(email = %email, "Attempting customer login");
        self.login_at(LOGIN_PATH, email, password).await
    }

    /// Back-office login. Same credentials shape as the customer login.
    pub async fn admin_login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        debug!(email = %email, "Attempting admin login");
        self.login_at(ADMIN_LOGIN_PATH, email, password).await
    }

    async fn login_at(&self, path: &str, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = json!({
            "email": email,
            "password": password,
        });
        self.request(path, RequestOptions::post(body)).await
    }

    /// Revoke the refresh token server-side. The endpoint returns no
    /// payload.
    pub async fn logout(&self, access_token: &str, refresh_token: &str) -> ApiResult<()> {
        let options =
            RequestOptions::post(json!({ "refresh_token": refresh_token })).bearer(access_token);
        self.send_empty(LOGOUT_PATH, options).await
    }

    /// Exchange the refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> ApiResult<RefreshResponse> {
        let body = json!({ "refresh_token": refresh_token });
        self.request(REFRESH_PATH, RequestOptions::post(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(format!("{}/api/v1", server.uri()))
    }

    fn registration() -> RegisterRequest {
        RegisterRequest {
            full_name: "Omar Haddad".to_string(),
            email: "omar@example.com".to_string(),
            phone: "+971501234567".to_string(),
            password: "supersecret".to_string(),
        }
    }

    #[test]
    fn test_register_request_debug_hides_password() {
        let rendered = format!("{:?}", registration());
        assert!(rendered.contains("omar@example.com"));
        assert!(!rendered.contains("supersecret"));
    }

    #[tokio::test]
    async fn test_register_posts_fields_and_returns_account() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/register"))
            .and(body_json(json!({
                "full_name": "Omar Haddad",
                "email": "omar@example.com",
                "phone": "+971501234567",
                "password": "supersecret"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": { "id": "c1", "email": "omar@example.com", "full_name": "Omar Haddad" },
                "error": null
            })))
            .expect(1)
            .mount(&server)
            .await;

        let account = client_for(&server).register(&registration()).await.unwrap();
        assert_eq!(account.id.as_deref(), Some("c1"));
        assert_eq!(account.full_name.as_deref(), Some("Omar Haddad"));
    }

    #[tokio::test]
    async fn test_register_accepts_token_pair_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/register"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": { "access_token": "A", "refresh_token": "B" }
            })))
            .mount(&server)
            .await;

        let account = client_for(&server).register(&registration()).await.unwrap();
        assert_eq!(account, RegisterResponse::default());
    }

    #[tokio::test]
    async fn test_register_null_data_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/register"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "data": null,
                "error": null
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .register(&registration())
            .await
            .unwrap_err();
        assert_eq!(err.kind, crate::ApiErrorKind::MissingData);
        assert_eq!(err.status, 201);
    }

    #[tokio::test]
    async fn test_register_conflict_propagates_409() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/register"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "data": null,
                "error": "email already registered"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .register(&registration())
            .await
            .unwrap_err();
        assert_eq!(err.status, 409);
        assert_eq!(err.message, "email already registered");
    }

    #[tokio::test]
    async fn test_login_returns_tokens_and_expiry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .and(body_json(json!({ "email": "omar@example.com", "password": "pw" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "access_token": "A", "refresh_token": "B", "expires_in": 900 }
            })))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .login("omar@example.com", "pw")
            .await
            .unwrap();
        assert_eq!(response.expires_in, Some(900));
        assert_eq!(response.into_tokens(), TokenPair::new("A", "B"));
    }

    #[tokio::test]
    async fn test_login_unauthorized_propagates_401() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "data": null,
                "error": "invalid email or password"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login("omar@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.status, 401);
    }

    #[tokio::test]
    async fn test_admin_login_uses_admin_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/admin/auth/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "access_token": "AA", "refresh_token": "AB", "expires_in": 900 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .admin_login("admin@butchery.ae", "pw")
            .await
            .unwrap();
        assert_eq!(response.access_token, "AA");
    }

    #[tokio::test]
    async fn test_logout_sends_bearer_and_refresh_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/logout"))
            .and(header("Authorization", "Bearer A"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({ "refresh_token": "B" })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).logout("A", "B").await.unwrap();
    }

    #[tokio::test]
    async fn test_logout_failure_is_returned_to_caller() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/logout"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "data": null,
                "error": "token expired"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).logout("A", "B").await.unwrap_err();
        assert_eq!(err.status, 401);
        assert_eq!(err.message, "token expired");
    }

    #[tokio::test]
    async fn test_refresh_returns_new_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/refresh"))
            .and(body_json(json!({ "refresh_token": "B" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "access_token": "A2", "expires_in": 900 }
            })))
            .mount(&server)
            .await;

        let response = client_for(&server).refresh("B").await.unwrap();
        assert_eq!(response.access_token, "A2");
        assert_eq!(response.expires_in, Some(900));
    }
}
