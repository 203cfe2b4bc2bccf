//! HTTP transport for the storefront backend.
//!
//! Every response is a `{data, error}` envelope. [`ApiClient::request`]
//! unwraps `data` on success and turns everything else into an
//! [`ApiError`] carrying the HTTP status.

use crate::error::{ApiError, ApiResult};
use butchery_config_and_utils::{Config, CoreResult};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

const CONTENT_TYPE: &str = "Content-Type";
const JSON_MIME: &str = "application/json";

/// The uniform response wrapper. Either field may be null or absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Method, extra headers and JSON body for one request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST carrying `body` as JSON.
    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            headers: Vec::new(),
            body: Some(body),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds `Authorization: Bearer <token>`.
    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }
}

/// Merge caller headers over the default JSON content type.
///
/// Header names compare case-insensitively. A caller value for a header
/// already present replaces it; everything else is appended in order.
pub fn merge_headers(caller: &[(String, String)]) -> Vec<(String, String)> {
    let mut merged = vec![(CONTENT_TYPE.to_string(), JSON_MIME.to_string())];

    for (name, value) in caller {
        match merged
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(slot) => *slot = (name.clone(), value.clone()),
            None => merged.push((name.clone(), value.clone())),
        }
    }

    merged
}

/// Client for the storefront REST API.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`, e.g. `http://localhost:8080/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client for the configured API base URL.
    pub fn from_config(config: &Config) -> CoreResult<Self> {
        let url = config.api_url()?;
        Ok(Self::new(url.as_str()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Issue a request and unwrap the envelope's `data` as `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let (status, body) = self.execute(endpoint, &options).await?;

        let envelope: Envelope<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| {
                warn!(endpoint = %endpoint, status, error = %e, "Response is not an envelope");
                ApiError::malformed_body(status)
            })?;

        if !is_success(status) {
            warn!(endpoint = %endpoint, status, error = ?envelope.error, "Request failed");
            return Err(ApiError::http(status, envelope.error));
        }

        let data = match envelope.data {
            Some(serde_json::Value::Null) | None => {
                warn!(endpoint = %endpoint, status, "Success response without data");
                return Err(ApiError::missing_data(status));
            }
            Some(data) => data,
        };

        serde_json::from_value(data).map_err(|e| {
            warn!(endpoint = %endpoint, status, error = %e, "Response data has unexpected shape");
            ApiError::malformed_body(status)
        })
    }

    /// Issue a request to an endpoint with no required payload.
    ///
    /// Any 2xx counts as success whatever the body. Failures are reported
    /// as in [`ApiClient::request`], with the envelope's error message when
    /// the body has one.
    pub async fn send_empty(&self, endpoint: &str, options: RequestOptions) -> ApiResult<()> {
        let (status, body) = self.execute(endpoint, &options).await?;

        if is_success(status) {
            return Ok(());
        }

        let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
            .ok()
            .and_then(|envelope| envelope.error);
        warn!(endpoint = %endpoint, status, error = ?message, "Request failed");
        Err(ApiError::http(status, message))
    }

    /// Send the request and read the whole body. Only a missing response is
    /// an error here.
    async fn execute(&self, endpoint: &str, options: &RequestOptions) -> ApiResult<(u16, String)> {
        let url = self.endpoint_url(endpoint);

        let mut builder = self.http_client.request(options.method.clone(), &url);
        for (name, value) in merge_headers(&options.headers) {
            builder = builder.header(name, value);
        }
        if let Some(body) = &options.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            warn!(method = %options.method, url = %url, error = %e, "Request did not complete");
            ApiError::network()
        })?;

        let status = response.status().as_u16();
        debug!(method = %options.method, url = %url, status, "API request completed");

        let body = response.text().await.map_err(|e| {
            warn!(url = %url, status, error = %e, "Failed to read response body");
            ApiError::malformed_body(status)
        })?;

        Ok((status, body))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
