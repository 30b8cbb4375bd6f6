use std::time::Duration;

use cb_core::ports::GatewayError;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use tracing::debug;

use super::dto;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub anon_key: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Thin wrapper over `reqwest::Client` that knows the base URL and attaches
/// the `apikey` header to every request.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::Unavailable(format!("build http client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header("apikey", &self.anon_key)
    }

    /// Send without interpreting the status. Only transport failures are
    /// errors here.
    pub(crate) async fn send_raw(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        request.send().await.map_err(transport_error)
    }

    /// Send and turn any non-2xx status into [`GatewayError::Service`].
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = self.send_raw(request).await?;
        if response.status().is_success() {
            return Ok(response);
        }
        Err(service_error(response).await)
    }
}

pub(crate) fn transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Unavailable("request timed out".to_string())
    } else {
        GatewayError::Unavailable(err.to_string())
    }
}

/// Build a display error from a failed response body.
pub(crate) async fn service_error(response: Response) -> GatewayError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    debug!(%status, "backend returned error status");
    GatewayError::Service(dto::error_message(&body).unwrap_or_else(|| status_text(status)))
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

pub(crate) async fn decode<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, GatewayError> {
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Service(format!("unexpected response from server: {e}")))
}
