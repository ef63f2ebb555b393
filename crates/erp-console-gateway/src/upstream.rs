//! Upstream API client.
//!
//! Issues requests against the configured base URL with the caller's bearer
//! token attached. Responses are returned raw; status codes are not
//! interpreted here.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{
    HeaderMap, HeaderValue, Method, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE, IntoHeaderName},
};
use reqwest::Client;
use serde::de::DeserializeOwned;

use erp_console_core::BearerToken;
use erp_console_core::config::UpstreamSection;

/// Upstream client errors.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Network or protocol failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token cannot be sent as a header value.
    #[error("Token is not a valid header value")]
    InvalidToken,

    /// The request body could not be encoded.
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Raw upstream response.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    /// Status code.
    pub status: StatusCode,
    /// Body bytes, unmodified.
    pub body: Bytes,
}

impl UpstreamResponse {
    /// Whether the status is 2xx.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Per-call overrides for a forwarded request.
#[derive(Debug, Clone)]
pub struct ForwardOptions {
    /// HTTP method.
    pub method: Method,
    /// JSON body, sent verbatim.
    pub body: Option<serde_json::Value>,
    /// Headers applied after the defaults, replacing them on conflict.
    pub headers: HeaderMap,
}

impl Default for ForwardOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl ForwardOptions {
    /// Options for `method` with no body.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// A bodiless GET.
    #[must_use]
    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// A bodiless DELETE.
    #[must_use]
    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// A request carrying a JSON body.
    #[must_use]
    pub fn with_body(method: Method, body: serde_json::Value) -> Self {
        Self {
            body: Some(body),
            ..Self::new(method)
        }
    }

    /// Add or replace a header.
    #[must_use]
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Client for the upstream API server.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a client for `base_url`.
    ///
    /// A `timeout` of `None` keeps the HTTP client's default.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let base_url: String = base_url.into();
        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the `upstream` config section.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn from_config(section: &UpstreamSection) -> Result<Self, UpstreamError> {
        let timeout = (section.timeout_secs > 0).then(|| Duration::from_secs(section.timeout_secs));
        Self::new(section.base_url.clone(), timeout)
    }

    /// The base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the base.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Forward a request with `Authorization: Bearer <token>` and
    /// `Content-Type: application/json`, both overridable via
    /// `options.headers`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or if the token is not a valid
    /// header value.
    pub async fn forward(
        &self,
        path: &str,
        token: &BearerToken,
        options: ForwardOptions,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let authorization =
            HeaderValue::from_str(&token.to_header_value()).map_err(|_| UpstreamError::InvalidToken)?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        self.send(path, headers, options).await
    }

    /// Send a request without a bearer token (login).
    ///
    /// # Errors
    ///
    /// Returns error on transport failure.
    pub async fn send_anonymous(
        &self,
        path: &str,
        options: ForwardOptions,
    ) -> Result<UpstreamResponse, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        self.send(path, headers, options).await
    }

    async fn send(
        &self,
        path: &str,
        mut headers: HeaderMap,
        options: ForwardOptions,
    ) -> Result<UpstreamResponse, UpstreamError> {
        for (name, value) in &options.headers {
            headers.insert(name.clone(), value.clone());
        }

        let url = self.url(path);
        tracing::debug!("Forwarding {} {}", options.method, url);

        let mut request = self
            .client
            .request(options.method, &url)
            .headers(headers);

        if let Some(body) = &options.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!("Upstream responded {} for {}", status, url);

        Ok(UpstreamResponse { status, body })
    }
}
