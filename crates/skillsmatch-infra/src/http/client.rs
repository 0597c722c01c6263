//! HTTP client wrapping every call to the SkillsMatch REST API.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tracing::{debug, warn};

use skillsmatch_core::{ApiError, ApiResult};
use skillsmatch_shared::ErrorBody;

use crate::session::SessionStore;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL every resource path is appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SKILLSMATCH_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                std::env::var("SKILLSMATCH_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }
}

/// Per-request options.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    /// Raw JSON body.
    pub body: Option<Vec<u8>>,
    /// Extra headers, merged over the defaults.
    pub headers: HeaderMap,
    /// Bearer token that takes precedence over the stored session token.
    pub auth_token: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// JSON-encode `body` as the request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| ApiError::InvalidRequest(format!("encode body: {e}")))?;
        self.body = Some(bytes);
        Ok(self)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }
}

/// Authenticated request client.
///
/// Attaches `Authorization: Bearer <token>` when a token is available and turns
/// non-success responses into [`ApiError::Status`]. Exactly one attempt is made
/// per call; there is no retry.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig, session: SessionStore) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Absolute URL for a resource path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Issue a request to `url` and decode the JSON response as `T`.
    ///
    /// An empty success body decodes as JSON `null`.
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str, options: RequestOptions) -> ApiResult<T> {
        let body = self.send(url, options).await?;
        decode_body(&body)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.fetch(&self.url(path), RequestOptions::get()).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let options = RequestOptions::new(Method::POST).json(body)?;
        self.fetch(&self.url(path), options).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let options = RequestOptions::new(Method::PUT).json(body)?;
        self.fetch(&self.url(path), options).await
    }

    /// POST whose response body, if any, is ignored.
    pub async fn post_no_content<B>(&self, path: &str, body: &B) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        let options = RequestOptions::new(Method::POST).json(body)?;
        let _: IgnoredAny = self.fetch(&self.url(path), options).await?;
        Ok(())
    }

    /// DELETE whose response body, if any, is ignored.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        let _: IgnoredAny = self
            .fetch(&self.url(path), RequestOptions::new(Method::DELETE))
            .await?;
        Ok(())
    }

    /// Explicit token first, then the stored one. Empty tokens count as absent.
    fn resolve_token(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .filter(|t| !t.is_empty())
            .or_else(|| self.session.token().filter(|t| !t.is_empty()))
    }

    async fn send(&self, url: &str, options: RequestOptions) -> ApiResult<Vec<u8>> {
        let RequestOptions {
            method,
            body,
            headers: extra_headers,
            auth_token,
        } = options;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(extra_headers);

        let token = self.resolve_token(auth_token);
        if let Some(token) = &token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| ApiError::InvalidRequest(format!("authorization header: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        debug!(method = %method, url = %url, authenticated = token.is_some(), "Sending API request");

        let mut request = self.http.request(method.clone(), url).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                ApiError::InvalidRequest(e.to_string())
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = ErrorBody::message_from(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

            warn!(method = %method, url = %url, status = status.as_u16(), message = %message, "API request failed");

            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}

/// Resource path built from segments, each percent-encoded on its own.
///
/// An id containing `/`, `?` or `#` stays a single segment.
pub fn resource_path(segments: &[&str]) -> ApiResult<String> {
    let mut url = Url::parse("http://localhost/")
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::InvalidRequest("cannot build resource path".to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.path().to_string())
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        body
    };
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}
