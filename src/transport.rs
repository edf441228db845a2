/// HTTP transport for the Starling API
///
/// [`Transport`] is the seam between the endpoint bindings and the network:
/// it resolves paths against the base URL, attaches the auth and accept
/// headers, and classifies transport-level failures. [`HttpTransport`] is
/// the reqwest implementation used outside of tests.
use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::{Client, Method, Request, StatusCode};
use serde::Deserialize;
use std::time::{Duration, Instant};
use url::Url;

use crate::config::Config;
use crate::errors::{Error, Result};
use crate::logger::{self, LogTag};

/// Longest raw body excerpt carried in a status error message
const MAX_ERROR_BODY_CHARS: usize = 200;

// ============================================================================
// RESPONSE METADATA
// ============================================================================

/// Status line and headers of a server answer, detached from its body
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub url: Url,
    pub headers: HeaderMap,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<&reqwest::Response> for Response {
    fn from(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            url: response.url().clone(),
            headers: response.headers().clone(),
        }
    }
}

// ============================================================================
// TRANSPORT TRAIT
// ============================================================================

#[async_trait]
pub trait Transport: Send + Sync {
    /// Build a request for `path` relative to the API base URL
    fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Request>;

    /// Execute a request, returning metadata and raw body of a 2xx answer
    ///
    /// Non-2xx answers are turned into [`Error::Status`].
    async fn send(&self, request: Request) -> Result<(Response, Vec<u8>)>;
}

// ============================================================================
// REQWEST IMPLEMENTATION
// ============================================================================

pub struct HttpTransport {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(config.base_url()).map_err(|e| {
            Error::Config(format!("Invalid base URL '{}': {}", config.base_url(), e))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            access_token: config.access_token.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn new_request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Request> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::request_build(path, e))?;

        let mut builder = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");

        if let Some(token) = &self.access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        builder.build().map_err(|e| Error::request_build(path, e))
    }

    async fn send(&self, request: Request) -> Result<(Response, Vec<u8>)> {
        let method = request.method().clone();
        let url = request.url().clone();
        logger::debug(LogTag::Api, &format!("{} {}", method, url));

        let start = Instant::now();
        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(source) => {
                logger::debug(
                    LogTag::Api,
                    &format!(
                        "{} {} failed after {}ms: {}",
                        method,
                        url,
                        start.elapsed().as_millis(),
                        source
                    ),
                );
                return Err(Error::Network { url, source });
            }
        };

        let metadata = Response::from(&response);
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(source) => {
                return Err(Error::Body {
                    response: metadata,
                    source,
                })
            }
        };

        logger::debug(
            LogTag::Api,
            &format!(
                "{} {} -> {} in {}ms ({} bytes)",
                method,
                url,
                metadata.status,
                start.elapsed().as_millis(),
                body.len()
            ),
        );

        if !metadata.is_success() {
            return Err(Error::Status {
                message: error_message(&body),
                response: metadata,
            });
        }

        Ok((metadata, body))
    }
}

// ============================================================================
// ERROR BODIES
// ============================================================================

/// OAuth-style error payload returned by the API on 4xx answers
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Human readable message for a failed answer's body
fn error_message(body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        match (parsed.error, parsed.error_description) {
            (Some(error), Some(description)) => return format!("{}: {}", error, description),
            (Some(error), None) => return error,
            (None, Some(description)) => return description,
            (None, None) => {}
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "No body".to_string();
    }
    if text.chars().count() > MAX_ERROR_BODY_CHARS {
        let truncated: String = text.chars().take(MAX_ERROR_BODY_CHARS).collect();
        return format!("{}...", truncated);
    }
    text.to_string()
}
