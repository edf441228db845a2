/// Error types for the Starling client
///
/// Every failure a caller can see goes through [`Error`]. Failures raised after
/// the server answered carry the response metadata so callers can inspect the
/// status and headers even when the body was unusable.
use thiserror::Error;
use url::Url;

use crate::transport::Response;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // REQUEST CONSTRUCTION
    // =========================================================================
    #[error("Failed to build request for {path}: {source}")]
    RequestBuild {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // =========================================================================
    // TRANSPORT
    // =========================================================================
    #[error("Request to {url} failed: {source}")]
    Network {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body from {}: {source}", .response.url)]
    Body {
        response: Response,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {} from {}: {message}", .response.status, .response.url)]
    Status { response: Response, message: String },

    #[error("Failed to decode response from {}: {source}", .response.url)]
    Decode {
        response: Response,
        #[source]
        source: serde_json::Error,
    },

    // =========================================================================
    // CONFIGURATION
    // =========================================================================
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn request_build(
        path: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::RequestBuild {
            path: path.to_string(),
            source: source.into(),
        }
    }

    /// Response metadata produced before the failure, if the server answered
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Body { response, .. }
            | Error::Status { response, .. }
            | Error::Decode { response, .. } => Some(response),
            Error::RequestBuild { .. } | Error::Network { .. } | Error::Config(_) => None,
        }
    }

    /// HTTP status code, when the failure came from a non-2xx answer
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Status { response, .. } => Some(response.status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Network { source, .. } if source.is_timeout())
    }
}
