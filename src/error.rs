//! Error types for the Battle.net API client.
//!
//! This module provides a single error type covering all failure modes when
//! talking to the Battle.net OAuth and Profile endpoints.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Battle.net operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Battle.net API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error response
    #[error("API error: status={status}, code={code:?}, detail={detail}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Blizzard error code (e.g. "BLZWEBAPI00000404")
        code: Option<String>,
        /// Human-readable detail from the API
        detail: String,
        /// Raw response body for debugging
        body: Value,
    },

    /// Authentication failed (invalid client credentials, token grant failure)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Access token has expired and needs refresh
    #[error("Access token expired; refresh required")]
    TokenExpired,

    /// Resource not found (unknown character, realm, or endpoint)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by the API
    #[error("Rate limited; retry after {retry_after_secs} seconds")]
    RateLimited {
        /// Number of seconds to wait before retrying
        retry_after_secs: u64,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration or credentials-file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (credentials file access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Discord gateway or HTTP error
    #[error("Discord error: {0}")]
    Discord(String),
}

#[cfg(feature = "bot")]
impl From<serenity::Error> for Error {
    fn from(err: serenity::Error) -> Self {
        Error::Discord(err.to_string())
    }
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::RateLimited { .. } => true,
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Authentication(_) | Error::TokenExpired)
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, unknown character, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 400 && *status < 500,
            Error::NotFound(_) | Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a Blizzard error response body.
    ///
    /// Blizzard error bodies look like
    /// `{"code": 404, "type": "BLZWEBAPI00000404", "detail": "Not Found"}`.
    pub(crate) fn from_api_response(status: u16, body: Value) -> Self {
        let code = body
            .get("type")
            .and_then(|c| c.as_str())
            .map(String::from);

        let detail = body
            .get("detail")
            .and_then(|d| d.as_str())
            .unwrap_or("Unknown API error")
            .to_string();

        Error::Api {
            status,
            code,
            detail,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        assert!(Error::RateLimited { retry_after_secs: 30 }.is_retryable());
        assert!(!Error::InvalidInput("bad".into()).is_retryable());
        assert!(!Error::TokenExpired.is_retryable());
    }

    #[test]
    fn test_error_auth() {
        assert!(Error::TokenExpired.is_auth_error());
        assert!(Error::Authentication("failed".into()).is_auth_error());
        assert!(!Error::NotFound("x".into()).is_auth_error());
    }

    #[test]
    fn test_from_api_response() {
        let body = serde_json::json!({
            "code": 404,
            "type": "BLZWEBAPI00000404",
            "detail": "Not Found"
        });

        let err = Error::from_api_response(404, body);
        match err {
            Error::Api {
                status,
                code,
                detail,
                ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, Some("BLZWEBAPI00000404".to_string()));
                assert_eq!(detail, "Not Found");
            }
            _ => panic!("Expected Api error"),
        }
    }

    #[test]
    fn test_server_error_is_retryable() {
        let err = Error::from_api_response(503, serde_json::json!({}));
        assert!(err.is_retryable());
        assert!(err.is_server_error());
    }
}
