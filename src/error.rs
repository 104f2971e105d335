//! Error types for the ShotAPI SDK.

use thiserror::Error;

/// Result type for ShotAPI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the ShotAPI SDK.
///
/// The first four variants are returned for non-2xx API responses and always
/// carry the HTTP status code. The remaining variants cover failures that
/// never reached a status code.
#[derive(Error, Debug)]
pub enum Error {
    /// The API key was rejected (HTTP 401).
    #[error("Authentication failed ({status}): {message}")]
    Authentication {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Rate limit exceeded (HTTP 429).
    #[error("Rate limited ({status}): {message}")]
    RateLimit {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// The feature is not included in the account's plan (HTTP 403).
    #[error("Feature not available ({status}): {message}")]
    FeatureNotAvailable {
        /// HTTP status code
        status: u16,
        /// Response body, decoded as UTF-8 with invalid sequences replaced
        /// by U+FFFD
        message: String,
    },

    /// Any other non-2xx API response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, decoded as UTF-8 with invalid sequences replaced
        /// by U+FFFD
        message: String,
    },

    /// Network or HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Map a non-success status code and its response body to an error.
    ///
    /// 401 and 429 use fixed messages; every other status keeps the body
    /// verbatim.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            401 => Error::Authentication {
                status,
                message: "Invalid API key".into(),
            },
            403 => Error::FeatureNotAvailable {
                status,
                message: body.into(),
            },
            429 => Error::RateLimit {
                status,
                message: "Rate limit exceeded".into(),
            },
            _ => Error::Api {
                status,
                message: body.into(),
            },
        }
    }

    /// Create an API error from a response.
    ///
    /// The body is only read for statuses whose message comes from it.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        if matches!(status, 401 | 429) {
            return Error::from_status(status, String::new());
        }
        match response.bytes().await {
            Ok(body) => Error::from_status(status, String::from_utf8_lossy(&body)),
            Err(e) => Error::Http(e),
        }
    }

    /// HTTP status code of an API error, `None` for transport, JSON and
    /// configuration errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. }
            | Error::RateLimit { status, .. }
            | Error::FeatureNotAvailable { status, .. }
            | Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error came from a non-2xx API response.
    pub fn is_api_error(&self) -> bool {
        self.status_code().is_some()
    }
}

/// Return `Ok(response)` for 2xx statuses, the mapped error otherwise.
pub(crate) async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(Error::from_response(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_ignores_body() {
        let err = Error::from_status(401, "{\"error\":\"nope\"}");
        match err {
            Error::Authentication { status, ref message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_forbidden_keeps_body() {
        let err = Error::from_status(403, "Upgrade to Pro to use custom_js");
        match err {
            Error::FeatureNotAvailable { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Upgrade to Pro to use custom_js");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rate_limit_fixed_message() {
        let err = Error::from_status(429, "slow down");
        match err {
            Error::RateLimit { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Rate limit exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_other_statuses_are_generic() {
        for status in [400, 404, 418, 500, 502, 503] {
            let err = Error::from_status(status, "boom");
            match err {
                Error::Api { status: s, message } => {
                    assert_eq!(s, status);
                    assert_eq!(message, "boom");
                }
                other => panic!("unexpected error for {status}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_status_code() {
        assert_eq!(Error::from_status(401, "").status_code(), Some(401));
        assert_eq!(Error::from_status(500, "").status_code(), Some(500));
        assert!(Error::from_status(403, "").is_api_error());

        let err = Error::Config("API key is required".into());
        assert_eq!(err.status_code(), None);
        assert!(!err.is_api_error());
    }

    #[test]
    fn test_display() {
        let err = Error::from_status(429, "");
        assert_eq!(err.to_string(), "Rate limited (429): Rate limit exceeded");
    }
}
