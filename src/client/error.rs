//! Adyen client error types.

use thiserror::Error;

/// Result type for Adyen client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while calling the Adyen APIs.
///
/// The `Display` output of every variant is what tool error strings embed,
/// so an API rejection renders as its serialized response body.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Api {
        status: u16,
        body: serde_json::Value,
    },

    /// The response body was not valid JSON.
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The client was configured inconsistently.
    #[error("client configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_serializes_body() {
        let err = ClientError::Api {
            status: 422,
            body: serde_json::json!({
                "status": 422,
                "errorCode": "130",
                "message": "Required field 'merchantAccount' is not provided.",
                "errorType": "validation"
            }),
        };
        let text = err.to_string();
        assert!(text.starts_with("HTTP 422: "));
        assert!(text.contains("\"errorCode\":\"130\""));
        assert!(text.contains("merchantAccount"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ClientError::config("missing prefix");
        assert_eq!(err.to_string(), "client configuration error: missing prefix");
    }
}
