//! Provider client error types.

use thiserror::Error;

/// Maximum number of body characters kept in a [`FetchError::Status`].
const BODY_EXCERPT_LEN: usize = 200;

/// Transport-level failures talking to the provider.
///
/// Anything reported here means the network or the provider's infrastructure
/// failed, as opposed to the provider answering with an application-level
/// error inside a well-formed JSON body.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The connection could not be established.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The provider answered with a non-2xx status.
    #[error("Provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be parsed as JSON.
    #[error("Response body is not valid JSON: {0}")]
    Decode(String),

    /// Any other failure building or sending the request.
    #[error("Request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// Create a status error, keeping a short excerpt of the body.
    pub fn status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            body: body.chars().take(BODY_EXCERPT_LEN).collect(),
        }
    }

    /// Create a request error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_body_truncated() {
        let body = "x".repeat(1000);
        match FetchError::status(502, &body) {
            FetchError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body.len(), BODY_EXCERPT_LEN);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
