use serde::{Deserialize, Serialize};

/// Error body the backend attaches to rejected requests.
///
/// Every non-2xx response carries `{"detail": "..."}` with a message
/// meant to be shown to the user verbatim.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, thiserror::Error)]
#[error("{detail}")]
pub struct ErrorDetail {
    /// Human-readable explanation supplied by the server.
    pub detail: String,
}

impl ErrorDetail {
    /// Creates an error body with the given detail message.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_deserializes_backend_body() {
        let body: ErrorDetail = serde_json::from_str(r#"{"detail":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.detail, "Invalid credentials");
    }

    #[test]
    fn detail_displays_message() {
        let body = ErrorDetail::new("Sign in to continue");
        assert_eq!(body.to_string(), "Sign in to continue");
    }

    #[test]
    fn detail_roundtrip() {
        let body = ErrorDetail::new("Article not found");
        let json = serde_json::to_string(&body).unwrap();
        let back: ErrorDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, body);
    }
}
