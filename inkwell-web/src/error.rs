//! Error taxonomy for API calls.
//!
//! Every failure a page can observe is one of these variants. The
//! `Display` text is the user-facing notice; server-supplied `detail`
//! messages surface verbatim, everything else gets a generic message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use shared::models::ErrorDetail;

/// Outcome of a failed API call.
///
/// `Clone` so a single refresh outcome can be handed to every caller
/// waiting on the same in-flight refresh.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A 401 whose silent refresh also failed. The session is over;
    /// local sign-in state has already been cleared.
    #[error("Your session has ended. Sign in to continue")]
    AuthExpired,

    /// The server rejected the request and said why.
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// The request never reached the server.
    #[error("No response received from the server")]
    Network(String),

    /// The server answered 2xx with a body we could not parse.
    #[error("Unexpected response from the server")]
    Decode(String),
}

impl ApiError {
    /// Whether this failure means the caller's credential is no good.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::AuthExpired | Self::Rejected { status: 401, .. })
    }

    /// Map a transport-level failure from the HTTP client.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Convert a non-2xx response into the error the caller sees,
/// preferring the server's own `detail` message.
pub async fn reject(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    match response.json::<ErrorDetail>().await {
        Ok(body) => ApiError::Rejected {
            status,
            detail: body.detail,
        },
        Err(_) => ApiError::Rejected {
            status,
            detail: format!("Request failed with status {status}"),
        },
    }
}

/// Pass 2xx responses through; turn everything else into an [`ApiError`].
pub async fn ok_or_reject(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(reject(response).await)
    }
}
