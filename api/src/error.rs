use thiserror::Error;

/// Failure of a backend request. Every transport or protocol problem is
/// surfaced as one of these variants; nothing is swallowed or retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, offline).
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the credential. The session has already been
    /// torn down by the time the caller sees this.
    #[error("authentication required")]
    Unauthorized,

    /// Any other non-2xx response, body text included for display.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON shape we expected.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when retrying the same request with the same session cannot help.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
