use thiserror::Error;

/// Failure modes of a single API call.
///
/// The variants are deliberately distinguishable so views can tell
/// "the server said no" apart from "the server never answered" and from
/// "the server answered garbage".
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No HTTP response was received (DNS failure, refused connection,
    /// dropped socket).
    #[error("network error: {0}")]
    Network(String),

    /// The server responded with a non-2xx status. The body is carried
    /// verbatim so callers can show the backend's error detail.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx response arrived but its body did not deserialize into the
    /// expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// A request body could not be serialized to JSON, so no request was
    /// sent.
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Status code, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ApiError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None => ApiError::Network(err.to_string()),
        }
    }
}
