//! Remote Failures
//!
//! Everything that can go wrong between issuing a request and decoding
//! its response.

/// Common result type for remote operations
pub type RemoteResult<T> = Result<T, RemoteFailure>;

/// Why a remote call did not produce a value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteFailure {
    /// The request never got a response (connection refused, CORS, ...)
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("server responded with status {status}")]
    Status { status: u16 },
    /// The response body was not what we expected
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RemoteFailure {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
