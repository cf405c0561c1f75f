use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while talking to the server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection refused, DNS, dropped socket.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status. `message` carries the
    /// JSON `error` body when the server sent one, else a generic fallback.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ApiError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
