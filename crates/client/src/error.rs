use thiserror::Error;

/// Errors raised while talking to the server or reading producer input.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure or undecodable response body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server responded {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
