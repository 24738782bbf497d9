use std::string::FromUtf8Error;

/// Failures raised while rendering or writing an error response
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to serialize error payload: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write error payload: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid content type header: {0}")]
    InvalidHeader(#[from] axum::http::header::InvalidHeaderValue),

    #[error("error payload is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Entry point that only exists to satisfy a generated responder interface
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
