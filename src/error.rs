// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Bad JSON from entries endpoint: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Task metadata unavailable: {0}")]
    Metadata(String),

    #[error("{0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn metadata<S: Into<String>>(msg: S) -> Self {
        Error::Metadata(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }
}
