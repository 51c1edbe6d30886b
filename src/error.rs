//! Crate-level error type and `Result` alias.
//! Covers date parsing, connection setup, HTTP transport and file I/O failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid date token '{token}': {reason}")]
    Format { token: String, reason: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn format<T: Into<String>, R: std::fmt::Display>(token: T, reason: R) -> Self {
        Error::Format {
            token: token.into(),
            reason: reason.to_string(),
        }
    }
}
