//! Error types for the GoBarber client.

use thiserror::Error;

/// Errors that can occur in GoBarber client operations.
#[derive(Error, Debug)]
pub enum GoBarberError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not signed in")]
    NotSignedIn,
}

impl From<serde_json::Error> for GoBarberError {
    fn from(e: serde_json::Error) -> Self {
        GoBarberError::Serialization(e.to_string())
    }
}

/// Result type alias for GoBarber operations.
pub type GoBarberResult<T> = Result<T, GoBarberError>;
