//! Error types for the directory browser.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] used throughout the crate. Fetch failures are converted to a single
//! user-visible message at the controller boundary via [`DirectoryError::user_message`];
//! nothing past that boundary sees the structured variant.

use thiserror::Error;

/// Message shown when a failure carries no description of its own.
pub const UNKNOWN_FETCH_ERROR: &str = "Unknown error fetching data";

/// The main error type for directory browser operations.
///
/// The first four variants form the fetch taxonomy (status, parse, transport,
/// unknown). The remaining ones cover local concerns such as configuration
/// files and themes.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The endpoint answered with a non-2xx status.
    #[error("Error fetching data: {0}")]
    Status(u16),

    /// The response body was not a valid user collection.
    #[error("Invalid response body: {0}")]
    Parse(String),

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Error fetching data: {0}")]
    Transport(String),

    /// Any other failure while fetching.
    #[error("{UNKNOWN_FETCH_ERROR}")]
    Unknown,

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DirectoryError {
    /// Collapses the error to the string shown in the error panel.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// A specialized `Result` type for directory browser operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
