/*!
 * Error types for the wikidict application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the upstream dictionary service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

/// Errors that can occur while resolving and normalizing a lookup
#[derive(Error, Debug)]
pub enum LookupError {
    /// The requested language matched no resolver tier
    #[error("Unresolved language: {0}")]
    UnresolvedLanguage(String),

    /// Upstream returned a non-success status for the requested word
    #[error("Word not found: {word} (upstream status {status})")]
    NotFound {
        /// The word that was requested
        word: String,
        /// HTTP status returned by the upstream service
        status: u16
    },

    /// The upstream document could not be interpreted at all
    #[error("Malformed upstream document: {0}")]
    MalformedDocument(String),

    /// Error from the upstream service client
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the upstream service client
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a dictionary lookup
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
