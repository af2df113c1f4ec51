//! Unified error types and result handling.
//!
//! Domain failures (`InvalidData`, `NotFound`) are raised by the service layer and
//! mapped to HTTP statuses by the api layer. Everything else is an infrastructure
//! failure that ends the request (or startup) as-is.

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Create or update input was absent or failed a field constraint
    #[error("{message}")]
    InvalidData {
        /// Human-readable reason returned to the caller
        message: String,
    },

    /// No row for the given identifier, or an empty filtered result
    #[error("{message}")]
    NotFound {
        /// Human-readable reason returned to the caller
        message: String,
    },

    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong while loading configuration
        message: String,
    },

    /// Error bubbled up from the store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (binding the listener, serving)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for an [`Error::InvalidData`] with the given message.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::NotFound`] with the given message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
