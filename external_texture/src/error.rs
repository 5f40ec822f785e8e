//! Error types for external textures
//!
//! This module defines the recoverable errors surfaced by the texture core and
//! its collaborators. Invariant violations (singular lookup transform, refresh
//! that does not end attached) are not errors: they abort through
//! `texture_fatal!`.

use std::fmt;

/// Result type for external texture operations
pub type Result<T> = std::result::Result<T, Error>;

/// External texture errors
#[derive(Debug, Clone)]
pub enum Error {
    /// GPU-context side failure (slot creation, image wrapping, draw submission)
    BackendError(String),

    /// A producer-facing call (attach, detach, update) failed
    ProducerError(String),

    /// Invalid resource (unknown or duplicate texture id, unusable slot)
    InvalidResource(String),
}

impl Error {
    /// Tag an error raised by a producer call as `ProducerError`
    ///
    /// Producers may report any variant; the message of a non-producer
    /// variant is kept through its `Display` form.
    pub fn into_producer_error(self) -> Self {
        match self {
            Error::ProducerError(_) => self,
            other => Error::ProducerError(other.to_string()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::ProducerError(msg) => write!(f, "Producer error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
