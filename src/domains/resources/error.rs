//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
///
/// Every variant is a precondition violation: retrying the same call
/// cannot succeed, so callers should surface these immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The requested resource was never registered.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A resource with the same key is already registered.
    #[error("Duplicate resource key: {0}")]
    DuplicateKey(String),

    /// A key component is empty or contains the separator.
    #[error("Invalid resource key: {0}")]
    InvalidKey(String),

    /// The resource URI is not in `category/slug` form.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// Title, description or content type is missing.
    #[error("Invalid resource descriptor: {0}")]
    InvalidDescriptor(String),

    /// A configured category has no documents in the catalogue.
    #[error("Unknown documentation category: {0}")]
    UnknownCategory(String),

    /// A pagination cursor could not be decoded.
    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "duplicate key" error.
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey(key.into())
    }

    /// Create a new "invalid key" error.
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }

    /// Create a new "invalid URI" error.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }

    /// Create a new "invalid descriptor" error.
    pub fn invalid_descriptor(msg: impl Into<String>) -> Self {
        Self::InvalidDescriptor(msg.into())
    }

    /// Create a new "unknown category" error.
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory(category.into())
    }

    /// Create a new "invalid cursor" error.
    pub fn invalid_cursor(cursor: impl Into<String>) -> Self {
        Self::InvalidCursor(cursor.into())
    }

    /// Whether the error was caused by malformed client input rather than
    /// a missing resource or a catalogue problem.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidKey(_) | Self::InvalidUri(_) | Self::InvalidCursor(_)
        )
    }
}
