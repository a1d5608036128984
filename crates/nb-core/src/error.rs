//! # AppError
//!
//! Centralized error handling for the Notice-Board ecosystem.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all nb-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., Announcement, Comment)
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),

    /// Validation failure (e.g., empty required field), caught before any network call
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Media picker refused access; surfaced to the caller, never retried automatically
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Transport failure, timeout, or unexpected remote status; opaque to this layer
    #[error("network error: {0}")]
    Network(String),
}

/// A specialized Result type for Notice-Board logic.
pub type Result<T> = std::result::Result<T, AppError>;
