//! # Error Types
//!
//! Errors raised while constructing or validating core data model values.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.

use thiserror::Error;

/// Top-level error type for the core data model.
#[derive(Error, Debug)]
pub enum CfxError {
    /// A priority string did not name one of the four priority levels.
    #[error("unknown control priority: {0:?}")]
    UnknownPriority(String),

    /// A framework or control failed structural validation.
    #[error("validation error: {0}")]
    Validation(String),
}
