//! Error types for building users and directories.

use thiserror::Error;

/// Errors that can occur while constructing users or a [`UserDirectory`](super::UserDirectory).
///
/// Looking up an unknown id is *not* an error; [`UserDirectory::lookup`](super::UserDirectory::lookup)
/// returns `None` for that.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    /// User ids must be positive.
    #[error("Invalid user id: {0}")]
    InvalidId(i64),

    /// The user data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// Two records in the same directory share an id.
    #[error("User already exists: {0}")]
    DuplicateId(i64),
}
