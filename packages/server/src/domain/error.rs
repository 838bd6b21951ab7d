//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Name validation error
    #[error("cannot be empty")]
    NameEmpty,

    /// Name too long error
    #[error("cannot exceed {max} characters (got {actual})")]
    NameTooLong { max: usize, actual: usize },
}

/// Errors returned by repository implementations.
///
/// Missing records and write conflicts are not errors; they surface as
/// `None` / `false` results instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The underlying store could not be reached or failed.
    #[error("store unavailable: {message}")]
    StoreUnavailable { message: String },
}
