use std::fmt;

use crate::{QueryError, SecretError, ValidationError};

/// Errors that can occur anywhere in this crate.
///
/// Each module returns its own error type; this enum lets callers that mix
/// them use `?` throughout.
///
/// # Examples
///
/// ```
/// use secure_patterns::{validate, Error, UserDirectory};
///
/// fn lookup_score_holder(raw: &str) -> Result<usize, Error> {
///     let score = validate(raw)?;
///     let directory = UserDirectory::open_demo()?;
///     Ok(directory.query_safe(&score.to_string())?.len())
/// }
///
/// assert_eq!(lookup_score_holder("2").unwrap(), 1);
/// assert!(matches!(lookup_score_holder("two"), Err(Error::Validation(_))));
/// ```
#[derive(Debug)]
pub enum Error {
    /// Input validation failed.
    Validation(ValidationError),
    /// A required secret could not be loaded.
    Secret(SecretError),
    /// A database operation failed.
    Query(QueryError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(e) => write!(f, "validation failed: {}", e),
            Error::Secret(e) => write!(f, "secret unavailable: {}", e),
            Error::Query(e) => write!(f, "query failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Validation(e) => Some(e),
            Error::Secret(e) => Some(e),
            Error::Query(e) => Some(e),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<SecretError> for Error {
    fn from(e: SecretError) -> Self {
        Error::Secret(e)
    }
}

impl From<QueryError> for Error {
    fn from(e: QueryError) -> Self {
        Error::Query(e)
    }
}
