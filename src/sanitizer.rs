use crate::Tainted;

/// Trait for turning tainted values into trusted ones.
///
/// `Sanitizer<T>` is the single exit from [`Tainted<T>`]. An implementation
/// inspects the untrusted value and either produces a typed, trusted
/// [`Output`](Self::Output) or rejects it with its [`Error`](Self::Error).
///
/// # Invariants
///
/// Implementations MUST:
/// - Validate the input completely before constructing `Output`
/// - Return `Err` rather than substituting a default on bad input
/// - Not echo control characters from the input verbatim in errors
///
/// # Examples
///
/// ```
/// use secure_patterns::{RawInput, Sanitizer, ScoreValidator, Tainted};
///
/// let validator = ScoreValidator::default_limits();
/// let score = validator.sanitize(Tainted::new(RawInput::from(" 88 "))).unwrap();
/// assert_eq!(score.value(), 88);
/// ```
pub trait Sanitizer<T> {
    /// Trusted value produced on success.
    type Output;
    /// Rejection produced on failure.
    type Error: std::error::Error;

    /// Sanitizes a tainted value.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the input fails validation.
    fn sanitize(&self, input: Tainted<T>) -> Result<Self::Output, Self::Error>;
}
