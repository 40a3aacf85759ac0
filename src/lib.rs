//! Secure-coding patterns with typed boundaries.
//!
//! This crate collects three independent demonstrations:
//! - **Fail-fast secrets**: required secrets come from the environment,
//!   optionally seeded from a `.env` file, and a missing one is an error
//! - **Parameterized queries**: the same lookup built by string interpolation
//!   and by parameter binding, side by side
//! - **Bounded input validation**: untrusted values coerced into a score in
//!   `[0, 100]` or rejected with a classified error
//!
//! # Core Types
//!
//! - [`Tainted<T>`]: Wrapper for untrusted data requiring sanitization
//! - [`Sanitizer`]: The only way out of `Tainted<T>`
//! - [`RawInput`]: Untyped caller input (text, integer, decimal, or absent)
//! - [`ScoreValidator`] / [`validate`]: Coerces `RawInput` into a [`Score`]
//! - [`Secret<T>`]: Wrapper that redacts sensitive values in logs/output
//! - [`UserDirectory`]: SQLite table queried unsafely and safely
//!
//! # Examples
//!
//! ```
//! use secure_patterns::{validate, Secret, ValidationErrorKind};
//!
//! // Untrusted text becomes a bounded score or a classified error
//! assert_eq!(validate("95").unwrap().value(), 95);
//! assert_eq!(validate("101").unwrap_err().kind(), ValidationErrorKind::Range);
//! assert_eq!(validate("75; DROP TABLE").unwrap_err().kind(), ValidationErrorKind::Type);
//!
//! // Secrets are automatically redacted
//! let api_key = Secret::new("super-secret-key".to_string());
//! assert_eq!(format!("{:?}", api_key), "[REDACTED]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod input;
mod query;
mod sanitizer;
mod score;
mod secret;
mod secrets;
mod tainted;
mod validator;

#[cfg(test)]
mod test_utils;

pub use error::Error;
pub use input::RawInput;
pub use query::{QueryError, User, UserDirectory};
pub use sanitizer::Sanitizer;
pub use score::{Score, MAX_SCORE, MIN_SCORE};
pub use secret::Secret;
pub use secrets::{get_secret, init_env, init_env_from, EnvInit, SecretError, SecretStore};
pub use tainted::Tainted;
pub use validator::{
    validate, NumericPattern, ScoreValidator, TypeErrorReason, ValidationError,
    ValidationErrorKind, DEFAULT_MAX_INPUT_LEN,
};
