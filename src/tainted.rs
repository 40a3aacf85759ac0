use std::fmt;

/// A wrapper for untrusted data that must pass through a sanitizer before use.
///
/// `Tainted<T>` marks values that crossed a trust boundary (form fields,
/// query strings, CLI arguments). The inner value cannot be read by code
/// outside this crate; the only way out is a [`Sanitizer`](crate::Sanitizer).
///
/// # Security Properties
///
/// - Does NOT implement `Deref` or any implicit conversion traits
/// - Inner value is inaccessible outside the crate
///
/// # Examples
///
/// ```
/// use secure_patterns::{RawInput, Sanitizer, ScoreValidator, Tainted};
///
/// let user_input = Tainted::new(RawInput::from("75; DROP TABLE"));
///
/// // The only way to use it is through a sanitizer, which rejects it here.
/// let result = ScoreValidator::default_limits().sanitize(user_input);
/// assert!(result.is_err());
/// ```
// Clone is kept so a tainted value can be offered to more than one sanitizer.
#[derive(Clone)]
pub struct Tainted<T> {
    // BREAKING CHANGE WARNING: This field MUST remain private.
    // Making it public bypasses taint tracking entirely (CWE-20: Improper Input Validation).
    inner: T,
}

impl<T> Tainted<T> {
    /// Wraps an untrusted value in `Tainted`.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Extracts the inner value.
    ///
    /// Only sanitizer implementations inside this crate may call this.
    ///
    /// BREAKING CHANGE WARNING: Changing visibility to `pub` lets callers
    /// extract raw values without validation (CWE-74, CWE-89).
    pub(crate) fn into_inner(self) -> T {
        self.inner
    }
}

// BREAKING CHANGE WARNING: Do NOT add Deref, AsRef, Borrow, From<T>, Into<T>, or any other
// implicit conversion traits to Tainted<T>.

impl<T: fmt::Debug> fmt::Debug for Tainted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tainted")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RawInput;

    #[test]
    fn tainted_debug_marks_origin() {
        let user_input = Tainted::new(RawInput::from("42"));
        let debug_output = format!("{:?}", user_input);

        assert!(debug_output.contains("Tainted"));
        assert!(debug_output.contains("42"));
    }

    #[test]
    fn tainted_into_inner_returns_value() {
        let tainted = Tainted::new(RawInput::Integer(7));
        assert_eq!(tainted.into_inner(), RawInput::Integer(7));
    }

    #[test]
    fn tainted_cannot_be_used_as_t() {
        let tainted_str = Tainted::new("unsafe".to_string());

        #[allow(dead_code)]
        fn takes_string(_s: String) {}

        // This would not compile if uncommented:
        // takes_string(tainted_str);

        assert_eq!(tainted_str.into_inner(), "unsafe");
    }

    mod proptests {
        use super::*;
        use crate::{test_utils::arb_in_range_text, Sanitizer, ScoreValidator};
        use proptest::prelude::*;

        proptest! {
            /// Cloned tainted values sanitize to the same outcome.
            #[test]
            fn proptest_tainted_clone_preserves_outcome(text in arb_in_range_text()) {
                let validator = ScoreValidator::default_limits();

                let tainted1 = Tainted::new(RawInput::from(text));
                let tainted2 = tainted1.clone();

                let score1 = validator.sanitize(tainted1).expect("in-range text should pass");
                let score2 = validator.sanitize(tainted2).expect("in-range text should pass");

                prop_assert_eq!(score1, score2);
            }
        }
    }
}
