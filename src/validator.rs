//! Bounded score validation.
//!
//! [`ScoreValidator`] coerces an untrusted [`RawInput`] into a [`Score`] in
//! `[MIN_SCORE, MAX_SCORE]`, or rejects it with a [`ValidationError`] that is
//! either a type error (not a number) or a range error (a number, but out of
//! bounds).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::score::{MAX_SCORE, MIN_SCORE};
use crate::{RawInput, Sanitizer, Score, Tainted};

/// Optional minus sign, ASCII digits, optional fraction.
static NUMERIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("Invalid numeric regex pattern"));

/// Default bound on the trimmed length of text input.
pub const DEFAULT_MAX_INPUT_LEN: usize = 32;

/// Error returned when a raw input cannot become a [`Score`].
///
/// # Examples
///
/// ```
/// use secure_patterns::{validate, ValidationError, ValidationErrorKind};
///
/// let err = validate("101").unwrap_err();
/// assert_eq!(err.kind(), ValidationErrorKind::Range);
/// assert!(matches!(err, ValidationError::Range { value: 101, max: 100, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input is absent or cannot be read as a number.
    Type {
        /// Escaped, length-bounded rendering of the offending input.
        input: String,
        /// Why the input was not numeric.
        reason: TypeErrorReason,
    },
    /// The input is numeric but falls outside the accepted bounds.
    Range {
        /// The input truncated toward zero.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },
}

impl ValidationError {
    /// Returns the error classification.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::Type { .. } => ValidationErrorKind::Type,
            Self::Range { .. } => ValidationErrorKind::Range,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type { input, reason } => match reason {
                TypeErrorReason::Absent => {
                    write!(f, "type error: value must be numeric, no value was supplied")
                }
                TypeErrorReason::TooLong { max_len } => write!(
                    f,
                    "type error: value must be numeric, input '{}' exceeds {} characters",
                    input, max_len
                ),
                TypeErrorReason::NotNumeric | TypeErrorReason::NotFinite => write!(
                    f,
                    "type error: value must be numeric, cannot convert '{}'",
                    input
                ),
            },
            Self::Range { value, min, max } => write!(
                f,
                "range error: score must be between {} and {}, received {}",
                min, max, value
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Malformed or absent input.
    Type,
    /// Numeric input outside the accepted bounds.
    Range,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type => write!(f, "type error"),
            Self::Range => write!(f, "range error"),
        }
    }
}

/// Detail for [`ValidationError::Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeErrorReason {
    /// No value was supplied.
    Absent,
    /// The text does not parse as a decimal number.
    NotNumeric,
    /// The value parsed to infinity or NaN.
    NotFinite,
    /// The trimmed text exceeds the validator's length bound.
    TooLong {
        /// The configured bound.
        max_len: usize,
    },
}

/// How the numeric pattern check relates to parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPattern {
    /// Text must match `^-?\d+(\.\d+)?$` before it is parsed. Rejects
    /// exponents, a leading `+`, bare fractions like `.5`, and separators.
    #[default]
    Strict,
    /// The pattern result is logged but does not gate parsing: any text
    /// Rust's `f64` parser accepts is parsed (`+5`, `1e2`, `.5`). Digit
    /// separators such as `1_0` are still rejected.
    Lenient,
}

/// Validator coercing untrusted input into a [`Score`].
///
/// Text input is trimmed, bounded in length, checked against the numeric
/// pattern, parsed as a decimal, truncated toward zero, and range-checked.
/// Native integers and floats skip the text round-trip since their text form
/// parses back to the same number.
///
/// # Examples
///
/// ```
/// use secure_patterns::{NumericPattern, RawInput, Sanitizer, ScoreValidator, Tainted};
///
/// let strict = ScoreValidator::default_limits();
/// assert!(strict.sanitize(Tainted::new(RawInput::from("1e2"))).is_err());
///
/// let lenient = strict.with_pattern(NumericPattern::Lenient);
/// let score = lenient.sanitize(Tainted::new(RawInput::from("1e2"))).unwrap();
/// assert_eq!(score.value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreValidator {
    max_input_len: usize,
    pattern: NumericPattern,
}

impl ScoreValidator {
    /// Creates a strict validator bounding text input to `max_input_len` characters.
    ///
    /// # Panics
    ///
    /// Panics if `max_input_len` is 0.
    pub fn new(max_input_len: usize) -> Self {
        assert!(max_input_len > 0, "max_input_len must be greater than 0");
        Self {
            max_input_len,
            pattern: NumericPattern::Strict,
        }
    }

    /// Creates a strict validator with the default 32 character bound.
    pub fn default_limits() -> Self {
        Self::new(DEFAULT_MAX_INPUT_LEN)
    }

    /// Returns a copy using the given pattern policy.
    pub fn with_pattern(self, pattern: NumericPattern) -> Self {
        Self { pattern, ..self }
    }

    /// Returns the configured length bound.
    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    /// Returns the configured pattern policy.
    pub fn pattern(&self) -> NumericPattern {
        self.pattern
    }

    /// Validates `raw` directly.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Type`] for absent or non-numeric input and
    /// [`ValidationError::Range`] for numbers outside `[0, 100]`.
    pub fn validate(&self, raw: impl Into<RawInput>) -> Result<Score, ValidationError> {
        self.sanitize(Tainted::new(raw.into()))
    }

    /// Reads `raw` as a number truncated toward zero.
    fn truncated_value(&self, raw: &RawInput) -> Result<i64, ValidationError> {
        match raw {
            RawInput::Absent => Err(ValidationError::Type {
                input: String::from("<absent>"),
                reason: TypeErrorReason::Absent,
            }),
            RawInput::Integer(n) => Ok(*n),
            RawInput::Decimal(x) => self.truncate(*x, &x.to_string()),
            RawInput::Text(text) => self.parse_text(text),
        }
    }

    fn parse_text(&self, text: &str) -> Result<i64, ValidationError> {
        let trimmed = text.trim();

        if trimmed.chars().count() > self.max_input_len {
            return Err(ValidationError::Type {
                input: self.echo(trimmed),
                reason: TypeErrorReason::TooLong {
                    max_len: self.max_input_len,
                },
            });
        }

        let matches = NUMERIC_PATTERN.is_match(trimmed);
        tracing::trace!(matches, pattern = ?self.pattern, "numeric pattern check");

        if !matches && self.pattern == NumericPattern::Strict {
            return Err(self.not_numeric(trimmed));
        }

        let parsed: f64 = trimmed.parse().map_err(|_| self.not_numeric(trimmed))?;
        self.truncate(parsed, trimmed)
    }

    /// `as` truncates toward zero and saturates at the i64 bounds.
    fn truncate(&self, x: f64, shown: &str) -> Result<i64, ValidationError> {
        if !x.is_finite() {
            return Err(ValidationError::Type {
                input: self.echo(shown),
                reason: TypeErrorReason::NotFinite,
            });
        }
        Ok(x.trunc() as i64)
    }

    fn not_numeric(&self, text: &str) -> ValidationError {
        ValidationError::Type {
            input: self.echo(text),
            reason: TypeErrorReason::NotNumeric,
        }
    }

    /// Escapes control characters and caps the rendering at the length bound.
    fn echo(&self, text: &str) -> String {
        let mut out: String = text
            .chars()
            .take(self.max_input_len)
            .flat_map(char::escape_debug)
            .collect();
        if text.chars().count() > self.max_input_len {
            out.push_str("...");
        }
        out
    }
}

impl Default for ScoreValidator {
    fn default() -> Self {
        Self::default_limits()
    }
}

impl Sanitizer<RawInput> for ScoreValidator {
    type Output = Score;
    type Error = ValidationError;

    fn sanitize(&self, input: Tainted<RawInput>) -> Result<Score, ValidationError> {
        let raw = input.into_inner();
        let shown = raw
            .stringify()
            .map_or_else(|| String::from("<absent>"), |text| self.echo(&text));
        tracing::debug!(input = %shown, kind = raw.type_name(), "received score input");

        let truncated = self.truncated_value(&raw).map_err(|err| {
            tracing::warn!(error = %err, "rejected score input");
            err
        })?;

        if !(MIN_SCORE..=MAX_SCORE).contains(&truncated) {
            let err = ValidationError::Range {
                value: truncated,
                min: MIN_SCORE,
                max: MAX_SCORE,
            };
            tracing::warn!(error = %err, "rejected score input");
            return Err(err);
        }

        let score = Score::new_unchecked(truncated as u8);
        tracing::info!(score = score.value(), "validated score");
        Ok(score)
    }
}

/// Validates `raw` with [`ScoreValidator::default_limits`].
///
/// # Errors
///
/// Returns [`ValidationError::Type`] when the input is absent or not numeric,
/// and [`ValidationError::Range`] when it falls outside `[0, 100]`.
///
/// # Examples
///
/// ```
/// use secure_patterns::{validate, ValidationErrorKind};
///
/// assert_eq!(validate("95").unwrap().value(), 95);
/// assert_eq!(validate(75.9).unwrap().value(), 75);
/// assert_eq!(validate("75; DROP TABLE").unwrap_err().kind(), ValidationErrorKind::Type);
/// assert_eq!(validate(None::<&str>).unwrap_err().kind(), ValidationErrorKind::Type);
/// ```
pub fn validate(raw: impl Into<RawInput>) -> Result<Score, ValidationError> {
    ScoreValidator::default_limits().validate(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient() -> ScoreValidator {
        ScoreValidator::default_limits().with_pattern(NumericPattern::Lenient)
    }

    #[test]
    fn text_score_is_accepted() {
        assert_eq!(validate("95").unwrap().value(), 95);
    }

    #[test]
    fn native_values_are_accepted() {
        assert_eq!(validate(42).unwrap().value(), 42);
        assert_eq!(validate(0).unwrap().value(), 0);
        assert_eq!(validate(100).unwrap().value(), 100);
    }

    #[test]
    fn decimal_truncates_instead_of_rounding() {
        assert_eq!(validate(75.9).unwrap().value(), 75);
        assert_eq!(validate("75.9").unwrap().value(), 75);
        assert_eq!(validate(99.999).unwrap().value(), 99);
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(validate("  50\t\n").unwrap().value(), 50);
    }

    #[test]
    fn small_negative_fraction_truncates_to_zero() {
        assert_eq!(validate("-0.5").unwrap().value(), 0);
        assert_eq!(validate(-0.9).unwrap().value(), 0);
    }

    #[test]
    fn just_above_max_truncates_into_range() {
        assert_eq!(validate("100.9").unwrap().value(), 100);
    }

    #[test]
    fn above_max_is_range_error() {
        let err = validate("101").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Range {
                value: 101,
                min: 0,
                max: 100
            }
        );
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn below_min_is_range_error() {
        let err = validate("-10").unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::Range);
        assert!(matches!(err, ValidationError::Range { value: -10, min: 0, .. }));
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn negative_decimal_range_error_carries_truncated_value() {
        let err = validate(-75.9).unwrap_err();
        assert!(matches!(err, ValidationError::Range { value: -75, .. }));
    }

    #[test]
    fn injection_payload_is_type_error() {
        for validator in [ScoreValidator::default_limits(), lenient()] {
            let err = validator.validate("75; DROP TABLE").unwrap_err();
            assert_eq!(err.kind(), ValidationErrorKind::Type);
            assert!(err.to_string().contains("cannot convert '75; DROP TABLE'"));
        }
    }

    #[test]
    fn non_numeric_text_is_type_error() {
        let err = validate("abc").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Type {
                input: "abc".to_string(),
                reason: TypeErrorReason::NotNumeric,
            }
        );
    }

    #[test]
    fn empty_text_is_type_error() {
        assert_eq!(validate("").unwrap_err().kind(), ValidationErrorKind::Type);
        assert_eq!(validate("   ").unwrap_err().kind(), ValidationErrorKind::Type);
    }

    #[test]
    fn absent_is_type_error() {
        let err = validate(None::<i64>).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Type {
                reason: TypeErrorReason::Absent,
                ..
            }
        ));
        assert_eq!(validate(RawInput::Absent).unwrap_err(), err);
    }

    #[test]
    fn strict_rejects_what_lenient_accepts() {
        for text in ["1e2", "+5", ".5", "5."] {
            assert_eq!(
                validate(text).unwrap_err().kind(),
                ValidationErrorKind::Type,
                "strict should reject {text:?}"
            );
            assert!(lenient().validate(text).is_ok(), "lenient should accept {text:?}");
        }
    }

    #[test]
    fn separators_are_rejected_in_both_modes() {
        for validator in [ScoreValidator::default_limits(), lenient()] {
            assert!(validator.validate("1,000").is_err());
            assert!(validator.validate("5 0").is_err());
        }
    }

    #[test]
    fn lenient_rejects_digit_separators() {
        let err = lenient().validate("1_0").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Type {
                input: "1_0".to_string(),
                reason: TypeErrorReason::NotNumeric,
            }
        );
    }

    #[test]
    fn lenient_exponent_out_of_range_is_range_error() {
        let err = lenient().validate("1e3").unwrap_err();
        assert!(matches!(err, ValidationError::Range { value: 1000, .. }));
    }

    #[test]
    fn non_finite_values_are_type_errors() {
        for raw in [
            RawInput::Decimal(f64::NAN),
            RawInput::Decimal(f64::INFINITY),
            RawInput::Decimal(f64::NEG_INFINITY),
        ] {
            let err = validate(raw).unwrap_err();
            assert!(matches!(
                err,
                ValidationError::Type {
                    reason: TypeErrorReason::NotFinite,
                    ..
                }
            ));
        }

        let err = lenient().validate("inf").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Type {
                reason: TypeErrorReason::NotFinite,
                ..
            }
        ));
        assert_eq!(validate("NaN").unwrap_err().kind(), ValidationErrorKind::Type);
    }

    #[test]
    fn type_errors_echo_trimmed_input() {
        let err = validate("  abc \t").unwrap_err();
        assert!(matches!(&err, ValidationError::Type { input, .. } if input == "abc"));

        let err = lenient().validate(" inf ").unwrap_err();
        assert!(matches!(&err, ValidationError::Type { input, .. } if input == "inf"));

        let err = ScoreValidator::new(3).validate("  1234  ").unwrap_err();
        assert!(matches!(&err, ValidationError::Type { input, .. } if input == "123..."));
    }

    #[test]
    fn overlong_text_is_rejected_before_parsing() {
        let long = "1".repeat(DEFAULT_MAX_INPUT_LEN + 1);
        let err = validate(long.as_str()).unwrap_err();

        assert!(matches!(
            err,
            ValidationError::Type {
                reason: TypeErrorReason::TooLong { max_len: 32 },
                ..
            }
        ));
        assert!(!err.to_string().contains(&long));
    }

    #[test]
    fn text_at_length_bound_is_parsed() {
        let validator = ScoreValidator::new(4);
        assert_eq!(validator.validate("  99.5  ").unwrap().value(), 99);
        assert!(validator.validate("99.55").is_err());
    }

    #[test]
    fn large_native_values_are_range_errors_not_length_errors() {
        let err = validate(1e300).unwrap_err();
        assert!(matches!(err, ValidationError::Range { value: i64::MAX, .. }));

        let err = validate(i64::MIN).unwrap_err();
        assert!(matches!(err, ValidationError::Range { value: i64::MIN, .. }));
    }

    #[test]
    fn error_escapes_control_characters() {
        let err = validate("7\n0").unwrap_err();
        let message = err.to_string();

        assert!(!message.contains('\n'));
        assert!(message.contains("7\\n0"));
    }

    #[test]
    fn validated_score_revalidates_to_itself() {
        let first = validate("88.8").unwrap();
        assert_eq!(validate(first).unwrap(), first);
    }

    #[test]
    fn builder_accessors() {
        let validator = ScoreValidator::new(8).with_pattern(NumericPattern::Lenient);
        assert_eq!(validator.max_input_len(), 8);
        assert_eq!(validator.pattern(), NumericPattern::Lenient);
        assert_eq!(ScoreValidator::default(), ScoreValidator::default_limits());
        assert_eq!(NumericPattern::default(), NumericPattern::Strict);
    }

    #[test]
    #[should_panic(expected = "max_input_len must be greater than 0")]
    fn zero_length_bound_panics() {
        let _validator = ScoreValidator::new(0);
    }

    #[test]
    fn error_kinds_display() {
        assert_eq!(format!("{}", ValidationErrorKind::Type), "type error");
        assert_eq!(format!("{}", ValidationErrorKind::Range), "range error");
    }

    mod proptests {
        use super::*;
        use crate::test_utils::{arb_in_range_text, arb_out_of_range_int};
        use proptest::prelude::*;

        proptest! {
            /// In-range numeric text validates to its truncated value.
            #[test]
            fn proptest_in_range_text_truncates(text in arb_in_range_text()) {
                let expected = text.trim().parse::<f64>().unwrap().trunc() as u8;
                prop_assert_eq!(validate(text.as_str()).unwrap().value(), expected);
            }

            /// In-range floats validate to their truncated value.
            #[test]
            fn proptest_in_range_decimal_truncates(x in 0.0f64..101.0) {
                prop_assert_eq!(validate(x).unwrap().value(), x.trunc() as u8);
            }

            /// Out-of-range integers carry their value in the range error.
            #[test]
            fn proptest_out_of_range_is_range_error(n in arb_out_of_range_int()) {
                let err = validate(n).unwrap_err();
                prop_assert_eq!(
                    err,
                    ValidationError::Range { value: n, min: MIN_SCORE, max: MAX_SCORE }
                );

                let err = validate(n.to_string()).unwrap_err();
                prop_assert_eq!(err.kind(), ValidationErrorKind::Range);
            }

            /// Text with any letter in it never validates.
            #[test]
            fn proptest_text_with_letters_is_type_error(
                text in "[0-9]{0,3}[a-zA-Z;'][a-zA-Z;' ]{0,4}[0-9]{0,3}"
            ) {
                let err = validate(text.as_str()).unwrap_err();
                prop_assert_eq!(err.kind(), ValidationErrorKind::Type);
            }

            /// Validation is idempotent on success.
            #[test]
            fn proptest_validation_is_idempotent(x in -50.0f64..150.0) {
                if let Ok(score) = validate(x) {
                    prop_assert_eq!(validate(score), Ok(score));
                }
            }
        }
    }
}
