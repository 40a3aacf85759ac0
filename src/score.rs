use std::fmt;

use crate::RawInput;

/// Lowest accepted score.
pub const MIN_SCORE: i64 = 0;

/// Highest accepted score.
pub const MAX_SCORE: i64 = 100;

/// A score that has passed validation.
///
/// A `Score` always satisfies `MIN_SCORE <= value <= MAX_SCORE`. It has no
/// public constructor, no `Default`, and no `From<integer>`; the only way to
/// obtain one is through [`ScoreValidator`](crate::ScoreValidator).
///
/// # Examples
///
/// ```compile_fail
/// use secure_patterns::Score;
///
/// // No public constructor:
/// let score = Score::new_unchecked(250);
/// ```
///
/// ```
/// use secure_patterns::validate;
///
/// let score = validate("95").unwrap();
/// assert_eq!(score.value(), 95);
/// assert_eq!(score.to_string(), "95");
/// ```
// BREAKING CHANGE WARNING: Do NOT add Default or From<integer> impls, and keep
// the field private. Either would allow out-of-range scores to be forged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    value: u8,
}

impl Score {
    /// Wraps a value already checked against the bounds.
    pub(crate) fn new_unchecked(value: u8) -> Self {
        debug_assert!(i64::from(value) <= MAX_SCORE);
        Self { value }
    }

    /// Returns the score.
    pub fn value(self) -> u8 {
        self.value
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.value
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        i64::from(score.value)
    }
}

/// Feeding a score back into validation yields the same score.
impl From<Score> for RawInput {
    fn from(score: Score) -> Self {
        RawInput::Integer(i64::from(score.value))
    }
}
