//! Untyped caller input.
//!
//! [`RawInput`] models the handful of shapes an untrusted value can take
//! when it reaches a validator: text, a native integer, a native float, or
//! nothing at all.

use std::borrow::Cow;
use std::fmt;

/// An untyped value supplied by a caller.
///
/// # Examples
///
/// ```
/// use secure_patterns::RawInput;
///
/// assert_eq!(RawInput::from("95"), RawInput::Text("95".to_string()));
/// assert_eq!(RawInput::from(42), RawInput::Integer(42));
/// assert_eq!(RawInput::from(None::<i64>), RawInput::Absent);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Text that may or may not hold a number.
    Text(String),
    /// A native integer.
    Integer(i64),
    /// A native floating-point number.
    Decimal(f64),
    /// No value was supplied.
    Absent,
}

impl RawInput {
    /// Returns the text form of this input, or `None` for [`RawInput::Absent`].
    ///
    /// Floats use Rust's shortest round-trip formatting, which never produces
    /// exponent notation (`1e-7` renders as `0.0000001`).
    pub fn stringify(&self) -> Option<Cow<'_, str>> {
        match self {
            RawInput::Text(text) => Some(Cow::Borrowed(text.as_str())),
            RawInput::Integer(n) => Some(Cow::Owned(n.to_string())),
            RawInput::Decimal(x) => Some(Cow::Owned(x.to_string())),
            RawInput::Absent => None,
        }
    }

    /// Short name of the variant, used in log fields.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawInput::Text(_) => "text",
            RawInput::Integer(_) => "integer",
            RawInput::Decimal(_) => "decimal",
            RawInput::Absent => "absent",
        }
    }
}

impl fmt::Display for RawInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stringify() {
            Some(text) => f.write_str(&text),
            None => f.write_str("<absent>"),
        }
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Decimal(value)
    }
}

impl From<f32> for RawInput {
    fn from(value: f32) -> Self {
        RawInput::Decimal(f64::from(value))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawInput {
                fn from(value: $ty) -> Self {
                    RawInput::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Absent, Into::into)
    }
}
