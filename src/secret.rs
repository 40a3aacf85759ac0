use std::fmt;

/// Placeholder printed wherever a secret would otherwise be formatted.
const REDACTED: &str = "[REDACTED]";

/// Values shorter than this are never partially shown by [`Secret::masked`].
const MASK_MIN_LEN: usize = 12;

/// A loaded secret (API key, database password, token) that refuses to be printed.
///
/// [`get_secret`](crate::get_secret) hands secrets out wrapped in this type so
/// they cannot end up in logs or error messages by accident. Reading the value
/// takes an explicit call to [`expose_secret`](Self::expose_secret).
///
/// # Security Properties
///
/// - Does NOT implement `Deref`, `AsRef`, `Borrow`, `Clone`, or `Copy`
/// - Debug and Display output is always `[REDACTED]`, with no type information
///
/// # Examples
///
/// ```
/// use secure_patterns::Secret;
///
/// let api_key = Secret::new("sk-1234567890".to_string());
///
/// assert_eq!(format!("{:?}", api_key), "[REDACTED]");
/// assert_eq!(format!("{}", api_key), "[REDACTED]");
/// assert_eq!(api_key.expose_secret(), "sk-1234567890");
/// ```
// BREAKING CHANGE WARNING: Do NOT add Clone, Copy, or Default derives, and keep
// the field private. Either lets secret material spread without an explicit
// expose_secret() call (CWE-532).
pub struct Secret<T> {
    inner: T,
}

impl<T> Secret<T> {
    /// Wraps a sensitive value.
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Explicitly exposes the secret value.
    ///
    /// The name is deliberately loud so that reads of secret material stand
    /// out in review. Never pass the result to a formatter or logger.
    pub fn expose_secret(&self) -> &T {
        &self.inner
    }
}

impl<T: AsRef<str>> Secret<T> {
    /// Returns a partially masked preview such as `sk-1...7890`.
    ///
    /// Only the first and last four characters are shown, and only for
    /// values of at least 12 characters; shorter values render as
    /// `[REDACTED]`. Meant for confirming which key was loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use secure_patterns::Secret;
    ///
    /// let key = Secret::new("sk-1234567890".to_string());
    /// assert_eq!(key.masked(), "sk-1...7890");
    ///
    /// let short = Secret::new("hunter2");
    /// assert_eq!(short.masked(), "[REDACTED]");
    /// ```
    pub fn masked(&self) -> String {
        let value = self.inner.as_ref();
        let len = value.chars().count();
        if len < MASK_MIN_LEN {
            return String::from(REDACTED);
        }
        let head: String = value.chars().take(4).collect();
        let tail: String = value.chars().skip(len - 4).collect();
        format!("{}...{}", head, tail)
    }

    /// Returns the length of the secret in characters.
    pub fn char_len(&self) -> usize {
        self.inner.as_ref().chars().count()
    }
}

// Debug and Display MUST stay unconditional, including in debug builds.

impl<T> fmt::Debug for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Secret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
