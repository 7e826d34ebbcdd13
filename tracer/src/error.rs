//! Typed input errors.
//!
//! `InputError` covers the input boundary only. Once validation passes, the
//! trace loop cannot fail: bounds always reference valid indices or the
//! exhausted sentinel state, so no runtime error type exists.

/// Typed failure for input validation.
///
/// Both kinds are recoverable and surfaced directly to the end user; no
/// partial trace is produced when either is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// An array token or the target string could not be parsed as an integer.
    NotANumber {
        /// The offending token, trimmed.
        token: String,
    },
    /// The parsed array has zero elements (empty string, or only
    /// whitespace/commas).
    EmptyArray,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber { token } => {
                write!(f, "not a valid integer: {token:?}")
            }
            Self::EmptyArray => write!(f, "array cannot be empty"),
        }
    }
}

impl std::error::Error for InputError {}
