//! Input parsing and validation.
//!
//! Raw input is two text blobs: a comma-separated list of integers and a
//! target value. Validation happens here, before any search logic runs.
//! Tokens that are empty after trimming are skipped, so `"1,,2"` parses to
//! two elements and `",,"` is an empty array rather than a parse failure.

use crate::error::InputError;

/// Parse a comma-separated list of integers.
///
/// Each token is trimmed of surrounding whitespace. Empty tokens are
/// skipped. Duplicates are permitted and preserved; no upper bound on
/// length or magnitude is enforced beyond `i64` range.
///
/// # Errors
///
/// - [`InputError::NotANumber`] if any non-empty token fails `i64` parsing
///   (including overflow).
/// - [`InputError::EmptyArray`] if no tokens survive trimming.
pub fn parse_array(raw: &str) -> Result<Vec<i64>, InputError> {
    let mut values = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = token.parse::<i64>().map_err(|_| InputError::NotANumber {
            token: token.to_string(),
        })?;
        values.push(value);
    }
    if values.is_empty() {
        return Err(InputError::EmptyArray);
    }
    Ok(values)
}

/// Parse the target value.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] if the trimmed input fails `i64`
/// parsing. An empty target is a parse failure, not an empty array.
pub fn parse_target(raw: &str) -> Result<i64, InputError> {
    let token = raw.trim();
    token.parse::<i64>().map_err(|_| InputError::NotANumber {
        token: token.to_string(),
    })
}
