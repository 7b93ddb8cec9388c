//! Whitespace stripping and digit extraction.
//!
//! Both halves of the pipeline work on the *normalized digit string*: the raw
//! input with whitespace removed. The validator additionally insists that
//! everything left over is an ASCII digit; the brand identifier does not.

use crate::error::ValidationError;

/// Returns true for the characters treated as whitespace.
///
/// This is the C locale `isspace` set: space, tab, newline, vertical tab,
/// form feed and carriage return. Unicode whitespace such as U+00A0 is not
/// included and counts as an invalid character.
#[inline]
pub const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Removes whitespace and keeps every other character, in order.
///
/// # Example
///
/// ```
/// use cardcheck::normalize::strip_whitespace;
///
/// assert_eq!(strip_whitespace("4539 1488\t0343 6467\n"), "4539148803436467");
/// assert_eq!(strip_whitespace("12 ab"), "12ab");
/// ```
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|&c| !is_space(c)).collect()
}

/// Extracts the digits of `raw`, failing on the first non-digit.
///
/// Whitespace is skipped. No length check happens here.
///
/// # Example
///
/// ```
/// use cardcheck::normalize::normalize;
/// use cardcheck::ValidationError;
///
/// assert_eq!(normalize("6011 0000 0000 0004").unwrap(), "6011000000000004");
/// assert_eq!(
///     normalize("60x1").unwrap_err(),
///     ValidationError::InvalidCharacter { position: 2, character: 'x' }
/// );
/// ```
pub fn normalize(raw: &str) -> Result<String, ValidationError> {
    let mut digits = String::with_capacity(raw.len());

    for (position, c) in raw.chars().enumerate() {
        match c {
            '0'..='9' => digits.push(c),
            c if is_space(c) => {}
            _ => {
                return Err(ValidationError::InvalidCharacter {
                    position,
                    character: c,
                });
            }
        }
    }

    Ok(digits)
}

/// Converts an all-ASCII-digit string into digit values (0-9).
///
/// Callers must pass output of [`normalize`]; other bytes are mapped with
/// wrapping arithmetic and produce meaningless values.
#[inline]
pub(crate) fn digit_values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b.wrapping_sub(b'0')).collect()
}
