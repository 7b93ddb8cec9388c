//! Validation pipeline: normalize, bound the length, check Luhn, then
//! identify the brand.
//!
//! [`validate`] is the plain yes/no answer. [`check`] runs the same steps and
//! keeps the reason for a rejection. [`inspect`] is the full raw-input to
//! result composition the CLI prints.

use crate::card::{Brand, CardNumber, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::detect::detect_brand;
use crate::error::ValidationError;
use crate::luhn;
use crate::normalize::{digit_values, normalize};

/// Validates a raw card number.
///
/// The number may contain whitespace anywhere. Any other non-digit character
/// makes it invalid, as does a digit count outside 13-19 or a failed Luhn
/// check. Never panics.
///
/// # Example
///
/// ```
/// use cardcheck::validate;
///
/// assert!(validate("4539 1488 0343 6467"));
/// assert!(!validate("1234567890123"));
/// assert!(!validate("abcd efgh"));
/// assert!(!validate(""));
/// ```
#[inline]
pub fn validate(raw: &str) -> bool {
    check(raw).is_ok()
}

/// Validates a raw card number, returning the reason on failure.
///
/// On success the returned [`CardNumber`] carries the normalized digits and
/// the identified brand.
///
/// # Example
///
/// ```
/// use cardcheck::{check, Brand, ValidationError};
///
/// let card = check("6011 0000 0000 0004").unwrap();
/// assert_eq!(card.brand(), Brand::Discover);
///
/// assert_eq!(check("1234567890123").unwrap_err(), ValidationError::InvalidChecksum);
/// ```
pub fn check(raw: &str) -> Result<CardNumber, ValidationError> {
    let result = run_checks(raw);
    trace_outcome(&result);
    result
}

#[cfg(feature = "tracing")]
fn trace_outcome(result: &Result<CardNumber, ValidationError>) {
    match result {
        Ok(card) => tracing::trace!(brand = %card.brand(), length = card.length(), "card accepted"),
        Err(reason) => tracing::trace!(%reason, "card rejected"),
    }
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_outcome(_result: &Result<CardNumber, ValidationError>) {}

fn run_checks(raw: &str) -> Result<CardNumber, ValidationError> {
    let digits = normalize(raw)?;
    let length = digits.len();

    if length < MIN_CARD_DIGITS {
        return Err(ValidationError::TooShort {
            length,
            minimum: MIN_CARD_DIGITS,
        });
    }

    if length > MAX_CARD_DIGITS {
        return Err(ValidationError::TooLong {
            length,
            maximum: MAX_CARD_DIGITS,
        });
    }

    if !luhn::validate(&digit_values(&digits)) {
        return Err(ValidationError::InvalidChecksum);
    }

    let brand = detect_brand(&digits);
    Ok(CardNumber::new(brand, digits))
}

/// Outcome of running a raw input through the whole pipeline.
///
/// Serializes as `{"valid": true, "brand": "Visa"}` or `{"valid": false}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Passed validation; the brand may still be `Unknown`.
    Valid(Brand),
    /// Failed validation. No brand is identified.
    Invalid,
}

impl Verdict {
    /// Returns true for `Verdict::Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns the brand of a valid card.
    #[inline]
    pub const fn brand(&self) -> Option<Brand> {
        match self {
            Self::Valid(brand) => Some(*brand),
            Self::Invalid => None,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Verdict {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Verdict", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        match self {
            Self::Valid(brand) => state.serialize_field("brand", brand)?,
            Self::Invalid => state.skip_field("brand")?,
        }
        state.end()
    }
}

impl From<&Result<CardNumber, ValidationError>> for Verdict {
    fn from(result: &Result<CardNumber, ValidationError>) -> Self {
        match result {
            Ok(card) => Self::Valid(card.brand()),
            Err(_) => Self::Invalid,
        }
    }
}

/// Validates a raw input and, only if it passes, identifies its brand.
///
/// # Example
///
/// ```
/// use cardcheck::{inspect, Brand, Verdict};
///
/// assert_eq!(inspect("371449635398431"), Verdict::Valid(Brand::Amex));
/// assert_eq!(inspect("4000000000002"), Verdict::Invalid);
/// ```
#[inline]
pub fn inspect(raw: &str) -> Verdict {
    Verdict::from(&check(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISA_SPACED: &str = "4539 1488 0343 6467";
    const DISCOVER: &str = "6011000000000004";
    const AMEX: &str = "371449635398431";

    #[test]
    fn test_known_vectors() {
        assert!(validate(VISA_SPACED));
        assert!(validate(DISCOVER));
        assert!(validate(AMEX));
        assert!(!validate("1234567890123"));
        assert!(!validate("abcd efgh"));
    }

    #[test]
    fn test_check_reports_brand() {
        assert_eq!(check(VISA_SPACED).unwrap().brand(), Brand::Visa);
        assert_eq!(check(DISCOVER).unwrap().brand(), Brand::Discover);
        assert_eq!(check(AMEX).unwrap().brand(), Brand::Amex);
    }

    #[test]
    fn test_check_normalizes() {
        let card = check(VISA_SPACED).unwrap();
        assert_eq!(card.number(), "4539148803436467");
        assert_eq!(card.length(), 16);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(
            check("").unwrap_err(),
            ValidationError::TooShort {
                length: 0,
                minimum: 13
            }
        );
        assert_eq!(
            check(" \t\n ").unwrap_err(),
            ValidationError::TooShort {
                length: 0,
                minimum: 13
            }
        );
    }

    #[test]
    fn test_length_bounds() {
        // 12 digits, would pass Luhn
        assert_eq!(
            check("400000000006").unwrap_err(),
            ValidationError::TooShort {
                length: 12,
                minimum: 13
            }
        );
        // 13 digits of zeros pass Luhn
        assert!(validate("0000000000000"));
        // 20 digits of zeros pass Luhn but are too long
        assert_eq!(
            check("00000000000000000000").unwrap_err(),
            ValidationError::TooLong {
                length: 20,
                maximum: 19
            }
        );
    }

    #[test]
    fn test_bad_character_wins_over_length() {
        // Would be too short, but the character is reported first
        assert_eq!(
            check("12x").unwrap_err(),
            ValidationError::InvalidCharacter {
                position: 2,
                character: 'x'
            }
        );
        // Dashes are not accepted as separators
        assert!(!validate("4539-1488-0343-6467"));
    }

    #[test]
    fn test_valid_with_unknown_brand() {
        // 19-digit number starting with 4 is not Visa
        let card = check("4111111111111111110").unwrap();
        assert_eq!(card.brand(), Brand::Unknown);
        assert_eq!(inspect("4111111111111111110"), Verdict::Valid(Brand::Unknown));
    }

    #[test]
    fn test_inspect() {
        assert_eq!(inspect(VISA_SPACED), Verdict::Valid(Brand::Visa));
        assert_eq!(inspect("abcd efgh"), Verdict::Invalid);
        assert_eq!(inspect(DISCOVER).brand(), Some(Brand::Discover));
        assert!(!inspect("").is_valid());
        assert_eq!(inspect("").brand(), None);
    }

    #[test]
    fn test_validate_matches_check() {
        for input in [VISA_SPACED, DISCOVER, AMEX, "", "x", "4000000000002"] {
            assert_eq!(validate(input), check(input).is_ok());
        }
    }
}
