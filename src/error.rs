//! Rejection reasons for card number validation.
//!
//! [`crate::validate`] only answers yes or no. [`crate::check`] runs the same
//! pipeline and reports the first reason a number was rejected, which is what
//! the CLI prints with `--explain` and what gets logged.

use std::fmt;

/// Why a card number failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A character that is neither a digit nor whitespace was found.
    ///
    /// Scanning stops at the first such character.
    InvalidCharacter {
        /// Character index in the raw input (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// Fewer digits than any supported card number.
    TooShort {
        /// Number of digits after stripping whitespace.
        length: usize,
        /// The minimum accepted (13).
        minimum: usize,
    },

    /// More digits than any supported card number.
    TooLong {
        /// Number of digits after stripping whitespace.
        length: usize,
        /// The maximum accepted (19).
        maximum: usize,
    },

    /// The Luhn checksum did not come out to a multiple of 10.
    InvalidChecksum,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} (only digits and whitespace allowed)",
                    character.escape_default(),
                    position
                )
            }

            Self::TooShort { length, minimum } => {
                write!(
                    f,
                    "card number too short: got {} digits, minimum is {}",
                    length, minimum
                )
            }

            Self::TooLong { length, maximum } => {
                write!(
                    f,
                    "card number too long: got {} digits, maximum is {}",
                    length, maximum
                )
            }

            Self::InvalidChecksum => write!(f, "invalid checksum (Luhn check failed)"),
        }
    }
}

impl std::error::Error for ValidationError {}
