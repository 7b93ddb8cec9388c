//! Core card types.
//!
//! `Brand` names the issuing network and `CardNumber` holds a number that
//! passed [`crate::check`].

use std::fmt;
use std::str::FromStr;

/// Card networks recognized by [`crate::identify_brand`].
///
/// Each variant's label (see [`Brand::name`]) is the exact string shown to
/// users and written in JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Brand {
    /// Visa - first digit 4, lengths 13 and 16
    Visa,
    /// MasterCard - prefix 51-55 or 2221-2720, length 16
    Mastercard,
    /// American Express - prefix 34 or 37, length 15
    Amex,
    /// Discover - prefix 6011, 65, 644-649 or 622126-622925, lengths 16-19
    Discover,
    /// JCB - prefix 3528-3589, lengths 16-19
    Jcb,
    /// No brand rule matched
    Unknown,
}

impl Brand {
    /// Every brand, in rule priority order, `Unknown` last.
    pub const ALL: [Brand; 6] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
        Self::Jcb,
        Self::Unknown,
    ];

    /// Returns the display label for the brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "MasterCard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for every brand except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unrecognized brand name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBrandError(String);

impl fmt::Display for ParseBrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized card brand '{}'", self.0)
    }
}

impl std::error::Error for ParseBrandError {}

impl FromStr for Brand {
    type Err = ParseBrandError;

    /// Accepts the display labels case-insensitively, plus a few short forms
    /// (`amex`, `mc`, `american-express`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "americanexpress" | "amex" => Ok(Self::Amex),
            "discover" => Ok(Self::Discover),
            "jcb" => Ok(Self::Jcb),
            "unknown" => Ok(Self::Unknown),
            _ => Err(ParseBrandError(s.to_string())),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Brand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 13;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// A card number that passed length and Luhn validation.
///
/// `Debug` and `Display` print the masked form, so a `CardNumber` can go into
/// log fields without leaking the full number.
#[derive(Clone, PartialEq, Eq)]
pub struct CardNumber {
    brand: Brand,
    digits: String,
}

impl CardNumber {
    /// Internal constructor; `digits` must be a normalized, validated string.
    #[inline]
    pub(crate) fn new(brand: Brand, digits: String) -> Self {
        Self { brand, digits }
    }

    /// Returns the identified brand.
    #[inline]
    pub const fn brand(&self) -> Brand {
        self.brand
    }

    /// Returns the number of digits.
    #[inline]
    pub fn length(&self) -> usize {
        self.digits.len()
    }

    /// Returns the last four digits.
    #[inline]
    pub fn last_four(&self) -> &str {
        &self.digits[self.digits.len().saturating_sub(4)..]
    }

    /// Returns the first six digits (the traditional BIN/IIN).
    #[inline]
    pub fn bin6(&self) -> &str {
        &self.digits[..6.min(self.digits.len())]
    }

    /// Returns the full normalized number.
    ///
    /// Prefer [`CardNumber::masked`] for anything that gets displayed or
    /// logged.
    #[inline]
    pub fn number(&self) -> &str {
        &self.digits
    }

    /// Returns the number with all but the last four digits masked.
    ///
    /// Format: `****-****-****-6467`.
    #[inline]
    pub fn masked(&self) -> String {
        crate::mask::mask_card(self)
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumber")
            .field("brand", &self.brand)
            .field("number", &self.masked())
            .field("length", &self.length())
            .finish()
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.brand, self.masked())
    }
}
