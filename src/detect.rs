//! Brand identification from length and leading digits.
//!
//! Rules are evaluated in [`BRAND_RULES`] order and the first match wins. A
//! prefix that cannot be read (too short, or not all digits) simply fails to
//! match its rule; identification never errors.

use crate::card::Brand;
use crate::normalize::strip_whitespace;

/// A test on the leading bytes of a normalized card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// The number starts with this literal.
    Literal(&'static str),
    /// The first `width` bytes, read as a decimal integer, fall in
    /// `low..=high`.
    Numeric {
        /// Number of leading digits to read.
        width: usize,
        /// Inclusive lower bound.
        low: u32,
        /// Inclusive upper bound.
        high: u32,
    },
    /// The first `low.len()` bytes compare byte-wise between `low` and
    /// `high`, inclusive.
    ///
    /// Only agrees with [`Prefix::Numeric`] because both bounds share a width
    /// and leading digit. Only the Discover 644-649 range uses it.
    Lexical {
        /// Inclusive lower bound.
        low: &'static str,
        /// Inclusive upper bound, same width as `low`.
        high: &'static str,
    },
}

impl Prefix {
    /// Returns true if `digits` starts with a prefix this rule accepts.
    pub fn matches(&self, digits: &str) -> bool {
        match *self {
            Self::Literal(lit) => digits.as_bytes().starts_with(lit.as_bytes()),
            Self::Numeric { width, low, high } => {
                parse_prefix(digits, width).is_some_and(|n| (low..=high).contains(&n))
            }
            Self::Lexical { low, high } => digits
                .as_bytes()
                .get(..low.len())
                .is_some_and(|p| low.as_bytes() <= p && p <= high.as_bytes()),
        }
    }
}

/// Length and prefix requirements for one brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRule {
    brand: Brand,
    lengths: &'static [usize],
    prefixes: &'static [Prefix],
}

impl BrandRule {
    /// The brand this rule identifies.
    #[inline]
    pub const fn brand(&self) -> Brand {
        self.brand
    }

    /// Accepted lengths, in bytes of the normalized number.
    #[inline]
    pub const fn lengths(&self) -> &'static [usize] {
        self.lengths
    }

    /// Accepted prefixes; any one of them is enough.
    #[inline]
    pub const fn prefixes(&self) -> &'static [Prefix] {
        self.prefixes
    }

    /// Returns true if the length is accepted and any prefix matches.
    pub fn matches(&self, digits: &str) -> bool {
        self.lengths.contains(&digits.len()) && self.prefixes.iter().any(|p| p.matches(digits))
    }
}

const SIXTEEN_TO_NINETEEN: &[usize] = &[16, 17, 18, 19];

/// The brand table, in priority order.
pub const BRAND_RULES: [BrandRule; 5] = [
    BrandRule {
        brand: Brand::Visa,
        lengths: &[13, 16],
        prefixes: &[Prefix::Literal("4")],
    },
    BrandRule {
        brand: Brand::Mastercard,
        lengths: &[16],
        prefixes: &[
            Prefix::Numeric {
                width: 2,
                low: 51,
                high: 55,
            },
            Prefix::Numeric {
                width: 4,
                low: 2221,
                high: 2720,
            },
        ],
    },
    BrandRule {
        brand: Brand::Amex,
        lengths: &[15],
        prefixes: &[
            Prefix::Numeric {
                width: 2,
                low: 34,
                high: 34,
            },
            Prefix::Numeric {
                width: 2,
                low: 37,
                high: 37,
            },
        ],
    },
    BrandRule {
        brand: Brand::Discover,
        lengths: SIXTEEN_TO_NINETEEN,
        prefixes: &[
            Prefix::Literal("6011"),
            Prefix::Literal("65"),
            Prefix::Lexical {
                low: "644",
                high: "649",
            },
            Prefix::Numeric {
                width: 6,
                low: 622126,
                high: 622925,
            },
        ],
    },
    BrandRule {
        brand: Brand::Jcb,
        lengths: SIXTEEN_TO_NINETEEN,
        prefixes: &[Prefix::Numeric {
            width: 4,
            low: 3528,
            high: 3589,
        }],
    },
];

/// Reads the first `width` bytes of `digits` as a decimal integer.
///
/// Returns `None` if `digits` is shorter than `width` or any of those bytes
/// is not an ASCII digit. There is no partial parse.
///
/// # Example
///
/// ```
/// use cardcheck::detect::parse_prefix;
///
/// assert_eq!(parse_prefix("622126000", 6), Some(622126));
/// assert_eq!(parse_prefix("62", 6), None);
/// assert_eq!(parse_prefix("5x11", 2), None);
/// ```
pub fn parse_prefix(digits: &str, width: usize) -> Option<u32> {
    // u32 holds any 9-digit prefix
    if width == 0 || width > 9 {
        return None;
    }

    digits
        .as_bytes()
        .get(..width)?
        .iter()
        .try_fold(0u32, |acc, &b| {
            b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
        })
}

/// Identifies the brand of an already whitespace-stripped number.
///
/// # Example
///
/// ```
/// use cardcheck::detect::detect_brand;
/// use cardcheck::Brand;
///
/// assert_eq!(detect_brand("371449635398431"), Brand::Amex);
/// assert_eq!(detect_brand("9999999999999999"), Brand::Unknown);
/// ```
pub fn detect_brand(digits: &str) -> Brand {
    BRAND_RULES
        .iter()
        .find(|rule| rule.matches(digits))
        .map_or(Brand::Unknown, BrandRule::brand)
}

/// Identifies the brand of a raw card number.
///
/// Strips whitespace, then applies [`BRAND_RULES`]. The input does not need
/// to pass validation first, and non-digit content only makes the affected
/// rules fail to match.
///
/// # Example
///
/// ```
/// use cardcheck::{identify_brand, Brand};
///
/// assert_eq!(identify_brand("4539 1488 0343 6467"), Brand::Visa);
/// // Checksum does not matter here
/// assert_eq!(identify_brand("4000000000002"), Brand::Visa);
/// assert_eq!(identify_brand(""), Brand::Unknown);
/// ```
pub fn identify_brand(raw: &str) -> Brand {
    detect_brand(&strip_whitespace(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(prefix: &str, len: usize) -> String {
        format!("{:0<width$}", prefix, width = len)
    }

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect_brand(&padded("4", 13)), Brand::Visa);
        assert_eq!(detect_brand(&padded("4", 16)), Brand::Visa);
        // Other lengths are not Visa
        assert_eq!(detect_brand(&padded("4", 15)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("4", 19)), Brand::Unknown);
    }

    #[test]
    fn test_mastercard_detection() {
        assert_eq!(detect_brand(&padded("51", 16)), Brand::Mastercard);
        assert_eq!(detect_brand(&padded("55", 16)), Brand::Mastercard);
        assert_eq!(detect_brand(&padded("2221", 16)), Brand::Mastercard);
        assert_eq!(detect_brand(&padded("2720", 16)), Brand::Mastercard);

        assert_eq!(detect_brand(&padded("50", 16)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("56", 16)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("2220", 16)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("2721", 16)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("51", 15)), Brand::Unknown);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect_brand(&padded("34", 15)), Brand::Amex);
        assert_eq!(detect_brand(&padded("37", 15)), Brand::Amex);
        assert_eq!(detect_brand(&padded("35", 15)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("34", 16)), Brand::Unknown);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(detect_brand(&padded("6011", 16)), Brand::Discover);
        assert_eq!(detect_brand(&padded("65", 19)), Brand::Discover);
        assert_eq!(detect_brand(&padded("644", 17)), Brand::Discover);
        assert_eq!(detect_brand(&padded("649", 18)), Brand::Discover);
        assert_eq!(detect_brand(&padded("622126", 16)), Brand::Discover);
        assert_eq!(detect_brand(&padded("622925", 16)), Brand::Discover);

        assert_eq!(detect_brand(&padded("643", 16)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("622125", 16)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("622926", 16)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("6011", 15)), Brand::Unknown);
    }

    #[test]
    fn test_discover_lexical_range_is_bytewise() {
        let rule = Prefix::Lexical {
            low: "644",
            high: "649",
        };
        assert!(rule.matches("6440"));
        assert!(rule.matches("649"));
        assert!(!rule.matches("64"));
        // ':' sorts after '9'
        assert!(!rule.matches("64:"));
        assert!(!rule.matches("650"));
    }

    #[test]
    fn test_jcb_detection() {
        assert_eq!(detect_brand(&padded("3528", 16)), Brand::Jcb);
        assert_eq!(detect_brand(&padded("3589", 19)), Brand::Jcb);
        assert_eq!(detect_brand(&padded("3527", 16)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("3590", 16)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("3528", 15)), Brand::Unknown);
    }

    #[test]
    fn test_priority_order() {
        // Discover is checked before JCB, Visa before everything
        assert_eq!(BRAND_RULES[0].brand(), Brand::Visa);
        assert_eq!(BRAND_RULES[3].brand(), Brand::Discover);
        assert_eq!(BRAND_RULES[4].brand(), Brand::Jcb);
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("5105", 2), Some(51));
        assert_eq!(parse_prefix("0001", 4), Some(1));
        assert_eq!(parse_prefix("5", 2), None);
        assert_eq!(parse_prefix("", 1), None);
        // No partial parsing of "5a" as 5
        assert_eq!(parse_prefix("5a00", 2), None);
        assert_eq!(parse_prefix("+500", 2), None);
        assert_eq!(parse_prefix("1234", 0), None);
    }

    #[test]
    fn test_malformed_prefix_falls_through() {
        // 16 bytes with a non-digit in the MasterCard prefix
        assert_eq!(detect_brand("5a00000000000000"), Brand::Unknown);
        // Non-ASCII bytes never match a numeric rule
        assert_eq!(detect_brand("3\u{e9}28000000000000"), Brand::Unknown);
        // Visa only looks at the first character
        assert_eq!(detect_brand("4abcdefghijkl"), Brand::Visa);
    }

    #[test]
    fn test_identify_strips_whitespace() {
        assert_eq!(identify_brand("6011 0000 0000 0004"), Brand::Discover);
        assert_eq!(identify_brand(" 3714 496353 98431 "), Brand::Amex);
        assert_eq!(identify_brand("   "), Brand::Unknown);
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(detect_brand(""), Brand::Unknown);
        assert_eq!(detect_brand(&padded("1", 16)), Brand::Unknown);
        assert_eq!(detect_brand(&padded("9", 16)), Brand::Unknown);
    }
}
