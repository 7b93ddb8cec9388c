//! Test card number generation.
//!
//! Every generated number passes [`crate::validate`] and identifies as the
//! requested brand. They are for tests and demos; none belongs to a real
//! account.
//!
//! # Example
//!
//! ```
//! use cardcheck::generate::generate_card_deterministic;
//! use cardcheck::{identify_brand, validate, Brand};
//!
//! let card = generate_card_deterministic(Brand::Jcb);
//! assert!(validate(&card));
//! assert_eq!(identify_brand(&card), Brand::Jcb);
//! ```

use crate::card::Brand;
use crate::luhn;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns the prefix used when generating numbers for `brand`.
///
/// `Unknown` gets a leading `1`, which no brand rule accepts.
pub const fn prefix_for_brand(brand: Brand) -> &'static str {
    match brand {
        Brand::Visa => "4",
        Brand::Mastercard => "51",
        Brand::Amex => "34",
        Brand::Discover => "6011",
        Brand::Jcb => "3528",
        Brand::Unknown => "1",
    }
}

/// Returns the length used when generating numbers for `brand`.
pub const fn default_length(brand: Brand) -> usize {
    match brand {
        Brand::Amex => 15,
        _ => 16,
    }
}

/// Builds a number from `prefix` plus filler digits and a check digit.
///
/// # Panics
///
/// Panics if `prefix` is not all ASCII digits or is not shorter than
/// `length`.
fn complete(prefix: &str, length: usize, mut filler: impl FnMut() -> u8) -> String {
    assert!(
        prefix.bytes().all(|b| b.is_ascii_digit()),
        "prefix must contain only digits"
    );
    assert!(
        prefix.len() < length,
        "prefix length must be less than total length"
    );

    let mut digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
    while digits.len() < length - 1 {
        digits.push(filler());
    }
    digits.push(luhn::generate_check_digit(&digits));

    digits.iter().map(|&d| (b'0' + d) as char).collect()
}

/// Generates a number for `brand` with zero filler digits.
///
/// The same brand always produces the same number.
pub fn generate_card_deterministic(brand: Brand) -> String {
    generate_card_deterministic_with_prefix(prefix_for_brand(brand), default_length(brand))
}

/// Generates a number with the given prefix and length, zero filled.
///
/// # Example
///
/// ```
/// use cardcheck::generate::generate_card_deterministic_with_prefix;
///
/// assert_eq!(generate_card_deterministic_with_prefix("601100", 16), "6011000000000004");
/// ```
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    complete(prefix, length, || 0)
}

/// Generates a random number for `brand`.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_card(brand: Brand) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(prefix_for_brand(brand), default_length(brand), &mut rng)
}

/// Generates a random number with the given prefix and length using `rng`.
///
/// Pass a seeded RNG for reproducible output.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng + ?Sized>(prefix: &str, length: usize, rng: &mut R) -> String {
    complete(prefix, length, || rng.gen_range(0..10))
}

/// Generates `count` random numbers for `brand`.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_cards(brand: Brand, count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| generate_card_with_rng(prefix_for_brand(brand), default_length(brand), &mut rng))
        .collect()
}
