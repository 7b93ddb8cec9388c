//! Luhn (mod 10) checksum.
//!
//! All functions take digit *values* (0-9), not ASCII bytes. Use
//! [`crate::normalize::normalize`] to get from raw input to digits.

/// Doubled digit with 9 subtracted when the result exceeds 9.
/// Index is the digit (0-9).
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns true if the digits pass the Luhn check.
///
/// An empty slice never passes, nor does one holding a value above 9.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::validate;
///
/// assert!(validate(&[3, 7, 1, 4, 4, 9, 6, 3, 5, 3, 9, 8, 4, 3, 1]));
/// assert!(!validate(&[3, 7, 1, 4, 4, 9, 6, 3, 5, 3, 9, 8, 4, 3, 2]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && digits.iter().all(|&d| d <= 9) && compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10).
///
/// Scans from the rightmost digit. The rightmost digit is taken as-is, the
/// next one is doubled, and so on alternating.
///
/// # Panics
///
/// Panics if a value in a doubled position is greater than 9.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    let mut sum: u32 = 0;
    let mut double = false;

    for &digit in digits.iter().rev() {
        sum += if double {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        };
        double = !double;
    }

    sum
}

/// Computes the check digit to append to `digits` so the result validates.
///
/// # Panics
///
/// Panics if a value in a doubled position is greater than 9.
///
/// # Example
///
/// ```
/// use cardcheck::luhn::generate_check_digit;
///
/// // 601100000000000 + 4
/// let partial = [6, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
/// assert_eq!(generate_check_digit(&partial), 4);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Once the check digit is appended every existing digit shifts one
    // position left, so the rightmost one here is the first to be doubled.
    let mut sum: u32 = 0;
    let mut double = true;

    for &digit in digits.iter().rev() {
        sum += if double {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        };
        double = !double;
    }

    ((10 - (sum % 10)) % 10) as u8
}
