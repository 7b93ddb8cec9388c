//! Masking for display and logging.
//!
//! Only the last four digits of a card number are ever shown.

use crate::card::CardNumber;

/// Masks a validated card showing only the last 4 digits, grouped by four.
///
/// # Example
///
/// ```
/// use cardcheck::check;
///
/// let card = check("4539 1488 0343 6467").unwrap();
/// assert_eq!(card.masked(), "****-****-****-6467");
///
/// let card = check("371449635398431").unwrap();
/// assert_eq!(card.masked(), "***-****-****-8431");
/// ```
pub fn mask_card(card: &CardNumber) -> String {
    group_masked(card.length(), card.last_four())
}

/// Masks an arbitrary input string, keeping only the last 4 digits.
///
/// Non-digit characters are dropped. Inputs with 4 or fewer digits are fully
/// masked so short fragments are not echoed back.
///
/// # Example
///
/// ```
/// use cardcheck::mask::mask_string;
///
/// assert_eq!(mask_string("6011 0000 0000 0004"), "****-****-****-0004");
/// assert_eq!(mask_string("123"), "***");
/// assert_eq!(mask_string(""), "");
/// ```
pub fn mask_string(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    let len = digits.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    group_masked(len, &digits[len - 4..])
}

/// Builds `*` groups of four counted from the right, then the visible tail.
fn group_masked(len: usize, last_four: &str) -> String {
    let masked_count = len.saturating_sub(last_four.len());
    let mut result = String::with_capacity(len + len / 4);

    for i in 0..masked_count {
        // Groups align on the right-hand side so the tail is its own group
        if i > 0 && (masked_count - i) % 4 == 0 {
            result.push('-');
        }
        result.push('*');
    }

    if masked_count > 0 {
        result.push('-');
    }

    result.push_str(last_four);
    result
}
