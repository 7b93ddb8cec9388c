//! Tallies over many card numbers.
//!
//! Used by the CLI's `--lines` mode to report how many inputs validated and
//! how the valid ones split across brands.

use std::collections::BTreeMap;

use crate::card::Brand;
use crate::stream::InspectExt;
use crate::validate::Verdict;

/// Counts of valid and invalid inputs, with valid ones broken down by brand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchSummary {
    valid: usize,
    invalid: usize,
    by_brand: BTreeMap<Brand, usize>,
}

impl BatchSummary {
    /// Creates an empty summary.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one verdict to the tallies.
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Valid(brand) => {
                self.valid += 1;
                *self.by_brand.entry(brand).or_insert(0) += 1;
            }
            Verdict::Invalid => self.invalid += 1,
        }
    }

    /// Number of inputs that validated.
    #[inline]
    pub fn valid(&self) -> usize {
        self.valid
    }

    /// Number of inputs that did not validate.
    #[inline]
    pub fn invalid(&self) -> usize {
        self.invalid
    }

    /// Total inputs recorded.
    #[inline]
    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }

    /// Number of valid inputs identified as `brand`.
    #[inline]
    pub fn count_for(&self, brand: Brand) -> usize {
        self.by_brand.get(&brand).copied().unwrap_or(0)
    }

    /// Per-brand counts of valid inputs, in `Brand` order. Brands with no
    /// valid inputs are omitted.
    pub fn brands(&self) -> impl Iterator<Item = (Brand, usize)> + '_ {
        self.by_brand.iter().map(|(&brand, &count)| (brand, count))
    }
}

impl FromIterator<Verdict> for BatchSummary {
    fn from_iter<T: IntoIterator<Item = Verdict>>(iter: T) -> Self {
        let mut summary = Self::new();
        summary.extend(iter);
        summary
    }
}

impl Extend<Verdict> for BatchSummary {
    fn extend<T: IntoIterator<Item = Verdict>>(&mut self, iter: T) {
        for verdict in iter {
            self.record(verdict);
        }
    }
}

/// Inspects every card number and summarizes the results.
///
/// # Example
///
/// ```
/// use cardcheck::batch::summarize;
/// use cardcheck::Brand;
///
/// let summary = summarize(&["4539148803436467", "abcd efgh", "6011000000000004"]);
/// assert_eq!(summary.valid(), 2);
/// assert_eq!(summary.invalid(), 1);
/// assert_eq!(summary.count_for(Brand::Discover), 1);
/// ```
pub fn summarize<S: AsRef<str>>(cards: &[S]) -> BatchSummary {
    cards.iter().inspect_cards().collect()
}

/// Counts valid and invalid card numbers.
///
/// Returns `(valid, invalid)`.
///
/// # Example
///
/// ```
/// use cardcheck::batch::count_valid;
///
/// let (valid, invalid) = count_valid(&["371449635398431", "1234567890123"]);
/// assert_eq!((valid, invalid), (1, 1));
/// ```
pub fn count_valid<S: AsRef<str>>(cards: &[S]) -> (usize, usize) {
    let valid = cards.iter().filter(|c| crate::validate(c.as_ref())).count();
    (valid, cards.len() - valid)
}
