//! Iterator adapters for checking card numbers as they arrive.
//!
//! # Example
//!
//! ```
//! use cardcheck::stream::InspectExt;
//! use cardcheck::{Brand, Verdict};
//!
//! let lines = ["4539 1488 0343 6467", "not a card", "371449635398431"];
//! let verdicts: Vec<Verdict> = lines.iter().inspect_cards().collect();
//!
//! assert_eq!(verdicts[0], Verdict::Valid(Brand::Visa));
//! assert_eq!(verdicts[1], Verdict::Invalid);
//! assert_eq!(verdicts[2], Verdict::Valid(Brand::Amex));
//! ```

use crate::validate::{inspect, Verdict};

/// Maps each card number string to its [`Verdict`].
///
/// Created by [`InspectExt::inspect_cards`].
#[derive(Debug, Clone)]
pub struct VerdictStream<I> {
    inner: I,
}

impl<I> VerdictStream<I> {
    /// Wraps an iterator of card number strings.
    #[inline]
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Returns the wrapped iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for VerdictStream<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Verdict;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| inspect(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for VerdictStream<I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

/// Adds [`inspect_cards`](InspectExt::inspect_cards) to any iterator of
/// strings.
pub trait InspectExt: Iterator + Sized
where
    Self::Item: AsRef<str>,
{
    /// Runs every item through [`crate::inspect`].
    fn inspect_cards(self) -> VerdictStream<Self> {
        VerdictStream::new(self)
    }

    /// Keeps the inputs that validate, paired with their brand.
    fn valid_cards(self) -> ValidCards<Self> {
        ValidCards { inner: self }
    }
}

impl<I> InspectExt for I
where
    I: Iterator,
    I::Item: AsRef<str>,
{
}

/// Yields `(input, brand)` for inputs that validate.
///
/// Created by [`InspectExt::valid_cards`].
#[derive(Debug, Clone)]
pub struct ValidCards<I> {
    inner: I,
}

impl<I, S> Iterator for ValidCards<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = (S, crate::Brand);

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.inner.by_ref() {
            if let Verdict::Valid(brand) = inspect(item.as_ref()) {
                return Some((item, brand));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}
