//! # cardcheck
//!
//! Card number validation (Luhn) and issuing-network identification.
//!
//! ## Quick Start
//!
//! ```rust
//! use cardcheck::{identify_brand, validate, Brand};
//!
//! assert!(validate("4539 1488 0343 6467"));
//! assert_eq!(identify_brand("4539 1488 0343 6467"), Brand::Visa);
//!
//! assert!(!validate("1234567890123"));
//! assert!(!validate("abcd efgh"));
//! ```
//!
//! ## Validation
//!
//! A number is valid when, after removing whitespace, it is made of 13 to 19
//! ASCII digits and passes the Luhn checksum. Any other character rejects it
//! outright; dashes are *not* treated as separators.
//!
//! [`check`] gives the reason for a rejection:
//!
//! ```rust
//! use cardcheck::{check, ValidationError};
//!
//! assert_eq!(
//!     check("4539 1488 0343 646").unwrap_err(),
//!     ValidationError::InvalidChecksum
//! );
//! ```
//!
//! ## Brand Identification
//!
//! [`identify_brand`] works on any input, valid or not, and returns
//! [`Brand::Unknown`] when no rule matches. First match wins:
//!
//! | Brand | Prefix | Length |
//! |-------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | MasterCard | 51-55, 2221-2720 | 16 |
//! | American Express | 34, 37 | 15 |
//! | Discover | 6011, 65, 644-649, 622126-622925 | 16-19 |
//! | JCB | 3528-3589 | 16-19 |
//!
//! ## Whole Pipeline
//!
//! ```rust
//! use cardcheck::{inspect, Brand, Verdict};
//!
//! assert_eq!(inspect("6011000000000004"), Verdict::Valid(Brand::Discover));
//! assert_eq!(inspect("4000000000002"), Verdict::Invalid);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `generate` | Random test card generation |
//! | `serde` | `Serialize` for `Brand`, `Verdict`, `BatchSummary` |
//! | `tracing` | Trace events from [`check`] |
//! | `cli` | The `cardcheck` command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod card;
pub mod detect;
pub mod error;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod normalize;
pub mod stream;
pub mod validate;

// Re-export main types at crate root
pub use batch::BatchSummary;
pub use card::{Brand, CardNumber, ParseBrandError, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use detect::identify_brand;
pub use error::ValidationError;
pub use normalize::strip_whitespace;
pub use validate::{check, inspect, validate, Verdict};
