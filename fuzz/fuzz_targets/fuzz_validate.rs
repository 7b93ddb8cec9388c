//! Fuzz target for card validation.
//!
//! validate() must never panic, must agree with check(), and must ignore
//! whitespace.

#![no_main]

use cardcheck::{check, inspect, strip_whitespace, validate};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let valid = validate(data);
    assert_eq!(valid, check(data).is_ok());
    assert_eq!(valid, inspect(data).is_valid());
    assert_eq!(valid, validate(&strip_whitespace(data)));
});
